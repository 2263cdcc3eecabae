use attendance_backend::{connect_database, eligibility::batch};
use cmds::log_report;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let db = connect_database().await?;
    let reports = batch::calculate_all(&db).await?;

    let mut failures = 0;
    for report in &reports {
        log_report(report);
        failures += report.report.failures.len();
    }

    info!("recalculated {} months", reports.len());

    if failures > 0 {
        anyhow::bail!("{failures} pairs failed");
    }

    Ok(())
}
