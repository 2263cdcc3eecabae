use attendance_backend::{
    connect_database,
    jwt::{Claims, Jwt},
    store::UserStore,
};
use chrono::Duration;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use uuid::Uuid;

/// Prints a bearer token for an existing user.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    user: Uuid,

    /// Lifetime of the token in days.
    #[arg(long, default_value_t = 30)]
    days: i64,

    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();

    let args = Args::parse();

    match run(args).await {
        Ok(token) => {
            println!("{token}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<String> {
    let db = connect_database().await?;
    let user = UserStore::new(&db).find(args.user).await?;

    let claims = Claims::new(user.id, user.role, Duration::days(args.days));
    let token = Jwt::new(args.secret.as_bytes()).encode(&claims)?;

    Ok(token)
}
