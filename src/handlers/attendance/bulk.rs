use crate::{
    error::{self, Result},
    extractors::Json,
    jwt::Claims,
    store::{AttendanceStore, Mark},
    utils::parse_date,
    StateTrait,
};
use axum::extract::State;
use entity::{
    attendance::{self, Status},
    Subject,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Record {
    student: Uuid,
    status: Status,
}

#[derive(Deserialize)]
pub struct Request {
    date: String,
    subject: String,
    records: Vec<Record>,
}

#[derive(Serialize)]
pub struct Outcome {
    student: Uuid,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<attendance::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// Marks a whole class for one date and subject. Every record is handled on its own, a failing
/// student shows up in the response instead of failing the request.
pub async fn mark_bulk<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Json(request): Json<Request>,
) -> Result<Json<Vec<Outcome>>> {
    if request.records.is_empty() {
        return Err(error::EMPTY_RECORDS);
    }

    let date = parse_date(&request.date)?;
    let subject = request.subject.parse::<Subject>()?;

    let store = AttendanceStore::new(state.db());
    let mut outcomes = Vec::with_capacity(request.records.len());

    for record in request.records {
        let mark = Mark {
            student: record.student,
            date,
            subject,
            status: record.status,
            marked_by: claims.sub,
        };

        let outcome = match store.mark(mark).await {
            Ok(res) => Outcome {
                student: record.student,
                success: true,
                data: Some(res.into_inner()),
                code: None,
                error: None,
            },
            Err(err) => Outcome {
                student: record.student,
                success: false,
                data: None,
                code: Some(err.code()),
                error: Some(err.message()),
            },
        };

        outcomes.push(outcome);
    }

    Ok(Json(outcomes))
}
