use crate::{
    eligibility::{Threshold, Window},
    error::Result,
    extractors::{Json, ValidatedJson},
    jwt::Claims,
    store::{AssessmentStore, NewAssessment},
    utils::parse_date,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::assessments;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    name: String,
    date: String,
    attendance_threshold: Option<f64>,
    start_date: String,
    end_date: String,
}

pub async fn create_assessment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<assessments::Model>)> {
    let window = Window::new(
        parse_date(&request.start_date)?,
        parse_date(&request.end_date)?,
    )?;
    let attendance_threshold = request
        .attendance_threshold
        .map(Threshold::new)
        .transpose()?
        .unwrap_or_default();

    let assessment = AssessmentStore::new(state.db())
        .create(NewAssessment {
            name: request.name.trim().to_owned(),
            date: parse_date(&request.date)?,
            attendance_threshold,
            window,
            created_by: claims.sub,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(assessment)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listed {
    #[serde(flatten)]
    assessment: assessments::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by_name: Option<String>,
}

pub async fn list_assessments<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
) -> Result<Json<Vec<Listed>>> {
    let assessments = AssessmentStore::new(state.db()).list().await?;

    Ok(Json(
        assessments
            .into_iter()
            .map(|(assessment, creator)| Listed {
                assessment,
                created_by_name: creator.map(|creator| creator.name),
            })
            .collect(),
    ))
}
