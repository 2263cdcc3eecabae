use crate::{
    eligibility::{Threshold, Window},
    error::{self, DatabaseError, Result},
};
use chrono::{NaiveDate, Utc};
use entity::{
    assessments::{self, constraints::*},
    users,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub name: String,
    pub date: NaiveDate,
    pub attendance_threshold: Threshold,
    pub window: Window,
    pub created_by: Uuid,
}

pub struct AssessmentStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssessmentStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, assessment: NewAssessment) -> Result<assessments::Model> {
        let assessment = assessments::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(assessment.name),
            date: Set(assessment.date),
            attendance_threshold: Set(assessment.attendance_threshold.value()),
            start_date: Set(assessment.window.start()),
            end_date: Set(assessment.window.end()),
            created_by: Set(assessment.created_by),
            created_at: Set(Utc::now()),
        };

        match assessment.insert(self.db).await {
            Ok(assessment) => Ok(assessment),
            Err(err) if err.foreign_key_violation(FK_ASSESSMENTS_CREATED_BY) => {
                Err(error::USER_NOT_FOUND)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find(&self, id: Uuid) -> Result<assessments::Model> {
        assessments::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(error::ASSESSMENT_NOT_FOUND)
    }

    /// All assessments with their creator, ordered by date.
    pub async fn list(&self) -> Result<Vec<(assessments::Model, Option<users::Model>)>> {
        Ok(assessments::Entity::find()
            .find_also_related(users::Entity)
            .order_by_asc(assessments::Column::Date)
            .all(self.db)
            .await?)
    }

    /// Assessments dated `today` or later, soonest first.
    pub async fn upcoming(&self, today: NaiveDate) -> Result<Vec<assessments::Model>> {
        Ok(assessments::Entity::find()
            .filter(assessments::Column::Date.gte(today))
            .order_by_asc(assessments::Column::Date)
            .all(self.db)
            .await?)
    }
}

/// Window and threshold stored on an assessment.
pub fn assessment_window(assessment: &assessments::Model) -> Result<(Window, Threshold)> {
    Ok((
        Window::new(assessment.start_date, assessment.end_date)?,
        Threshold::new(assessment.attendance_threshold)?,
    ))
}
