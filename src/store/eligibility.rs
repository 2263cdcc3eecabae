use super::Upserted;
use crate::{
    eligibility::AttendanceSummary,
    error::{self, DatabaseError, Result},
};
use chrono::Utc;
use entity::{
    eligibility::{self, constraints::*},
    exams, users, Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct EligibilityStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EligibilityStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes `summary` for (student, exam, subject), overwriting an earlier calculation.
    pub async fn upsert(
        &self,
        student: Uuid,
        exam: Uuid,
        subject: Subject,
        summary: AttendanceSummary,
    ) -> Result<Upserted<eligibility::Model>> {
        let existing = eligibility::Entity::find_by_key(student, exam, subject)
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return self.overwrite(existing, summary).await.map(Upserted::Updated);
        }

        let record = eligibility::ActiveModel {
            id: Set(Uuid::new_v4()),
            student: Set(student),
            exam: Set(exam),
            subject: Set(subject),
            is_eligible: Set(summary.is_eligible),
            attendance_percentage: Set(summary.attendance_percentage),
            total_classes: Set(summary.total_classes),
            attended_classes: Set(summary.attended_classes),
            calculated_at: Set(Utc::now()),
        };

        match record.insert(self.db).await {
            Ok(record) => Ok(Upserted::Created(record)),
            Err(err) if err.unique_violation(UC_ELIGIBILITY_STUDENT_EXAM_SUBJECT) => {
                let existing = eligibility::Entity::find_by_key(student, exam, subject)
                    .one(self.db)
                    .await?
                    .ok_or(error::CONFLICT)?;

                self.overwrite(existing, summary).await.map(Upserted::Updated)
            }
            Err(err) if err.foreign_key_violation(FK_ELIGIBILITY_EXAM) => {
                Err(error::EXAM_NOT_FOUND)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn overwrite(
        &self,
        existing: eligibility::Model,
        summary: AttendanceSummary,
    ) -> Result<eligibility::Model> {
        let mut record: eligibility::ActiveModel = existing.into();
        record.is_eligible = Set(summary.is_eligible);
        record.attendance_percentage = Set(summary.attendance_percentage);
        record.total_classes = Set(summary.total_classes);
        record.attended_classes = Set(summary.attended_classes);
        record.calculated_at = Set(Utc::now());

        Ok(record.update(self.db).await?)
    }

    /// Records of one exam together with the student they belong to.
    pub async fn find_for_exam(
        &self,
        exam: Uuid,
    ) -> Result<Vec<(eligibility::Model, Option<users::Model>)>> {
        Ok(eligibility::Entity::find()
            .filter(eligibility::Column::Exam.eq(exam))
            .find_also_related(users::Entity)
            .order_by_asc(users::Column::Name)
            .all(self.db)
            .await?)
    }

    /// Records of one student together with their exam, newest exam first.
    pub async fn find_for_student(
        &self,
        student: Uuid,
    ) -> Result<Vec<(eligibility::Model, Option<exams::Model>)>> {
        Ok(eligibility::Entity::find()
            .filter(eligibility::Column::Student.eq(student))
            .find_also_related(exams::Entity)
            .order_by_desc(exams::Column::Date)
            .all(self.db)
            .await?)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(eligibility::Entity::find().count(self.db).await?)
    }
}
