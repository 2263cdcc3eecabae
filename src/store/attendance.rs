use super::Upserted;
use crate::{
    eligibility::Window,
    error::{self, DatabaseError, Result},
};
use chrono::{Datelike, NaiveDate, Utc};
use entity::{
    attendance::{self, constraints::*, Status},
    users, Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct Mark {
    pub student: Uuid,
    pub date: NaiveDate,
    pub subject: Subject,
    pub status: Status,
    pub marked_by: Uuid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceFilter {
    pub date: Option<NaiveDate>,
    pub student: Option<Uuid>,
    pub subject: Option<Subject>,
}

pub struct AttendanceStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records of `student` dated within `window`, optionally limited to one subject.
    pub async fn find_in_window(
        &self,
        student: Uuid,
        subject: Option<Subject>,
        window: Window,
    ) -> Result<Vec<attendance::Model>> {
        let mut query = attendance::Entity::find()
            .filter(attendance::Column::Student.eq(student))
            .filter(attendance::Column::Date.between(window.start(), window.end()));

        if let Some(subject) = subject {
            query = query.filter(attendance::Column::Subject.eq(subject));
        }

        Ok(query
            .order_by_asc(attendance::Column::Date)
            .all(self.db)
            .await?)
    }

    /// Every record of `student`, newest first.
    pub async fn find_for_student(
        &self,
        student: Uuid,
        subject: Option<Subject>,
    ) -> Result<Vec<attendance::Model>> {
        let mut query = attendance::Entity::find().filter(attendance::Column::Student.eq(student));

        if let Some(subject) = subject {
            query = query.filter(attendance::Column::Subject.eq(subject));
        }

        Ok(query
            .order_by_desc(attendance::Column::Date)
            .all(self.db)
            .await?)
    }

    pub async fn find(&self, filter: AttendanceFilter) -> Result<Vec<attendance::Model>> {
        let mut query = attendance::Entity::find();

        if let Some(date) = filter.date {
            query = query.filter(attendance::Column::Date.eq(date));
        }
        if let Some(student) = filter.student {
            query = query.filter(attendance::Column::Student.eq(student));
        }
        if let Some(subject) = filter.subject {
            query = query.filter(attendance::Column::Subject.eq(subject));
        }

        Ok(query
            .order_by_desc(attendance::Column::Date)
            .order_by_asc(attendance::Column::Subject)
            .all(self.db)
            .await?)
    }

    /// Inserts the record for (student, date, subject) or overwrites its status and marker.
    pub async fn mark(&self, mark: Mark) -> Result<Upserted<attendance::Model>> {
        users::Entity::find_student(mark.student)
            .one(self.db)
            .await?
            .ok_or(error::STUDENT_NOT_FOUND)?;

        let existing = attendance::Entity::find_by_key(mark.student, mark.date, mark.subject)
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return self.overwrite(existing, &mark).await.map(Upserted::Updated);
        }

        let record = attendance::ActiveModel {
            id: Set(Uuid::new_v4()),
            student: Set(mark.student),
            date: Set(mark.date),
            subject: Set(mark.subject),
            status: Set(mark.status),
            marked_by: Set(mark.marked_by),
            created_at: Set(Utc::now()),
        };

        match record.insert(self.db).await {
            Ok(record) => Ok(Upserted::Created(record)),
            Err(err) if err.unique_violation(UC_ATTENDANCE_STUDENT_DATE_SUBJECT) => {
                debug!(
                    "lost insert race for attendance of {} on {}, updating instead",
                    mark.student, mark.date
                );

                let existing =
                    attendance::Entity::find_by_key(mark.student, mark.date, mark.subject)
                        .one(self.db)
                        .await?
                        .ok_or(error::CONFLICT)?;

                self.overwrite(existing, &mark).await.map(Upserted::Updated)
            }
            Err(err) if err.foreign_key_violation(FK_ATTENDANCE_MARKED_BY) => {
                Err(error::USER_NOT_FOUND)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn overwrite(
        &self,
        existing: attendance::Model,
        mark: &Mark,
    ) -> Result<attendance::Model> {
        let mut record: attendance::ActiveModel = existing.into();
        record.status = Set(mark.status);
        record.marked_by = Set(mark.marked_by);

        Ok(record.update(self.db).await?)
    }

    /// Distinct `(year, month)` pairs that have at least one record, oldest first.
    pub async fn months_with_records(&self) -> Result<Vec<(i32, u32)>> {
        let dates = attendance::Entity::find()
            .select_only()
            .column(attendance::Column::Date)
            .distinct()
            .into_tuple::<NaiveDate>()
            .all(self.db)
            .await?;

        let months: BTreeSet<_> = dates
            .into_iter()
            .map(|date| (date.year(), date.month()))
            .collect();

        Ok(months.into_iter().collect())
    }
}
