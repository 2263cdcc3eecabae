use super::Found;
use crate::{
    eligibility::{Threshold, Window},
    error::{self, Result},
    utils::set_option,
};
use chrono::{NaiveDate, Utc};
use entity::{eligibility, exams, Subject};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewExam {
    pub name: String,
    pub subject: Subject,
    pub date: NaiveDate,
    pub semester: i16,
    pub month: i16,
    pub year: i32,
    pub attendance_threshold: Threshold,
}

#[derive(Debug, Clone, Default)]
pub struct ExamChanges {
    pub name: Option<String>,
    pub subject: Option<Subject>,
    pub date: Option<NaiveDate>,
    pub semester: Option<i16>,
    pub month: Option<i16>,
    pub year: Option<i32>,
    pub attendance_threshold: Option<Threshold>,
}

impl ExamChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.subject.is_none()
            && self.date.is_none()
            && self.semester.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.attendance_threshold.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExamFilter {
    pub subject: Option<Subject>,
    pub month: Option<i16>,
    pub year: Option<i32>,
}

pub struct ExamStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(&self, id: Uuid) -> Result<exams::Model> {
        exams::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(error::EXAM_NOT_FOUND)
    }

    pub async fn list(&self, filter: ExamFilter) -> Result<Vec<exams::Model>> {
        let mut query = exams::Entity::find();

        if let Some(subject) = filter.subject {
            query = query.filter(exams::Column::Subject.eq(subject));
        }
        if let Some(month) = filter.month {
            query = query.filter(exams::Column::Month.eq(month));
        }
        if let Some(year) = filter.year {
            query = query.filter(exams::Column::Year.eq(year));
        }

        Ok(query
            .order_by_asc(exams::Column::Date)
            .order_by_asc(exams::Column::Subject)
            .all(self.db)
            .await?)
    }

    pub async fn create(&self, exam: NewExam) -> Result<exams::Model> {
        let exam = exams::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(exam.name),
            subject: Set(exam.subject),
            date: Set(exam.date),
            semester: Set(exam.semester),
            month: Set(exam.month),
            year: Set(exam.year),
            attendance_threshold: Set(exam.attendance_threshold.value()),
            created_at: Set(Utc::now()),
        };

        Ok(exam.insert(self.db).await?)
    }

    /// Returns the exam of `subject` for the given month, creating a default one when missing.
    pub async fn get_or_create(
        &self,
        subject: Subject,
        month: u32,
        year: i32,
        threshold: Threshold,
    ) -> Result<Found<exams::Model>> {
        let window = Window::month(year, month)?;
        let month = i16::try_from(month).map_err(|_| error::INVALID_DATE)?;

        let existing = exams::Entity::find_for_month(subject, month, year)
            .order_by_asc(exams::Column::CreatedAt)
            .one(self.db)
            .await?;

        if let Some(exam) = existing {
            return Ok(Found::Existing(exam));
        }

        info!("creating {subject} exam for {month}/{year}");

        let exam = self
            .create(NewExam {
                name: format!("{subject} Exam - {month}/{year}"),
                subject,
                date: window.end(),
                semester: 1,
                month,
                year,
                attendance_threshold: threshold,
            })
            .await?;

        Ok(Found::Created(exam))
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> ExamStore<'a, C> {
    /// Applies `changes`. Moving the exam to another subject or month invalidates its eligibility
    /// records, they are removed in the same transaction.
    pub async fn update(&self, id: Uuid, changes: ExamChanges) -> Result<exams::Model> {
        let txn = self.db.begin().await?;
        let existing = ExamStore::new(&txn).find(id).await?;

        // the orm would generate an empty SET clause
        if changes.is_empty() {
            return Ok(existing);
        }

        let moved = changes.subject.is_some_and(|subject| subject != existing.subject)
            || changes.month.is_some_and(|month| month != existing.month)
            || changes.year.is_some_and(|year| year != existing.year);

        if moved {
            let res = eligibility::Entity::delete_many()
                .filter(eligibility::Column::Exam.eq(id))
                .exec(&txn)
                .await?;

            debug!(
                "exam {id} moved, dropped {} eligibility records",
                res.rows_affected
            );
        }

        let exam = exams::ActiveModel {
            id: Set(id),
            name: set_option(changes.name),
            subject: set_option(changes.subject),
            date: set_option(changes.date),
            semester: set_option(changes.semester),
            month: set_option(changes.month),
            year: set_option(changes.year),
            attendance_threshold: set_option(changes.attendance_threshold.map(Threshold::value)),
            ..Default::default()
        };

        let exam = exam.update(&txn).await?;

        txn.commit().await?;

        Ok(exam)
    }

    /// Removes the exam and every eligibility record calculated for it.
    pub async fn delete(&self, id: Uuid) -> Result {
        let txn = self.db.begin().await?;

        eligibility::Entity::delete_many()
            .filter(eligibility::Column::Exam.eq(id))
            .exec(&txn)
            .await?;

        let res = exams::Entity::delete_by_id(id).exec(&txn).await?;

        if res.rows_affected == 0 {
            return Err(error::EXAM_NOT_FOUND);
        }

        txn.commit().await?;

        Ok(())
    }
}
