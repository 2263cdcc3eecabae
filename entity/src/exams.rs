use crate::Subject;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_EXAMS: &str = "PK_exams";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "exams")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub subject: Subject,
    pub date: Date,
    pub semester: i16,
    pub month: i16,
    pub year: i32,
    pub attendance_threshold: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_for_month(subject: Subject, month: i16, year: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::Subject.eq(subject))
            .filter(Column::Month.eq(month))
            .filter(Column::Year.eq(year))
    }
}
