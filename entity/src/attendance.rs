use super::users;
use crate::Subject;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_ATTENDANCE: &str = "PK_attendance";
    pub const UC_ATTENDANCE_STUDENT_DATE_SUBJECT: &str = "UC_attendance_student_date_subject";
    pub const FK_ATTENDANCE_STUDENT: &str = "FK_attendance_student";
    pub const FK_ATTENDANCE_MARKED_BY: &str = "FK_attendance_marked_by";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student: Uuid,
    pub date: Date,
    pub subject: Subject,
    pub status: Status,
    pub marked_by: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    MarkedBy,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(users::Entity)
                .from(Column::Student)
                .to(users::Column::Id)
                .into(),
            Self::MarkedBy => Entity::belongs_to(users::Entity)
                .from(Column::MarkedBy)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_key(student: Uuid, date: Date, subject: Subject) -> Select<Entity> {
        Self::find()
            .filter(Column::Student.eq(student))
            .filter(Column::Date.eq(date))
            .filter(Column::Subject.eq(subject))
    }
}
