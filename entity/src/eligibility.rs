use super::{exams, users};
use crate::Subject;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_ELIGIBILITY: &str = "PK_eligibility";
    pub const UC_ELIGIBILITY_STUDENT_EXAM_SUBJECT: &str = "UC_eligibility_student_exam_subject";
    pub const FK_ELIGIBILITY_STUDENT: &str = "FK_eligibility_student";
    pub const FK_ELIGIBILITY_EXAM: &str = "FK_eligibility_exam";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "eligibility")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student: Uuid,
    pub exam: Uuid,
    pub subject: Subject,
    pub is_eligible: bool,
    pub attendance_percentage: f64,
    pub total_classes: i64,
    pub attended_classes: i64,
    pub calculated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Exam,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(users::Entity)
                .from(Column::Student)
                .to(users::Column::Id)
                .into(),
            Self::Exam => Entity::belongs_to(exams::Entity)
                .from(Column::Exam)
                .to(exams::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_key(student: Uuid, exam: Uuid, subject: Subject) -> Select<Entity> {
        Self::find()
            .filter(Column::Student.eq(student))
            .filter(Column::Exam.eq(exam))
            .filter(Column::Subject.eq(subject))
    }
}
