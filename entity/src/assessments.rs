use super::users;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_ASSESSMENTS: &str = "PK_assessments";
    pub const FK_ASSESSMENTS_CREATED_BY: &str = "FK_assessments_created_by";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "assessments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub date: Date,
    pub attendance_threshold: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub created_by: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CreatedBy,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::CreatedBy => Entity::belongs_to(users::Entity)
                .from(Column::CreatedBy)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
