pub use sea_orm_migration::prelude::*;

mod m20250301_090000_create_users_table;
mod m20250301_090100_create_attendance_table;
mod m20250301_090200_create_exams_table;
mod m20250301_090300_create_assessments_table;
mod m20250301_090400_create_eligibility_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_090000_create_users_table::Migration),
            Box::new(m20250301_090100_create_attendance_table::Migration),
            Box::new(m20250301_090200_create_exams_table::Migration),
            Box::new(m20250301_090300_create_assessments_table::Migration),
            Box::new(m20250301_090400_create_eligibility_table::Migration),
        ]
    }
}
