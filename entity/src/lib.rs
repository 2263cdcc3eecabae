pub mod assessments;
pub mod attendance;
pub mod eligibility;
pub mod exams;
mod subject;
pub mod users;

pub use subject::*;
