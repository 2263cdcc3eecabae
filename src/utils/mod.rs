mod date;
mod orm;
pub mod panic;
mod signal;

pub use date::*;
pub use orm::*;
pub use signal::*;

use crate::error::Result;
use entity::Subject;

/// Parses an optional subject name from a request, `INVALID_SUBJECT` when unknown.
pub fn parse_subject(value: Option<&str>) -> Result<Option<Subject>> {
    Ok(value.map(str::parse::<Subject>).transpose()?)
}
