pub mod macros;
pub mod prelude;
mod request;
mod response;
pub mod setup;
mod user;

pub use setup::*;
pub use user::*;

use chrono::NaiveDate;

#[allow(unused)]
#[track_caller]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("invalid test date")
}
