#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{database, date, request::*, response::*, setup, Env, User};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use attendance_backend::error;
pub use entity::{attendance::Status, users::Role, Subject};
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use uuid::Uuid;
