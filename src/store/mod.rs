//! Repositories over a sea-orm connection.
//!
//! Each store borrows anything implementing [`sea_orm::ConnectionTrait`], so the same code runs
//! against the pool and inside a transaction.

mod assessments;
mod attendance;
mod eligibility;
mod exams;
mod users;

pub use assessments::*;
pub use attendance::*;
pub use eligibility::*;
pub use exams::*;
pub use users::*;

use serde::Serialize;

/// Outcome of an insert-or-update keyed on a unique constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "record", rename_all = "lowercase")]
pub enum Upserted<T> {
    Created(T),
    Updated(T),
}

impl<T> Upserted<T> {
    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[inline]
    pub fn get(&self) -> &T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }

    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }
}

/// Outcome of a get-or-create lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Found<T> {
    Existing(T),
    Created(T),
}

impl<T> Found<T> {
    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Existing(value) | Self::Created(value) => value,
        }
    }
}
