use sea_orm::{DbErr, RuntimeErr, SqlErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};
use std::borrow::Cow;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        match is_code_and_constraint(self, UNIQUE_VIOLATION, constraint) {
            Some(result) => result,
            None => matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        }
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        match is_code_and_constraint(self, FOREIGN_KEY_VIOLATION, constraint) {
            Some(result) => result,
            None => matches!(
                self.sql_err(),
                Some(SqlErr::ForeignKeyConstraintViolation(_))
            ),
        }
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

/// `None` when the error did not come from postgres. Other backends don't report constraint
/// names, so the caller falls back to sea-orm's classification.
fn is_code_and_constraint(err: &DbErr, code: &str, constraint: &str) -> Option<bool> {
    let Some(db_err) = get_database_error(err) else {
        return Some(false);
    };

    if db_err.as_error().is::<PgDatabaseError>() {
        return Some(
            db_err.code() == Some(Cow::Borrowed(code)) && db_err.constraint() == Some(constraint),
        );
    }

    None
}
