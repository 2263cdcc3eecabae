use super::const_error;

const_error! {
    #[error("INTERNAL", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}
const_error! {
    #[error("JSON_MISSING_FIELDS", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}
const_error! {
    #[error("JSON_SYNTAX_ERROR", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}
const_error! {
    #[error("JSON_CONTENT_TYPE", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}
const_error! {
    #[error("JSON_VALIDATE_INVALID", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}
const_error! {
    #[error("JSON_DESERIALIZE", "failed to deserialize json")]
    #[status(INTERNAL_SERVER_ERROR)]
    const JSON_DESERIALIZE;
}
const_error! {
    #[error("INVALID_QUERY", "invalid query parameters")]
    #[status(BAD_REQUEST)]
    const INVALID_QUERY;
}
const_error! {
    #[error("INVALID_PATH", "invalid path parameter")]
    #[status(BAD_REQUEST)]
    const INVALID_PATH;
}
const_error! {
    #[error("INVALID_THRESHOLD", "attendance threshold must be between 0 and 100")]
    #[status(BAD_REQUEST)]
    const INVALID_THRESHOLD;
}
const_error! {
    #[error("INVALID_DATE_RANGE", "start date must not be after end date")]
    #[status(BAD_REQUEST)]
    const INVALID_DATE_RANGE;
}
const_error! {
    #[error("INVALID_DATE", "invalid date")]
    #[status(BAD_REQUEST)]
    const INVALID_DATE;
}
const_error! {
    #[error("INVALID_SUBJECT", "unknown subject")]
    #[status(BAD_REQUEST)]
    const INVALID_SUBJECT;
}
const_error! {
    #[error("EMPTY_RECORDS", "please provide an array of attendance records")]
    #[status(BAD_REQUEST)]
    const EMPTY_RECORDS;
}
const_error! {
    #[error("EXAM_NOT_FOUND", "exam not found")]
    #[status(NOT_FOUND)]
    const EXAM_NOT_FOUND;
}
const_error! {
    #[error("ASSESSMENT_NOT_FOUND", "assessment not found")]
    #[status(NOT_FOUND)]
    const ASSESSMENT_NOT_FOUND;
}
const_error! {
    #[error("STUDENT_NOT_FOUND", "student not found")]
    #[status(NOT_FOUND)]
    const STUDENT_NOT_FOUND;
}
const_error! {
    #[error("USER_NOT_FOUND", "user not found")]
    #[status(NOT_FOUND)]
    const USER_NOT_FOUND;
}
const_error! {
    #[error("CONFLICT", "the record was modified concurrently")]
    #[status(CONFLICT)]
    const CONFLICT;
}
const_error! {
    #[error("USER_IN_USE", "user is still referenced by attendance records or assessments")]
    #[status(CONFLICT)]
    const USER_IN_USE;
}
const_error! {
    #[error("USER_ALREADY_EXISTS", "user already exists")]
    #[status(BAD_REQUEST)]
    const USER_ALREADY_EXISTS;
}
const_error! {
    #[error("USN_ALREADY_EXISTS", "usn is already taken")]
    #[status(BAD_REQUEST)]
    const USN_ALREADY_EXISTS;
}
const_error! {
    #[error("DATABASE_ERROR", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}
const_error! {
    #[error("COULD_NOT_GET_CLAIMS", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}
const_error! {
    #[error("NOT_ENOUGH_PERMISSIONS", "not enough permissions")]
    #[status(FORBIDDEN)]
    const NOT_ENOUGH_PERMISSIONS;
}
const_error! {
    #[error("NOT_AUTHORIZED", "not authorized to access this resource")]
    #[status(FORBIDDEN)]
    const NOT_AUTHORIZED;
}
