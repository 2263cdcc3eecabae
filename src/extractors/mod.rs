mod claims;
mod json;
mod path;
mod query;

pub use json::*;
pub use path::*;
pub use query::*;
