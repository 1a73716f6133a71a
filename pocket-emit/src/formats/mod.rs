//! Emitter implementations

pub mod json;
pub mod sql;

pub use json::JsonEmitter;
pub use sql::{escape_sql, unescape_sql, SqlEmitter, SqlOptions};
