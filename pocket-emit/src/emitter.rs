//! Emitter trait definition
//!
//! This module defines the Emitter trait that all output formats implement.

use crate::error::EmitError;
use pocket_parser::pocket::Catalog;

/// Trait for catalog output formats
///
/// # Examples
///
/// ```ignore
/// struct CountEmitter;
///
/// impl Emitter for CountEmitter {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn emit(&self, catalog: &Catalog) -> Result<String, EmitError> {
///         Ok(catalog.lessons.len().to_string())
///     }
/// }
/// ```
pub trait Emitter: Send + Sync {
    /// The name of this emitter (e.g., "sql", "json")
    fn name(&self) -> &str;

    /// Optional description of this emitter
    fn description(&self) -> &str {
        ""
    }

    /// Extension of files holding this emitter's output, without the dot
    fn file_extension(&self) -> &str {
        "txt"
    }

    /// Render the catalog
    fn emit(&self, catalog: &Catalog) -> Result<String, EmitError>;
}
