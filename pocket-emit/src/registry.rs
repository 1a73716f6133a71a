//! Emitter registry for format discovery and selection
//!
//! This module provides a centralized registry for all available emitters.
//! Emitters can be registered and retrieved by name.

use crate::emitter::Emitter;
use crate::error::EmitError;
use pocket_parser::pocket::Catalog;
use std::collections::HashMap;

/// Registry of catalog emitters
///
/// # Examples
///
/// ```ignore
/// let registry = EmitterRegistry::with_defaults();
/// let sql = registry.emit(&catalog, "sql")?;
/// ```
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EmitterRegistry {
            emitters: HashMap::new(),
        }
    }

    /// Register an emitter
    ///
    /// If an emitter with the same name already exists, it will be replaced.
    pub fn register<E: Emitter + 'static>(&mut self, emitter: E) {
        self.emitters
            .insert(emitter.name().to_string(), Box::new(emitter));
    }

    /// Get an emitter by name
    pub fn get(&self, name: &str) -> Result<&dyn Emitter, EmitError> {
        self.emitters
            .get(name)
            .map(|e| e.as_ref())
            .ok_or_else(|| EmitError::EmitterNotFound(name.to_string()))
    }

    /// Check if an emitter exists
    pub fn has(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// List all available emitter names (sorted)
    pub fn list_emitters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.emitters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render a catalog with the named emitter
    pub fn emit(&self, catalog: &Catalog, name: &str) -> Result<String, EmitError> {
        self.get(name)?.emit(catalog)
    }

    /// Create a registry with the SQL and JSON emitters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::SqlEmitter::default());
        registry.register(crate::formats::JsonEmitter::default());

        registry
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
