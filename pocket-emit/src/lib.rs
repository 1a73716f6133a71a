//! Output formats for parsed course catalogs
//!
//!     This crate turns a [Catalog](pocket_parser::pocket::Catalog) into text. It powers the
//!     pocket-seed binary but is shell agnostic: nothing here writes files, prints or reads
//!     the environment.
//!
//! Architecture
//!
//!     - Emitter trait: uniform interface for every output format
//!     - EmitterRegistry: lookup of emitters by name
//!     - formats: the SQL seed script and the JSON export
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── emitter.rs              # Emitter trait definition
//!     ├── registry.rs             # EmitterRegistry for discovery and selection
//!     ├── formats
//!     │   ├── sql                 # Seed script for the lessons / quizzes tables
//!     │   └── json                # { lessons, quizzes } document
//!     └── lib.rs
//!
//!     Emitters are deterministic: the same catalog always produces the same bytes.

pub mod emitter;
pub mod error;
pub mod formats;
pub mod registry;

pub use emitter::Emitter;
pub use error::EmitError;
pub use formats::{JsonEmitter, SqlEmitter, SqlOptions};
pub use registry::EmitterRegistry;
