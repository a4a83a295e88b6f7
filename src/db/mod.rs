//! Database module: models, schema and the SQLite-backed student store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: versioned SQL migrations applied at startup
//! - `sqlite.rs`: pool setup and CRUD operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewStudent, Student};
pub use sqlite::{SqlitePool, StudentStorage, connect};
