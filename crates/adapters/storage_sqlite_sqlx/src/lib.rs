//! # registry-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in
//!   `registry-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `registry-app` (for the port trait) and `registry-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod pool;
pub mod student_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use student_repo::SqliteStudentRepository;
