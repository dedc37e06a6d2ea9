//! # homegate-adapter-storage-sqlite-sqlx
//!
//! `SQLite` ownership-store adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `UserRepository` and `TokenAuthenticator` port traits
//!   defined in `homegate-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Materialize users together with their owned devices, in store order
//!
//! ## Dependency rule
//! Depends on `homegate-app` (for port traits) and `homegate-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod pool;
pub mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
