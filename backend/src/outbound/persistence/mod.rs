//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`.
//!
//! ```ignore
//! use trailers::outbound::persistence::{DbPool, DieselTrailerRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/trailers_db")).await?;
//! let repo = DieselTrailerRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_trailer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_trailer_repository::DieselTrailerRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
