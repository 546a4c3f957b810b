//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed trailer repository using Diesel ORM
//! - **memory**: volatile trailer repository for database-less runs
//! - **yards**: static yard directory
//!
//! Adapters translate between domain types and infrastructure
//! representations and hold no business rules.

pub mod memory;
pub mod persistence;
pub mod yards;
