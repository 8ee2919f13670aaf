//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: process-local store used when no database is configured.
//!
//! Adapters are thin translators between domain types and the storage
//! representation. They contain no business logic.

pub mod memory;
pub mod persistence;
