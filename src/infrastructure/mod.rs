//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`registrar`] - JSON-RPC registrar client

pub mod persistence;
pub mod registrar;
