//! Domain layer containing business entities and ports.
//!
//! This module defines the data model of the domain wizard and the contracts
//! implemented by the infrastructure layer. It has no dependency on HTTP,
//! SQL or the registrar wire format.
//!
//! # Architecture
//!
//! - [`entities`] - Tenant services, customers, TLD offerings, suggestions, registrations
//! - [`repositories`] - Data store trait definitions
//! - [`registrar`] - Registrar port and the scoped [`registrar::RegistrarSession`]
//!
//! # Request Flow
//!
//! 1. HTTP handler validates the request shape
//! 2. An application service (see [`crate::application::services`]) calls repositories
//!    and/or opens a registrar session
//! 3. Results are converted into response DTOs

pub mod entities;
pub mod registrar;
pub mod repositories;
