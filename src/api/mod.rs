//! HTTP API layer.
//!
//! Translates JSON requests into service calls and shapes the responses.
//! Every route here except the public ones in [`crate::routes`] sits behind
//! the client token check.
//!
//! # Modules
//!
//! - [`dto`] - camelCase request/response bodies with validation rules
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Client token authentication and request tracing
//! - [`routes`] - Protected route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
