//! HTTP middleware for request processing and protection.
//!
//! Provides client token authentication and observability middleware.

pub mod auth;
pub mod tracing;
