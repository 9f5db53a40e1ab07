//! Registrar client implementations.
//!
//! - [`InwxRegistrar`] - JSON-RPC client for the INWX domain robot
//! - [`InwxRegistrarProvider`] - Creates one client per logical flow

pub mod inwx;

pub use inwx::{InwxRegistrar, InwxRegistrarProvider, RegistrarSettings};
