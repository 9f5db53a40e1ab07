//! Utility functions for domain name processing.
//!
//! - [`domain_name`] - Business name normalization, variation expansion and
//!   domain splitting
pub mod domain_name;
