//! # rulestab-core
//!
//! Foundation crate for the rulestab pattern stability engine.
//! Errors, layered configuration, tracing setup, progress events and shared
//! collection/type definitions.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::StabilityConfig;
pub use errors::{StabilityError, StabilityErrorCode};
