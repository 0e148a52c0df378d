//! # Scribe Core
//!
//! The domain layer of the Scribe API.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, input validation, the ownership guard, the ports infrastructure
//! implements, and the services that orchestrate them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
