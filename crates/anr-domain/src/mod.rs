//! Domain layer for the anime recommendation service
//!
//! Core business types and contracts: catalog value objects, the closed
//! error taxonomy, and the provider ports implemented by the adapter layer.
//! This crate depends on nothing but serde and thiserror.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
