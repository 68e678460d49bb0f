//! Infrastructure layer for the anime recommender
//!
//! Cross-cutting technical concerns: configuration loading and
//! validation, structured logging, error context helpers, and the
//! provider bootstrap that wires configured adapters into the
//! application services.

// Force-link anr-providers so linkme registry entries are included
extern crate anr_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
