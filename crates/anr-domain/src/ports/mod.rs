//! Domain ports
//!
//! Trait contracts implemented by the provider layer.

pub mod providers;
