//! Generation provider implementations
//!
//! Text generation backends implementing the domain `GenerationProvider`
//! port. All of them honor the fail-soft contract: `generate` never
//! errors, it logs and falls back to the fixed apology string.

#[cfg(feature = "generation-groq")]
pub mod groq;
pub mod null;

#[cfg(feature = "generation-groq")]
pub use groq::GroqGenerationProvider;
pub use null::NullGenerationProvider;
