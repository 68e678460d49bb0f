//! Generation provider port

use async_trait::async_trait;

use crate::error::Result;

/// Text Generation Interface
///
/// Business contract for the hosted LLM that turns an assembled prompt
/// into recommendation text.
///
/// # Fail-soft contract
///
/// `generate` never fails: any downstream failure (network, quota,
/// malformed response) is logged by the implementation and the fixed
/// apology string from `crate::constants::GENERATION_APOLOGY` is returned
/// instead. Retrieval succeeding but generation failing still yields a
/// response, albeit a degraded one.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate completion text for a prompt
    async fn generate(&self, prompt: &str) -> String;

    /// Model identifier used by this provider
    fn model_name(&self) -> &str;

    /// Name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    ///
    /// The fail-soft contract hides failures from `generate`, so the
    /// default health check only verifies a non-apology response.
    async fn health_check(&self) -> Result<()> {
        let response = self.generate("ping").await;
        if response == crate::constants::GENERATION_APOLOGY {
            return Err(crate::error::Error::generation(
                "Provider returned the fallback apology for the health probe",
            ));
        }
        Ok(())
    }
}
