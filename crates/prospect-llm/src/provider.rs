//! Text generator trait definition

use crate::{GenerationRequest, Result};
use async_trait::async_trait;

/// Trait for text generation providers
///
/// Implementations provide access to different model services (hosted
/// OpenAI, local OpenAI-compatible servers). Consumers treat the output as
/// opaque text; no structure is guaranteed.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
