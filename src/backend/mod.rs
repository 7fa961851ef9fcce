//! Generation backends.

pub mod gemini;
pub mod http;

pub use gemini::GeminiBackend;

use async_trait::async_trait;

use crate::error::GatewayError;

/// One completed generation: the text and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model: String,
}

/// A remote text-generation service, addressed per call by model identifier.
///
/// The credential lives in the backend value, constructed once at startup.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Issue one generation call against `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError>;
}
