//! Gemini generation backend (v1beta `generateContent`).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Credential;
use crate::error::GatewayError;

use super::http::{shared_client, status_to_error};
use super::GenerationBackend;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiBackend {
    credential: Credential,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point at a different endpoint (tests, proxies).
    pub fn with_base_url(credential: Credential, base_url: impl Into<String>) -> Self {
        Self {
            credential,
            base_url: base_url.into(),
        }
    }

    fn build_request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}]
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            model,
            self.credential.expose()
        );

        debug!(model, "Gemini generateContent");

        let resp = shared_client()
            .post(&url)
            .json(&Self::build_request_body(prompt))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let body_text = resp.text().await?;
        let data: GenerateResponse = serde_json::from_str(&body_text).map_err(|e| {
            GatewayError::MalformedResponse(format!("unparseable generateContent body: {e}"))
        })?;

        let candidate = data.candidates.into_iter().next().ok_or_else(|| {
            GatewayError::MalformedResponse("no candidates in generateContent response".into())
        })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(GatewayError::MalformedResponse(
                "candidate carried no text parts".into(),
            ));
        }

        Ok(text)
    }
}

// Internal wire types

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
struct WireCandidate {
    content: WireContent,
}

#[derive(Deserialize)]
struct WireContent {
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Deserialize)]
struct WirePart {
    text: Option<String>,
}
