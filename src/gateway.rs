//! The generation gateway: fallback iteration over candidate models.

use tracing::{debug, warn};

use crate::backend::{Generation, GenerationBackend};
use crate::candidates::CandidateList;
use crate::error::GatewayError;

/// Walk `candidates` most-preferred first until one produces text.
///
/// Retryable failures are absorbed per candidate with no backoff; when the
/// chain is exhausted the last recorded failure surfaces, since later
/// failures tend to be the more specific ones. Fatal failures abort
/// immediately: no other candidate can do better against a bad credential
/// or a malformed request.
pub async fn generate(
    backend: &dyn GenerationBackend,
    prompt: &str,
    candidates: &CandidateList,
) -> Result<Generation, GatewayError> {
    if prompt.is_empty() {
        return Err(GatewayError::InvalidArgument(
            "prompt must be non-empty".into(),
        ));
    }

    if candidates.is_empty() {
        let reason = candidates
            .status()
            .unwrap_or("no candidate models configured");
        return Err(GatewayError::NoBackendAvailable(reason.to_string()));
    }

    let mut last_error: Option<GatewayError> = None;

    for candidate in candidates.iter() {
        debug!(model = candidate.name(), "trying candidate");

        match backend.generate(candidate.name(), prompt).await {
            Ok(text) => {
                debug!(model = candidate.name(), "candidate succeeded");
                return Ok(Generation {
                    text,
                    model: candidate.name().to_string(),
                });
            }
            Err(e) if e.is_retryable() => {
                warn!(model = candidate.name(), error = %e, "candidate failed, trying next");
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    // Unreachable fallback: a non-empty list always records an error first.
    Err(last_error
        .unwrap_or_else(|| GatewayError::NoBackendAvailable("candidate chain exhausted".into())))
}
