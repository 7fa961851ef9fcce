//! Runtime model discovery against the backend catalog.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::backend::http::shared_client;
use crate::candidates::{CandidateList, CandidateSource};
use crate::config::Credential;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Capability a catalog entry must advertise to count as a text generator.
const GENERATE_CAPABILITY: &str = "generateContent";

/// Name markers, most preferred first: high-quota fast variants ahead of
/// the pro tier.
const PREFERRED_MARKERS: [&str; 2] = ["flash", "pro"];

/// Version markers that disqualify a model from the secondary pick.
const UNSTABLE_MARKERS: [&str; 2] = ["exp", "preview"];

/// Candidate source backed by the live model catalog.
///
/// The catalog is queried at most once per process lifetime; a failed query
/// is cached too, as an empty list with a status. Operators restart the
/// process to re-discover.
pub struct ModelCatalog {
    credential: Credential,
    base_url: String,
    cache: OnceCell<CandidateList>,
}

impl ModelCatalog {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: BASE_URL.to_string(),
            cache: OnceCell::new(),
        }
    }

    /// Point at a different catalog endpoint (tests, proxies).
    pub fn with_base_url(credential: Credential, base_url: impl Into<String>) -> Self {
        Self {
            credential,
            base_url: base_url.into(),
            cache: OnceCell::new(),
        }
    }

    /// The discovered candidate list, querying the catalog on first use.
    pub async fn discover(&self) -> &CandidateList {
        self.cache.get_or_init(|| self.query()).await
    }

    /// One catalog query. Failures are valid "no backends" results, never
    /// errors: the gateway reports them as unavailability.
    async fn query(&self) -> CandidateList {
        let url = format!("{}/models?key={}", self.base_url, self.credential.expose());

        let resp = match shared_client().get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "catalog query failed");
                return CandidateList::unavailable(format!("catalog unreachable: {e}"));
            }
        };

        let status = resp.status().as_u16();
        if status != 200 {
            warn!(status, "catalog returned non-success status");
            return CandidateList::unavailable(format!("catalog returned status {status}"));
        }

        let catalog: Catalog = match resp.json().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "catalog response unreadable");
                return CandidateList::unavailable(format!("catalog response unreadable: {e}"));
            }
        };

        let generators: Vec<String> = catalog
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|cap| cap == GENERATE_CAPABILITY)
            })
            .map(|m| {
                // Catalog names come as "models/gemini-...".
                if let Some(short) = m.name.strip_prefix("models/") {
                    short.to_string()
                } else {
                    m.name
                }
            })
            .collect();

        match pick_preferred(&generators, &PREFERRED_MARKERS, &UNSTABLE_MARKERS) {
            Some(name) => {
                debug!(model = name, "discovered generation model");
                CandidateList::from_names([name])
            }
            None => CandidateList::unavailable("no text-generation model in catalog"),
        }
    }
}

#[async_trait]
impl CandidateSource for ModelCatalog {
    async fn candidates(&self) -> CandidateList {
        self.discover().await.clone()
    }
}

/// Ranking policy: for each preference marker in order, the first catalog
/// entry containing it wins. With no marker hit, fall back to the first
/// entry free of unstable version markers.
pub fn pick_preferred<'a>(
    catalog: &'a [String],
    preferred: &[&str],
    excluded: &[&str],
) -> Option<&'a str> {
    for marker in preferred {
        if let Some(hit) = catalog.iter().find(|name| name.contains(marker)) {
            return Some(hit);
        }
    }
    catalog
        .iter()
        .find(|name| !excluded.iter().any(|marker| name.contains(marker)))
        .map(String::as_str)
}

#[derive(Deserialize)]
struct Catalog {
    #[serde(default)]
    models: Vec<CatalogModel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogModel {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}
