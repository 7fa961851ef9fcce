//! Candidate model lists and their producers.

use async_trait::async_trait;

/// Identifier for one remote text-generation backend model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidate {
    name: String,
}

impl ModelCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered preference sequence of candidates, most-preferred first.
///
/// May be empty, signaling that no backend is available; in that case
/// [`status`](Self::status) carries a human-readable reason when the
/// producer knows one.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    entries: Vec<ModelCandidate>,
    status: Option<String>,
}

impl CandidateList {
    /// Build a list from names, deduplicating while keeping the first
    /// occurrence so the preference order stays intact.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<ModelCandidate> = Vec::new();
        for name in names {
            let name = name.into();
            if !entries.iter().any(|c| c.name() == name) {
                entries.push(ModelCandidate::new(name));
            }
        }
        Self {
            entries,
            status: None,
        }
    }

    /// An empty list with a reason the producer could not supply candidates.
    pub fn unavailable(status: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            status: Some(status.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelCandidate> {
        self.entries.iter()
    }

    /// Why the list is empty, if the producer recorded a reason.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Produces the candidate list a gateway call walks.
///
/// Two strategies exist: a hardcoded fallback chain ([`StaticChain`]) and
/// runtime catalog discovery ([`crate::discovery::ModelCatalog`]). The
/// gateway works unchanged with either.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn candidates(&self) -> CandidateList;
}

/// Hardcoded fallback chain, newest fast variants ahead of legacy aliases.
pub const DEFAULT_MODEL_CHAIN: [&str; 7] = [
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-flash-001",
    "gemini-1.5-flash-002",
    "gemini-1.5-pro",
    "gemini-1.0-pro",
    "gemini-pro",
];

/// Fixed candidate list configured up front.
pub struct StaticChain {
    list: CandidateList,
}

impl StaticChain {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list: CandidateList::from_names(names),
        }
    }
}

impl Default for StaticChain {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_CHAIN)
    }
}

#[async_trait]
impl CandidateSource for StaticChain {
    async fn candidates(&self) -> CandidateList {
        self.list.clone()
    }
}
