//! CyberPrep — CISSP scenario generation gateway.
//!
//! Turns a (domain, difficulty) selection into an exam-style practice
//! scenario by prompting a remote Gemini-style text-generation service,
//! hiding backend instability behind an ordered model fallback chain or
//! runtime catalog discovery.
//!
//! # Quick Start
//!
//! ```no_run
//! use cyberprep::backend::GeminiBackend;
//! use cyberprep::candidates::{CandidateSource, StaticChain};
//! use cyberprep::config::Credential;
//! use cyberprep::prompt::{Difficulty, Domain, ScenarioRequest};
//!
//! # async fn example() -> cyberprep::error::Result<()> {
//! let credential = Credential::resolve()?;
//! let backend = GeminiBackend::new(credential);
//! let chain = StaticChain::default();
//!
//! let request = ScenarioRequest {
//!     domain: Domain::SecurityOperations,
//!     difficulty: Difficulty::Professional,
//! };
//! let candidates = chain.candidates().await;
//! let generation = cyberprep::gateway::generate(&backend, &request.prompt(), &candidates).await?;
//! println!("{} (via {})", generation.text, generation.model);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod candidates;
pub mod config;
pub mod discovery;
pub mod error;
pub mod gateway;
pub mod present;
pub mod prompt;
