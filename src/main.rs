//! CyberPrep CLI binary entry point.

use clap::Parser;

use cyberprep::backend::GeminiBackend;
use cyberprep::candidates::{CandidateSource, StaticChain};
use cyberprep::config::Credential;
use cyberprep::discovery::ModelCatalog;
use cyberprep::gateway;
use cyberprep::present::split_reveal;
use cyberprep::prompt::{Difficulty, Domain, ScenarioRequest};

#[derive(Parser)]
#[command(
    name = "cyberprep",
    about = "GRC & security architecture scenario simulator"
)]
struct Cli {
    /// Target CISSP domain.
    #[arg(long, value_enum)]
    domain: Domain,

    /// Simulation difficulty.
    #[arg(long, value_enum, default_value = "professional")]
    difficulty: Difficulty,

    /// Discover the model from the live catalog instead of the static chain.
    #[arg(long)]
    discover: bool,

    /// Override the fallback chain (repeatable, most preferred first).
    #[arg(long = "model", conflicts_with = "discover")]
    models: Vec<String>,

    /// Print the official answer instead of withholding it.
    #[arg(long)]
    reveal: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let credential = match Credential::resolve() {
        Ok(credential) => credential,
        Err(e) => {
            eprintln!("SYSTEM ALERT: {e}");
            std::process::exit(1);
        }
    };

    let request = ScenarioRequest {
        domain: cli.domain,
        difficulty: cli.difficulty,
    };

    let source: Box<dyn CandidateSource> = if cli.discover {
        Box::new(ModelCatalog::new(credential.clone()))
    } else if cli.models.is_empty() {
        Box::new(StaticChain::default())
    } else {
        Box::new(StaticChain::new(cli.models))
    };

    let backend = GeminiBackend::new(credential);
    let candidates = source.candidates().await;

    // The one "current result" slot lives here, not in the library.
    let generation = match gateway::generate(&backend, &request.prompt(), &candidates).await {
        Ok(generation) => generation,
        Err(e) => {
            eprintln!("CRITICAL FAILURE: All model uplinks failed.");
            eprintln!("Last error: {e}");
            std::process::exit(1);
        }
    };

    let view = split_reveal(&generation.text);

    println!("// CONNECTED VIA: {}", generation.model);
    println!();
    println!("{}", view.visible.trim_end());
    println!();
    if cli.reveal {
        println!("=== OFFICIAL ANSWER ===");
        println!("{}", view.withheld.trim());
    } else {
        println!("(rerun with --reveal to see the official answer)");
    }
}
