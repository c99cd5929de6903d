//! SymptomBuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use symptombuddy::{
    bootstrap::Bootstrap,
    cli::{Args, Commands},
    config::Config,
    server::{self, AppState},
    telemetry,
};

/// Train at startup, then serve; a failed startup still serves in degraded mode
async fn run_server(config: Config) -> Result<()> {
    let address = config.bind_address();
    let bootstrap = Bootstrap::new(config);

    let (status, service) = tokio::task::spawn_blocking(move || bootstrap.initialize())
        .await
        .context("Startup task panicked")?;
    info!(?status, "Bootstrap finished");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    server::serve(listener, AppState::from_service(service))
        .await
        .context("Server error")?;

    info!("symptombuddy stopped");
    Ok(())
}

/// Train once and print the evaluation summary
async fn run_evaluate(config: Config) -> Result<()> {
    let bootstrap = Bootstrap::new(config);
    let prepared = tokio::task::spawn_blocking(move || bootstrap.prepare())
        .await
        .context("Training task panicked")??;

    let s = &prepared.summary;
    println!("Rows (deduplicated):  {}", s.rows);
    println!("Symptom features:     {}", s.features);
    println!("Diseases:             {}", s.classes);
    println!("Prevention entries:   {}", s.prevention_entries);
    println!("Train / test rows:    {} / {}", s.train_rows, s.test_rows);
    println!("Held-out accuracy:    {:.2}", s.accuracy);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init_logging(args.verbosity());

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_args(&args);
    config.validate()?;

    match args.command() {
        Commands::Serve => run_server(config).await,
        Commands::Evaluate => run_evaluate(config).await,
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
