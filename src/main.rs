use clap::Parser;
use pin_curator::utils::{logger, validation::Validate};
use pin_curator::{
    CliArgs, CurationEngine, HttpImageInspector, PinterestClient, Result, RunOutcome, Selector,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    match run(&args).await {
        Ok(outcome) => {
            tracing::debug!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("An error occurred: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs) -> Result<RunOutcome> {
    let config = args.load_config()?;
    config.validate()?;

    if let Some(path) = &args.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    tracing::debug!("Selection criteria: {:?}", config.criteria);

    let inspector = HttpImageInspector::new(config.api.timeout_seconds)?;
    let client = PinterestClient::new(config.api)?;
    let selector = Selector::new(config.criteria, inspector);

    // One client serves as both feed source and board publisher.
    let mut engine = CurationEngine::new(client.clone(), selector, client)
        .with_dry_run(args.dry_run)
        .with_monitoring(args.monitor);

    let outcome = engine.run().await?;
    if let RunOutcome::Published { title, pin_id } = &outcome {
        println!("✅ Pinned '{}' ({})", title, pin_id.as_deref().unwrap_or("no id returned"));
    }
    Ok(outcome)
}
