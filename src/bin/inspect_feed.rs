use anyhow::Context;
use clap::Parser;
use pin_curator::core::PinSource;
use pin_curator::utils::{logger, validation::Validate};
use pin_curator::{
    rank_by_saves, CuratorConfig, HttpImageInspector, ImageCheck, PinterestClient,
    RelevanceReport, Selector,
};

#[derive(Parser)]
#[command(name = "inspect-feed")]
#[command(about = "Show how each pin in the feed scores against the selection criteria")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => CuratorConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => CuratorConfig::from_env(),
    };
    config.validate().context("invalid configuration")?;

    let client = PinterestClient::new(config.api.clone())?;
    let inspector = HttpImageInspector::new(config.api.timeout_seconds)?;
    let selector = Selector::new(config.criteria, inspector);

    let pins = client.fetch_pins().await.context("failed to fetch pins")?;
    println!("🔍 {} pins fetched from {}", pins.len(), config.api.endpoint("pins"));
    let criteria = selector.criteria();
    println!(
        "   keywords: {}  domains: {}  min saves: {}  min aspect: {}",
        criteria.keywords.join(", "),
        criteria.trusted_domains.join(", "),
        criteria.min_saves,
        criteria.min_aspect_ratio
    );
    println!();

    let mut relevant = Vec::new();
    for pin in pins {
        let report = selector.evaluate_fully(&pin).await;
        println!("{:>8} saves  {}", pin.saves, pin.title());
        println!("          {}", describe(&report));
        if report.is_relevant() {
            relevant.push(pin);
        }
    }

    println!();
    match rank_by_saves(relevant).first() {
        Some(top) => println!("🎯 Would publish: {} ({} saves)", top.title(), top.saves),
        None => println!("∅ No relevant pins"),
    }

    Ok(())
}

fn describe(report: &RelevanceReport) -> String {
    let mark = |ok: bool| if ok { "✅" } else { "❌" };
    let image = match &report.vertical_image {
        Some(ImageCheck::Pass) => "✅".to_string(),
        Some(ImageCheck::Fail) => "❌".to_string(),
        Some(ImageCheck::Indeterminate(reason)) => format!("⚠️ ({})", reason),
        None => "-".to_string(),
    };

    format!(
        "keyword {}  source {}  saves {}  vertical {}  => {}",
        mark(report.keyword_match),
        mark(report.credible_source),
        mark(report.high_engagement),
        image,
        if report.is_relevant() { "RELEVANT" } else { "skip" }
    )
}
