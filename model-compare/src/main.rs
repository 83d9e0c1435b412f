// ABOUTME: model-compare CLI - sends one prompt to a local LM Studio server
// ABOUTME: under base, instruct and fine-tuned framings and compares the answers.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use reckon::compare::{
    Comparator, render_model_info, render_recommendations, render_report, save_report,
    timestamped_report_filename,
};
use reckon::config::{ComparatorConfig, LOCAL_MODEL};
use reckon::llm::LM_STUDIO_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "model-compare",
    version,
    about = "Compare base, instruct and fine-tuned prompt framings on a local model"
)]
struct Cli {
    /// The prompt to test with different model types
    #[arg(required_unless_present = "info")]
    prompt: Option<String>,

    /// LM Studio server URL
    #[arg(long, env = "RECKON_LM_URL", default_value = LM_STUDIO_BASE_URL)]
    url: String,

    /// Model name sent with each request
    #[arg(long, default_value = LOCAL_MODEL)]
    model: String,

    /// Save results as JSON; `--save=FILE` picks the name, otherwise
    /// comparison_results_<timestamp>.json
    #[arg(long, value_name = "FILE", num_args = 0..=1, require_equals = true)]
    save: Option<Option<PathBuf>>,

    /// Show information about model types and exit
    #[arg(long)]
    info: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("reckon={level},model_compare={level}")))
        .unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level '{}', defaulting to warn. Valid levels: trace, debug, info, warn, error",
                level
            );
            EnvFilter::new("warn")
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    debug!(?cli, "model-compare starting");

    if cli.info {
        println!("{}", render_model_info());
        return Ok(());
    }

    let Some(prompt) = cli.prompt.as_deref() else {
        anyhow::bail!("a prompt is required unless --info is given");
    };

    let config = ComparatorConfig::default()
        .with_base_url(cli.url.clone())
        .with_model(cli.model.clone());
    let comparator = Comparator::new(&config)?;

    println!("🚀 Starting Model Comparison...");
    println!("📡 Using LM Studio at: {}", config.base_url);
    println!("💭 Testing prompt: {}", prompt);

    let report = comparator
        .run_with_progress(prompt, |variant| {
            println!("🔄 Querying {} model simulation...", variant.label());
        })
        .await;

    print!("{}", render_report(&report));

    if let Some(save) = cli.save {
        let path = save.unwrap_or_else(|| PathBuf::from(timestamped_report_filename()));
        match save_report(&report, &path) {
            Ok(()) => println!("\n💾 Results saved to: {}", path.display()),
            Err(err) => eprintln!("\n❌ Failed to save results to {}: {}", path.display(), err),
        }
    }

    print!("{}", render_recommendations(&report));
    Ok(())
}
