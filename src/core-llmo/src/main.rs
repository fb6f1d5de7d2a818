use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use core_llmo::{
    ApiKey, ChatGpt, GenerationRequest, export, generate_site_docs,
    llms::chatgpt::{DEFAULT_MODEL, DEFAULT_TEMPERATURE},
    setup_logging,
};

#[derive(Parser)]
#[command(name = "llmo")]
#[command(about = "Generate llms.txt and llms-full.txt from website metadata", long_about = None)]
struct LlmoCli {
    /// Website name or title
    #[arg(long)]
    site_name: String,

    /// One-paragraph overview of the website
    #[arg(long)]
    overview: String,

    /// Key topics/pages, one per line or as bullet points
    #[arg(long)]
    key_pages: String,

    /// Additional notes or links
    #[arg(long, default_value = "")]
    notes: String,

    /// Directory the two generated files are written into
    #[arg(short, long, default_value = ".", value_parser = validate_output_dir)]
    output: PathBuf,

    /// Chat model used for generation
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
}

fn validate_output_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Output directory does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Output path is not a directory: {}", path.display()));
    }

    Ok(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("core_llmo=info");

    let cli = LlmoCli::parse();

    let credential = ApiKey::new(std::env::var("OPENAI_API_KEY").unwrap_or_default())
        .context("OPENAI_API_KEY must be set to a non-empty value")?;

    let request = GenerationRequest {
        site_name: cli.site_name,
        overview: cli.overview,
        key_pages: cli.key_pages,
        notes: cli.notes,
    };

    let provider = ChatGpt::new(cli.model, cli.temperature);
    let result = generate_site_docs(&provider, &credential, &request)
        .await
        .context("generation failed")?;

    let (short_path, full_path) = export::write_artifacts(&result, &cli.output)?;
    println!("Wrote {} and {}", short_path.display(), full_path.display());

    Ok(())
}
