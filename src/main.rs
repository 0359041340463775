//! CLI front end for the summarization pipeline.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docusum::{Config, Document, Error, Pipeline, ProviderKind, SummaryRequestOptions, TargetLength};

#[derive(Parser)]
#[command(
    name = "docusum",
    about = "Summarize a PDF or DOCX document into a role-based report"
)]
struct Cli {
    /// Document to summarize (.pdf or .docx)
    file: PathBuf,

    /// LLM provider: openai or gemini
    #[arg(long, default_value = "openai")]
    provider: ProviderKind,

    /// Summary length: short, medium, long or detailed
    #[arg(long, default_value = "detailed")]
    length: TargetLength,

    /// API key; falls back to OPENAI_API_KEY / GEMINI_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Write the summary, role-summaries and checklist artifacts into this
    /// directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the report as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Load .env from the working directory, falling back to the parent.
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,docusum=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> docusum::Result<()> {
    let config = Config::from_env();
    let document = Document::from_path(&cli.file, config.max_document_bytes)?;

    let api_key = cli
        .api_key
        .or_else(|| std::env::var(cli.provider.key_env_var()).ok())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            Error::Authentication(format!(
                "no API key: set {} or pass --api-key",
                cli.provider.key_env_var()
            ))
        })?;

    let options = SummaryRequestOptions {
        length: cli.length,
        provider: cli.provider,
    };

    let pipeline = Pipeline::new(config);
    let report = pipeline.run(&document, &api_key, options).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.display_markdown());
    }

    if let Some(dir) = cli.out_dir {
        for path in report.export_artifacts(document.name(), &dir)? {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}
