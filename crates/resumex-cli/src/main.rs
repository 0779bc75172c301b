use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resumex_ingest::RawDocument;
use resumex_llm::OpenAiBackend;

mod output;

use output::ColorMode;

/// Structured resume extraction - derive candidate fields from PDF, DOCX, or plain text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract resume fields with the deterministic heuristic pipeline
    Parse {
        /// Path to the resume file (PDF, DOCX, or plain text)
        file_path: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Path to output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract resume fields via an external LLM, with local schema
    /// validation and experience recomputation
    Model {
        /// Path to the resume file (PDF, DOCX, or plain text)
        file_path: PathBuf,

        /// API key for the model endpoint
        #[arg(long)]
        api_key: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Base URL of an OpenAI-compatible endpoint
        #[arg(long)]
        base_url: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Path to output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            file_path,
            no_color,
            json,
            output,
        } => parse(file_path, no_color, json, output),
        Command::Model {
            file_path,
            api_key,
            model,
            base_url,
            no_color,
            json,
            output,
        } => self::model(file_path, api_key, model, base_url, no_color, json, output),
    }
}

fn parse(
    file_path: PathBuf,
    no_color: bool,
    json: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let document = RawDocument::from_path(&file_path)?;
    let resume = resumex_ingest::parse_resume(&document)?;
    write_result(&resume, no_color, json, output)
}

fn model(
    file_path: PathBuf,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    no_color: bool,
    json: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Resolve configuration: CLI flags > env vars > defaults
    let api_key = api_key
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .ok_or_else(|| anyhow::anyhow!("no API key: pass --api-key or set OPENAI_API_KEY"))?;
    let base_url = base_url.or_else(|| std::env::var("OPENAI_BASE_URL").ok());
    let model = model.or_else(|| std::env::var("OPENAI_MODEL").ok());

    let mut backend = OpenAiBackend::new(api_key)?;
    if let Some(model) = model {
        backend = backend.with_model(model);
    }
    if let Some(base_url) = base_url {
        backend = backend.with_base_url(base_url);
    }

    let text = read_text(&file_path)?;
    let resume = resumex_llm::extract_via_model(&text, &backend)?;
    write_result(&resume, no_color, json, output)
}

fn read_text(file_path: &PathBuf) -> anyhow::Result<String> {
    let document = RawDocument::from_path(file_path)?;
    Ok(resumex_ingest::extract_text(&document)?)
}

fn write_result(
    resume: &resumex_core::ExtractedResume,
    no_color: bool,
    json: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    if json {
        serde_json::to_writer_pretty(&mut writer, resume)?;
        writeln!(writer)?;
    } else {
        output::print_resume(&mut writer, resume, color)?;
    }
    Ok(())
}
