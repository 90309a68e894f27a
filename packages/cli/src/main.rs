//! Interactive email-extraction CLI.
//!
//! Reads a CSV file, previews it, extracts email addresses with the regex
//! pass plus an optional OpenAI-assisted pass, prints the results as a
//! table with summary metrics, and writes them back out as CSV.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Password};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailsift::{
    export_csv, extract, load_document, summarize, ApiCredential, Document, ExtractionResult,
    OpenAiAssistant, Provenance, SummaryStatistics, AI,
};

/// How many rows of the input to show before extracting.
const PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(name = "mailsift")]
#[command(about = "Extract email addresses from a CSV file")]
#[command(version)]
struct Cli {
    /// CSV file to scan
    file: PathBuf,

    /// Where to write the extracted addresses
    #[arg(short, long, default_value = "extracted_emails.csv")]
    output: PathBuf,

    /// OpenAI API key (falls back to the OPENAI_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Chat model for the assisted pass
    #[arg(long, default_value = "gpt-3.5-turbo")]
    model: String,

    /// Skip the model-assisted pass and rely on pattern matching only
    #[arg(long)]
    pattern_only: bool,

    /// Answer yes to every prompt (non-interactive)
    #[arg(short, long)]
    yes: bool,

    /// Suppress the input preview
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("could not read {}", cli.file.display()))?;
    let document = load_document(&bytes)
        .with_context(|| format!("could not parse {} as CSV", cli.file.display()))?;
    tracing::debug!(rows = document.row_count(), "document loaded");

    println!(
        "{} loaded {} ({} rows)",
        style("ok:").green().bold(),
        cli.file.display(),
        document.row_count()
    );

    if !cli.quiet {
        print_preview(&document);
    }

    let api_key = resolve_api_key(&cli)?;
    if api_key.is_none() && !cli.pattern_only {
        println!(
            "{} no API key provided, using pattern matching only",
            style("note:").yellow().bold()
        );
    }

    if !cli.yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Extract email addresses?")
            .default(true)
            .interact()?;
        if !proceed {
            println!("Nothing extracted.");
            return Ok(());
        }
    }

    let assistant = api_key.map(|key| {
        OpenAiAssistant::new(ApiCredential::new(key)).with_model(&cli.model)
    });
    println!("Extracting...");
    let result = extract(&document, assistant.as_ref().map(|a| a as &dyn AI)).await;
    tracing::debug!(
        found = result.len(),
        warnings = result.warnings().len(),
        "extraction complete"
    );

    for warning in result.warnings() {
        println!(
            "{} model call failed ({}), falling back to pattern results",
            style("warning:").yellow().bold(),
            warning
        );
    }

    if result.is_empty() {
        println!(
            "{} no email addresses found in the file",
            style("note:").yellow().bold()
        );
        return Ok(());
    }

    let stats = summarize(&result);
    print_results(&result);
    print_metrics(&stats, &document);

    if !cli.yes {
        let save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Write {} address(es) to {}?",
                result.len(),
                cli.output.display()
            ))
            .default(true)
            .interact()?;
        if !save {
            return Ok(());
        }
    }

    std::fs::write(&cli.output, export_csv(&result))
        .with_context(|| format!("could not write {}", cli.output.display()))?;
    println!(
        "{} wrote {} address(es) to {}",
        style("ok:").green().bold(),
        result.len(),
        cli.output.display()
    );

    Ok(())
}

/// Resolve the API key: flag, then environment, then an interactive prompt.
///
/// An empty answer means pattern-only extraction; it is never an error.
fn resolve_api_key(cli: &Cli) -> Result<Option<String>> {
    if cli.pattern_only {
        return Ok(None);
    }
    if let Some(key) = cli.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(Some(key.to_string()));
        }
    }
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Ok(Some(key));
        }
    }
    if cli.yes {
        return Ok(None);
    }

    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("OpenAI API key (leave empty to skip the assisted pass)")
        .allow_empty_password(true)
        .interact()?;
    Ok(if key.is_empty() { None } else { Some(key) })
}

fn print_preview(document: &Document) {
    println!();
    println!("{}", style("Preview").bold());
    for row in document.preview(PREVIEW_ROWS) {
        println!("  {}", style(clip(&row.join(" | "), 76)).dim());
    }
    if document.row_count() > PREVIEW_ROWS {
        println!(
            "  {}",
            style(format!("... {} more rows", document.row_count() - PREVIEW_ROWS)).dim()
        );
    }
    println!();
}

fn print_results(result: &ExtractionResult) {
    let email_width = result
        .addresses()
        .map(|a| a.as_str().len())
        .chain(std::iter::once("EMAIL".len()))
        .max()
        .unwrap_or(5);
    let domain_width = result
        .addresses()
        .map(|a| a.domain().len())
        .chain(std::iter::once("DOMAIN".len()))
        .max()
        .unwrap_or(6);

    println!();
    println!(
        "{}",
        style(format!(
            "{:<email_width$}  {:<domain_width$}  SOURCE",
            "EMAIL", "DOMAIN"
        ))
        .bold()
    );
    for found in result.entries() {
        let source = match found.provenance {
            Provenance::Pattern => style(found.provenance.to_string()).green(),
            Provenance::Api => style(found.provenance.to_string()).cyan(),
        };
        println!(
            "{:<email_width$}  {:<domain_width$}  {}",
            found.address.as_str(),
            found.address.domain(),
            source
        );
    }
    println!();
}

fn print_metrics(stats: &SummaryStatistics, document: &Document) {
    println!("Total emails:   {}", style(stats.total).cyan());
    println!("Unique domains: {}", style(stats.unique_domains).cyan());
    println!("Source rows:    {}", style(document.row_count()).cyan());
}

/// Truncate a line for display, keeping character boundaries.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{clipped}...")
}
