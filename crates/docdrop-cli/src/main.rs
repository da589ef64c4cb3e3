//! docdrop — batch document ingestion over a watched directory.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info};

use docdrop_core::config::parse_extension_list;
use docdrop_core::{init_run_logger, DocdropConfig, IngestSource};
use docdrop_ingest::{run_batch, ExtensionFilter};

/// Ingest every supported document from the watched input directory.
#[derive(Parser)]
#[command(name = "docdrop", version, about)]
struct Cli {
    /// Data directory holding input/ and logs/
    #[arg(long, env = "DOCDROP_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Comma-separated extension allow-list override
    #[arg(long, value_name = "EXT,EXT")]
    extensions: Option<String>,

    /// Log file decisions for every evaluated file
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = DocdropConfig::from_env(&cli.data_dir);
    if let Some(raw) = cli.extensions.as_deref() {
        let list = parse_extension_list(raw);
        if !list.is_empty() {
            config.allowed_extensions = list;
        }
    }

    let run_log = init_run_logger("cli_ingestion", &config.data_paths.logs, cli.verbose)?;

    let filter = ExtensionFilter::new(&config.allowed_extensions);
    let outcome = match run_batch(&config.data_paths.input, &filter, IngestSource::Cli) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Ingestion failed: {}", err);
            return Err(err.into());
        }
    };

    for record in &outcome.succeeded {
        info!(
            "Ingested file '{}' ({}) id={} size={} bytes",
            record.name, record.extension, record.file_id, record.size_bytes
        );
    }

    println!(
        "{} {} file(s) ingested",
        "Done:".green().bold(),
        outcome.succeeded.len()
    );
    if !outcome.failed.is_empty() {
        println!(
            "{} {} file(s) failed",
            "Failed:".red().bold(),
            outcome.failed.len()
        );
        for failure in &outcome.failed {
            println!("  {} {}", failure.name.yellow(), failure.error);
        }
    }
    println!("Run log: {}", run_log.path().display());

    if !outcome.is_clean() {
        anyhow::bail!(
            "{} of {} file(s) failed to ingest",
            outcome.failed.len(),
            outcome.total()
        );
    }
    Ok(())
}
