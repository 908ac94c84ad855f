//! `deepmerge` CLI — deep merge JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Merge two files, result on stdout
//! deepmerge base.json override.json
//!
//! # Layer several files left to right, pretty-printed into a file
//! deepmerge defaults.json site.json local.json --pretty -o merged.json
//!
//! # Read one of the documents from stdin
//! echo '{"replicas":3}' | deepmerge base.json -
//!
//! # Trace every merge decision
//! deepmerge -vv base.json override.json
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deepmerge",
    version,
    about = "Deep merge JSON documents: objects recurse, arrays extend, nulls never clobber"
)]
struct Cli {
    /// JSON documents to merge, left to right (`-` reads stdin)
    #[arg(required = true, num_args = 2.., value_name = "FILES")]
    files: Vec<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the merged JSON
    #[arg(short, long)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.iter().filter(|f| f.as_str() == "-").count() > 1 {
        bail!("stdin (`-`) can only be used for one document");
    }

    let layers = cli
        .files
        .iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<Value>>>()?;

    let merged = deepmerge_core::merge_all(&layers)
        .with_context(|| format!("Failed to merge {}", cli.files.join(", ")))?;
    info!(documents = layers.len(), "merged");

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&merged)?
    } else {
        serde_json::to_string(&merged)?
    };
    write_output(cli.output.as_deref(), &rendered)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: &str) -> Result<Value> {
    let text = read_input(path)?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", display_name(path)))?;
    debug!(source = display_name(path), "parsed document");
    Ok(value)
}

fn display_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
