use crate::listing::{map_listing, Listing};
use anyhow::{bail, Context};
use clap::Parser;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

/// Flattens raw listing JSON from the listings API into typed records.
///
/// Reads one listing object, or an array of them, and prints the mapped
/// listings to stdout as a JSON array.
#[derive(Parser, Debug)]
#[command(name = "listing-mapper")]
#[command(version)]
pub struct Cli {
    #[arg(help = "File with listing JSON; reads stdin when omitted or '-'")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Pretty-print the output")]
    pub pretty: bool,

    #[arg(long, help = "Leave the stripped source object out of each record")]
    pub no_raw: bool,

    #[arg(
        long,
        env = "LISTING_MAPPER_LOG",
        help = "Log filter, e.g. 'debug' (overrides RUST_LOG)"
    )]
    pub log_level: Option<String>,
}

impl Cli {
    fn read_input(&self) -> anyhow::Result<String> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Maps a decoded document: a single listing object or an array of them.
pub fn map_document(document: &Value) -> anyhow::Result<Vec<Listing>> {
    match document {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| map_listing(item).with_context(|| format!("Listing #{i}")))
            .collect(),
        Value::Object(_) => Ok(vec![map_listing(document)?]),
        _ => bail!("Expected a listing object or an array of listings"),
    }
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = cli.read_input()?;
    let document: Value = serde_json::from_str(&text).context("Input is not valid JSON")?;

    let mut listings = map_document(&document)?;
    info!("Mapped {} listing(s)", listings.len());

    if cli.no_raw {
        for listing in &mut listings {
            listing.raw = Value::Null;
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &listings)?;
    } else {
        serde_json::to_writer(&mut out, &listings)?;
    }
    writeln!(out)?;

    Ok(())
}
