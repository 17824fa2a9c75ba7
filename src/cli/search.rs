use anyhow::{bail, Result};
use clap::{ArgGroup, Args, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::Value;

use crate::api::{Client, HashType, Lookup};
use crate::batch::{self, BatchResults};
use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::source;
use crate::status;

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["hash", "file"])))]
pub struct SearchArgs {
    /// The hash to search for (32-64 chars, hex only)
    pub hash: Option<String>,

    /// File containing hashes, one per line ("-" reads stdin)
    #[arg(long)]
    pub file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: SearchArgs, client: &Client, config: &Config) -> Result<()> {
    let format = config.format(args.format);

    match (args.hash, args.file) {
        (Some(hash), None) => search_one(client, &hash, format),
        (None, Some(file)) => search_file(client, &file, format),
        _ => bail!("Provide either a hash or --file"),
    }
}

fn search_one(client: &Client, hash: &str, format: OutputFormat) -> Result<()> {
    check_length(hash);

    let Some(lookup) = client.search(hash) else {
        match format {
            OutputFormat::Json => println!("null"),
            _ => println!("Hash not found."),
        }
        return Ok(());
    };

    match format {
        OutputFormat::Table => print_table(&[(hash.to_string(), lookup)]),
        _ => println!("{}", output::render(&lookup, format)),
    }
    Ok(())
}

fn search_file(client: &Client, spec: &str, format: OutputFormat) -> Result<()> {
    let hashes = source::parse(spec);
    status!("Searching hashes from {}...", hashes.name());

    let results = batch::search(client, hashes.as_ref())?;

    let errors = results.errors();
    status!(
        "Checked {} {}, found {}{}",
        results.checked(),
        if results.checked() == 1 { "hash" } else { "hashes" },
        results.len() - errors,
        if errors > 0 {
            format!(" ({} failed)", errors)
        } else {
            String::new()
        }
    );

    match format {
        OutputFormat::Json => println!("{}", output::pretty(&results.to_json())),
        _ if results.is_empty() => println!("No hashes found."),
        OutputFormat::Table => print_table(results.entries()),
        OutputFormat::Plain => print_plain(&results),
    }
    Ok(())
}

fn print_plain(results: &BatchResults) {
    for (hash, lookup) in results.entries() {
        println!("{}: {}", hash, lookup);
    }
}

fn print_table(entries: &[(String, Lookup)]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Hash", "Result"]);

    for (hash, lookup) in entries {
        let cell = match lookup.value() {
            Some(Value::String(s)) => s.clone(),
            _ => lookup.to_string(),
        };
        table.add_row(vec![hash.clone(), cell]);
    }

    println!("{table}");
}

/// Warns when a hash cannot be a full digest of any supported type.
fn check_length(hash: &str) {
    let len = hash.len();
    if !HashType::value_variants().iter().any(|t| t.hex_len() == len) {
        status!(
            "Warning: {} chars does not match an md5/ntlm (32), sha1 (40) or sha256 (64) digest",
            len
        );
    }
}
