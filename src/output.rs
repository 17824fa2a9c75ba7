use std::sync::atomic::{AtomicBool, Ordering};

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::api::Lookup;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prints to stderr unless `--quiet` was given.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Table,
}

/// `--format` parser for commands that print a single document (no table).
pub fn document_format_parser(
) -> impl TypedValueParser<Value = OutputFormat> + Clone + Send + Sync + 'static {
    PossibleValuesParser::new(["plain", "json"])
        .map(|s| OutputFormat::from_str(&s, true).unwrap_or_default())
}

/// Text printed for a single lookup in the given format.
pub fn render(lookup: &Lookup, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => pretty(&lookup.to_json()),
        _ => lookup.to_string(),
    }
}

pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
