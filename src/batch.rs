use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};

use crate::api::{Client, Lookup};
use crate::output;
use crate::source::HashSource;

/// Hashes that produced a result, in input order.
#[derive(Debug, Default)]
pub struct BatchResults {
    entries: Vec<(String, Lookup)>,
    checked: usize,
}

impl BatchResults {
    pub fn push(&mut self, hash: String, lookup: Lookup) {
        self.entries.push((hash, lookup));
    }

    pub fn entries(&self) -> &[(String, Lookup)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of hashes looked up, found or not
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn errors(&self) -> usize {
        self.entries.iter().filter(|(_, l)| l.is_error()).count()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(hash, lookup)| (hash.clone(), lookup.to_json()))
            .collect();
        Value::Object(map)
    }
}

/// Looks up every hash from `source`, one request at a time.
///
/// Stops at the first read error from the source; lookup failures are
/// recorded and the batch continues.
pub fn search(client: &Client, source: &dyn HashSource) -> Result<BatchResults> {
    let hashes = source.hashes()?;
    let mut results = BatchResults::default();

    let pb = if output::is_quiet() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    };

    for hash in hashes {
        let hash = match hash {
            Ok(hash) => hash,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        results.checked += 1;
        if let Some(lookup) = client.search_unlogged(&hash) {
            results.push(hash, lookup);
        }

        pb.set_message(format!("checked {}, found {}", results.checked, results.len()));
        pb.tick();
    }

    pb.finish_and_clear();
    Ok(results)
}
