use std::io::{self, BufRead};

use anyhow::{Context, Result};

use super::{clean_lines, HashSource};

pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HashSource for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn hashes(&self) -> Result<Box<dyn Iterator<Item = Result<String>>>> {
        Ok(Box::new(
            clean_lines(io::stdin().lock().lines())
                .map(|line| line.context("Failed to read hashes from stdin")),
        ))
    }
}
