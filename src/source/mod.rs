mod file;
mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

use anyhow::Result;

/// A line-delimited list of hashes.
pub trait HashSource {
    fn name(&self) -> &str;
    /// Trimmed, non-empty lines in input order. Read failures are yielded, not skipped.
    fn hashes(&self) -> Result<Box<dyn Iterator<Item = Result<String>>>>;
}

pub fn parse(spec: &str) -> Box<dyn HashSource> {
    if spec == "-" {
        Box::new(StdinSource::new())
    } else {
        Box::new(FileSource::new(spec))
    }
}

pub(crate) fn clean_lines<I>(lines: I) -> impl Iterator<Item = Result<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    lines.filter_map(|line| match line {
        Ok(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Ok(trimmed.to_string()))
            }
        }
        Err(e) => Some(Err(e.into())),
    })
}
