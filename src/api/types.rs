use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Restricts a range lookup to one side of each hash/password pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Only hashes
    Hash,
    /// Only plaintext passwords
    Pass,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Hash => "hash",
            Filter::Pass => "pass",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    #[default]
    Md5,
    Ntlm,
    Sha1,
    Sha256,
}

impl HashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Md5 => "md5",
            HashType::Ntlm => "ntlm",
            HashType::Sha1 => "sha1",
            HashType::Sha256 => "sha256",
        }
    }

    /// Length of a full digest in hex characters
    pub fn hex_len(&self) -> usize {
        match self {
            HashType::Md5 | HashType::Ntlm => 32,
            HashType::Sha1 => 40,
            HashType::Sha256 => 64,
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
