use anyhow::Result;
use clap::Args;

use crate::api::{Client, Filter, HashType};
use crate::config::Config;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct RangeArgs {
    /// Hash prefix (5-64 chars, hex only)
    pub prefix: String,

    /// Show only hash or password
    #[arg(long, value_enum)]
    pub filter: Option<Filter>,

    /// Hash type (default: md5)
    #[arg(long = "type", value_enum)]
    pub hash_type: Option<HashType>,

    /// Output format
    #[arg(short, long, value_parser = output::document_format_parser())]
    pub format: Option<OutputFormat>,
}

pub fn run(args: RangeArgs, client: &Client, config: &Config) -> Result<()> {
    let hash_type = config.hash_type(args.hash_type);
    let lookup = client.range(&args.prefix, args.filter, hash_type);

    println!("{}", output::render(&lookup, config.document_format(args.format)));
    Ok(())
}
