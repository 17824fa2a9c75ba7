use anyhow::Result;
use clap::Args;

use crate::api::Client;
use crate::config::Config;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct WordlistsArgs {
    /// Output format
    #[arg(short, long, value_parser = output::document_format_parser())]
    pub format: Option<OutputFormat>,
}

pub fn run(args: WordlistsArgs, client: &Client, config: &Config) -> Result<()> {
    let lookup = client.wordlists();
    println!("{}", output::render(&lookup, config.document_format(args.format)));
    Ok(())
}
