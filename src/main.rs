use anyhow::Result;
use clap::{CommandFactory, Parser};

use weakpass::cli::{Cli, Commands};

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    weakpass::output::set_quiet(cli.quiet);

    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.load_config()?;
    let client = cli.client(&config)?;

    match command {
        Commands::Range(args) => weakpass::cli::range::run(args, &client, &config),
        Commands::Search(args) => weakpass::cli::search::run(args, &client, &config),
        Commands::Wordlists(args) => weakpass::cli::wordlists::run(args, &client, &config),
    }
}
