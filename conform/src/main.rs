// conform/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug conform check ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            spec,
            data,
            data_dir,
            format,
            output,
        } => commands::check::execute(spec, data, data_dir, format, output),

        Commands::Validate { spec } => commands::validate::execute(spec),
    }
}
