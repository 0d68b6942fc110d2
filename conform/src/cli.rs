// conform/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conform")]
#[command(about = "Specification-compliance engine for lab measurement data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚩 Audits row files against the specification (exit 1 if out-of-spec)
    Check {
        /// Specification file
        #[arg(long, default_value = "conform.yaml")]
        spec: PathBuf,

        /// Row file (.jsonl / .json); repeatable
        #[arg(long = "data")]
        data: Vec<PathBuf>,

        /// Directory scanned recursively for row files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,

        /// Write the JSON report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// ✅ Validates a specification file (fails fast on contract errors)
    Validate {
        /// Specification file
        #[arg(long, default_value = "conform.yaml")]
        spec: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check_defaults() -> Result<()> {
        let args = Cli::parse_from(["conform", "check"]);
        match args.command {
            Commands::Check {
                spec,
                data,
                data_dir,
                format,
                output,
            } => {
                assert_eq!(spec.to_string_lossy(), "conform.yaml");
                assert!(data.is_empty());
                assert_eq!(data_dir, None);
                assert_eq!(format, "table");
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_multiple_data_files() -> Result<()> {
        let args = Cli::parse_from([
            "conform",
            "check",
            "--spec",
            "quality.yaml",
            "--data",
            "a.jsonl",
            "--data",
            "b.jsonl",
            "--format",
            "json",
        ]);
        match args.command {
            Commands::Check {
                spec, data, format, ..
            } => {
                assert_eq!(spec.to_string_lossy(), "quality.yaml");
                assert_eq!(data.len(), 2);
                assert_eq!(format, "json");
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_validate() -> Result<()> {
        let args = Cli::parse_from(["conform", "validate", "--spec", "/tmp/s.yaml"]);
        match args.command {
            Commands::Validate { spec } => {
                assert_eq!(spec.to_string_lossy(), "/tmp/s.yaml");
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }
}
