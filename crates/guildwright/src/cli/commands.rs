//! CLI command definitions.

use clap::{Parser, Subcommand};
use guildwright::IdAllocator;
use std::path::PathBuf;

/// Guildwright - render guild blueprints as creation requests
#[derive(Parser, Debug)]
#[command(name = "guildwright")]
#[command(about = "Render guild blueprints as creation requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the creation document for a blueprint
    Render {
        /// Path to the blueprint TOML file
        blueprint: PathBuf,

        /// Print the document on a single line
        #[arg(long)]
        compact: bool,

        /// First placeholder id, overriding the configuration
        #[arg(long, value_parser = clap::value_parser!(u64).range(..=IdAllocator::MAX_FIRST_ID))]
        first_id: Option<u64>,
    },

    /// Validate a blueprint and print a summary
    Check {
        /// Path to the blueprint TOML file
        blueprint: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_must_leave_room() {
        let cli = Cli::try_parse_from(["guildwright", "render", "g.toml", "--first-id", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Render { first_id: Some(7), .. }));

        let max = u64::MAX.to_string();
        let err = Cli::try_parse_from(["guildwright", "render", "g.toml", "--first-id", &max])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
