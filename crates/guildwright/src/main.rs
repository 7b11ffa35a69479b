//! Guildwright CLI binary.
//!
//! Builds guild blueprints into creation documents. No requests are sent;
//! the output is meant for a transport or for inspection.

use clap::Parser;
use guildwright::{GuildwrightConfig, IdAllocator, check_blueprint, init_tracing, render_blueprint};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GuildwrightConfig::from_file(path)?,
        None => GuildwrightConfig::load()?,
    };

    init_tracing(config.telemetry().filter(), cli.verbose)?;

    match cli.command {
        Commands::Render {
            blueprint,
            compact,
            first_id,
        } => {
            let ids = first_id
                .map(IdAllocator::starting_at)
                .unwrap_or_else(|| config.allocator());
            let pretty = *config.output().pretty() && !compact;
            println!("{}", render_blueprint(&blueprint, ids, pretty)?);
        }

        Commands::Check { blueprint } => {
            let summary = check_blueprint(&blueprint, config.allocator())?;
            println!("{}", summary);
        }
    }

    Ok(())
}
