use clap::Parser;
use color_eyre::Result;

use fame_kit::{Config, Profile, cli::Cli, logging, utils};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev selects the separate dev config
    let profile = if cli.dev {
        Profile::Dev
    } else {
        Profile::Prod
    };

    // Load configuration; --config takes precedence over the profile's path
    let loaded = match cli.config {
        Some(ref path) => Config::open(&utils::expand_path(path))?,
        None => Config::open_with_profile(profile)?,
    };
    let config = loaded.config;

    // Start logging once the config says where the log file goes
    match config.get_log_path(profile) {
        Some(path) => {
            if let Err(e) = logging::init_logging(&path) {
                logging::init_logging_stderr();
                tracing::warn!(path = %path.display(), error = %e, "log file unavailable, logging to stderr");
            }
        }
        None => logging::init_logging_stderr(),
    }

    if loaded.created {
        tracing::info!(path = %loaded.path.display(), "created default config");
    } else {
        tracing::debug!(path = %loaded.path.display(), "loaded config");
    }

    // Dispatch to the subcommand
    fame_kit::cli::run(cli.command, &config)?;

    Ok(())
}
