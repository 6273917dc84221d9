use clap::{Parser, Subcommand};
use std::io::{self, Write};
use thiserror::Error;

use crate::clipboard::{ClipboardError, ClipboardWriter, SystemClipboard, try_copy_text};
use crate::config::Config;
use crate::constants;
use crate::message::{MessageDisplay, Notifier, Severity, TerminalDisplay, options_for};
use crate::tags::{string_to_tags, tags_to_string};
use crate::urls::{get_server_media_url, get_server_url};

#[derive(Parser)]
#[command(name = "fame")]
#[command(about = "Admin panel helpers: server URLs, tag strings, clipboard and notifications")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses separate dev config)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configured API base URL
    ServerUrl,
    /// Print the URL of a media asset
    MediaUrl {
        /// Path relative to the media root
        path: String,
    },
    /// Join tags into a comma-separated string
    JoinTags {
        tags: Vec<String>,
    },
    /// Split a comma-separated string, one tag per line
    SplitTags {
        tags: Option<String>,
    },
    /// Copy text to the system clipboard
    Copy {
        text: String,
    },
    /// Show a notification
    Notify {
        #[arg(value_enum)]
        severity: Severity,
        /// Message text; the severity's default is used when omitted
        message: Option<String>,
        /// Print the notification payload as JSON instead of showing it
        #[arg(long)]
        json: bool,
    },
    /// Print the constants shared with the server
    Constants,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Clipboard error: {0}")]
    ClipboardError(#[from] ClipboardError),
    #[error("Failed to serialize payload: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    IoError(#[from] io::Error),
}

/// Run a subcommand against the platform clipboard and stderr notifications
pub fn run(command: Commands, config: &Config) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clipboard = SystemClipboard::new();
    let mut display = TerminalDisplay::stderr();
    dispatch(command, config, &mut out, &mut clipboard, &mut display)
}

pub fn dispatch(
    command: Commands,
    config: &Config,
    out: &mut dyn Write,
    clipboard: &mut dyn ClipboardWriter,
    display: &mut dyn MessageDisplay,
) -> Result<(), CliError> {
    match command {
        Commands::ServerUrl => writeln!(out, "{}", get_server_url(config))?,
        Commands::MediaUrl { path } => writeln!(out, "{}", get_server_media_url(config, &path))?,
        Commands::JoinTags { tags } => writeln!(out, "{}", tags_to_string(&tags))?,
        Commands::SplitTags { tags } => {
            for tag in string_to_tags(tags.as_deref()) {
                writeln!(out, "{}", tag)?;
            }
        }
        Commands::Copy { text } => handle_copy(&text, clipboard, display)?,
        Commands::Notify { severity, message, json } => {
            if json {
                let payload = options_for(severity, message.as_deref());
                writeln!(out, "{}", serde_json::to_string(&payload)?)?;
            } else {
                Notifier::new(display).notify(severity, message.as_deref());
            }
        }
        Commands::Constants => handle_constants(out)?,
    }
    Ok(())
}

/// Handle the copy command, reporting the outcome as a notification
pub fn handle_copy(
    text: &str,
    clipboard: &mut dyn ClipboardWriter,
    display: &mut dyn MessageDisplay,
) -> Result<(), CliError> {
    let mut notifier = Notifier::new(display);
    match try_copy_text(clipboard, text) {
        Ok(()) => {
            notifier.success(Some("Copied to clipboard"));
            Ok(())
        }
        Err(e) => {
            notifier.error(Some(&e.to_string()));
            Err(e.into())
        }
    }
}

fn handle_constants(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "DEFAULT_CATEGORY={}", constants::DEFAULT_CATEGORY)?;
    writeln!(out, "STATUS_PUBLISH={}", constants::STATUS_PUBLISH)?;
    writeln!(out, "STATUS_DRAFT={}", constants::STATUS_DRAFT)?;
    writeln!(out, "META_CATEGORY={}", constants::META_CATEGORY)?;
    writeln!(out, "META_TAG={}", constants::META_TAG)?;
    Ok(())
}
