//! Presence dot preview - Entry Point

use clap::Parser;
use presence_dot::model::{AppError, PresenceStatus};
use presence_dot::preview::{PreviewOptions, MAX_PARTICIPANTS};
use std::path::PathBuf;
use tracing::info;

/// Presence dot - preview the presence indicator widget in the terminal
#[derive(Parser, Debug)]
#[command(name = "presence-dot")]
#[command(version)]
#[command(about = "Preview the chat presence indicator widget in the terminal")]
pub struct Args {
    /// Initial status (available, away, busy, invisible, offline, unknown)
    #[arg(short, long, default_value = "available")]
    pub status: PresenceStatus,

    /// Start with the status unset
    #[arg(long, conflicts_with = "status")]
    pub none: bool,

    /// Number of bound participants (the dot only shows for exactly one)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(0..=MAX_PARTICIPANTS as i64))]
    pub participants: u8,

    /// Uniform padding around the dot area, in pixels
    #[arg(long, default_value = "0")]
    pub padding: f64,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Preview options described by the arguments.
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            status: (!self.none).then_some(self.status),
            participants: usize::from(self.participants),
            padding: self.padding.max(0.0),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File
    let config_file = presence_dot::config::load_config_with_precedence(args.config.clone())?;
    let config = presence_dot::config::merge_config(config_file);

    presence_dot::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    presence_dot::preview::run(config, &args.preview_options())?;

    Ok(())
}
