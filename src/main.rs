//! smart-notes - Meeting transcripts into summaries, action items, and follow-ups
//!
//! Entry point for the smart-notes CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smart_notes::cli::{Cli, Commands};
use smart_notes::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            smart_notes::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            init_logging(&settings, cli.verbose, matches!(command, Commands::Tui));

            // Execute command
            match command {
                Commands::Generate {
                    file,
                    api_key,
                    format,
                } => {
                    smart_notes::cli::commands::generate_notes(&settings, file, api_key, format)
                        .await?;
                }
                Commands::Upload { file } => {
                    smart_notes::cli::commands::upload_audio(&file)?;
                }
                Commands::Tui => {
                    smart_notes::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    smart_notes::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `--verbose`, then the configured level.
/// The TUI stays quiet so log lines do not tear the alternate screen.
fn init_logging(settings: &Settings, verbose: bool, tui: bool) {
    let default_level = if verbose {
        "debug"
    } else if tui {
        "error"
    } else {
        settings.general.log_level.as_str()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
