// Rate announcer entry point
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rate_announcer::config::AnnouncerSettings;
use rate_announcer::logging::init_logging;
use rate_announcer::services::whatsapp::{LinkOpener, PrintOpener, SystemOpener};
use rate_announcer::services::{ConsoleNotifier, Notifier};
use rate_announcer::workflow::form::{today, today_display_date};
use rate_announcer::workflow::Announcer;
use tracing::{info, warn};

mod cli;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Arc::new(
        AnnouncerSettings::load(cli.config.as_deref()).context("Failed to load settings")?,
    );
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let no_open = matches!(cli.command, Command::Share { no_open: true, .. });
    let opener: Arc<dyn LinkOpener> = if no_open {
        Arc::new(PrintOpener)
    } else {
        Arc::new(SystemOpener)
    };
    let announcer = Announcer::new(settings.clone(), opener, notifier)?;
    info!(
        version = %settings.version,
        rate_log = announcer.rate_log_enabled(),
        "Rate announcer ready"
    );

    match cli.command {
        Command::Preview(form) => {
            let input = form.into_input(today_display_date);
            if let Some(message) = announcer.preview_controller().preview(&input).await {
                println!("{}", message);
            }
        }
        Command::Copy(form) => {
            let input = form.into_input(today_display_date);
            let outcome = announcer.copy(&input).await;
            if !outcome.copied {
                warn!("Clipboard unavailable, printing the message instead");
            }
            println!("{}", outcome.message);
        }
        Command::Download { form, dir } => {
            let input = form.into_input(today_display_date);
            let path = announcer
                .download(&input, dir.as_deref(), today())
                .await
                .context("Failed to save the message")?;
            info!(path = %path.display(), "Download complete");
        }
        Command::Share { form, .. } => {
            let input = form.into_input(today_display_date);
            if let Some(outcome) = announcer.generate_and_share(&input).await? {
                println!("{}", outcome.message);
                // The link is already open; only keep the process alive for the rate log.
                if let Err(e) = outcome.rate_log.await {
                    warn!(error = %e, "Rate log task ended abnormally");
                }
            }
        }
        Command::Url(form) => {
            let input = form.into_input(today_display_date);
            println!("{}", announcer.share_url(&announcer.compose(&input)));
        }
        Command::Clear(form) => {
            let input = form.into_input(today_display_date);
            let cleared = announcer.clear(&input);
            println!("{}", serde_json::to_string_pretty(&cleared)?);
        }
    }

    Ok(())
}
