// User-facing actions on the rate form: preview, copy, download, share, clear.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::RateInput;
use tokio::task::JoinHandle;

use super::preview::PreviewController;
use crate::composer::compose;
use crate::config::AnnouncerSettings;
use crate::error::{AnnouncerError, Result};
use crate::services::clipboard::{ClipboardWriter, SystemClipboard};
use crate::services::download::save_message;
use crate::services::notify::{Notice, Notifier};
use crate::services::webhook::{spawn_rate_log, RateLogger};
use crate::services::whatsapp::{whatsapp_url, LinkOpener};

pub struct ShareOutcome {
    pub message: String,
    pub url: String,
    // Still running when the link opens; await it only to keep the process alive.
    pub rate_log: JoinHandle<()>,
}

pub struct CopyOutcome {
    pub message: String,
    pub copied: bool,
}

pub struct Announcer {
    settings: Arc<AnnouncerSettings>,
    preview: Arc<PreviewController>,
    logger: Arc<RateLogger>,
    opener: Arc<dyn LinkOpener>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl Announcer {
    pub fn new(
        settings: Arc<AnnouncerSettings>,
        opener: Arc<dyn LinkOpener>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let logger = Arc::new(RateLogger::new(&settings.webhook)?);
        Ok(Announcer {
            preview: Arc::new(PreviewController::new(settings.clone())),
            settings,
            logger,
            opener,
            notifier,
            clipboard: Arc::new(SystemClipboard),
        })
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Whether shares also post the rates to the remote log.
    pub fn rate_log_enabled(&self) -> bool {
        self.logger.is_configured()
    }

    pub fn preview_controller(&self) -> Arc<PreviewController> {
        self.preview.clone()
    }

    pub fn compose(&self, input: &RateInput) -> String {
        compose(input, &self.settings.message)
    }

    /// Copies the message. "Copied!" is only reported once the clipboard
    /// holds the text for other applications. A failure is reported as a
    /// notice and the message is still handed back so the caller can show it.
    pub async fn copy(&self, input: &RateInput) -> CopyOutcome {
        let message = self.compose(input);
        let clipboard = self.clipboard.clone();
        let text = message.clone();
        let written = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
            .await
            .unwrap_or_else(|e| Err(AnnouncerError::Clipboard(e.to_string())));
        let copied = match written {
            Ok(()) => {
                self.notifier.notify(Notice::copied());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                self.notifier.notify(Notice::copy_failed());
                false
            }
        };
        CopyOutcome { message, copied }
    }

    pub async fn download(
        &self,
        input: &RateInput,
        dir: Option<&Path>,
        today: NaiveDate,
    ) -> Result<PathBuf> {
        let message = self.compose(input);
        let dir = dir.unwrap_or_else(|| Path::new(&self.settings.share.download_dir));
        let prefix = &self.settings.share.download_prefix;
        let path = save_message(dir, prefix, today, &message).await?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.notifier.notify(Notice::downloaded(&filename));
        Ok(path)
    }

    pub fn share_url(&self, message: &str) -> String {
        whatsapp_url(&self.settings.share.whatsapp_base_url, message)
    }

    pub fn open_whatsapp(&self, message: &str) -> Result<String> {
        let url = self.share_url(message);
        self.opener.open(&url)?;
        self.notifier.notify(Notice::whatsapp_opened());
        Ok(url)
    }

    /// Preview, wait the share delay, open WhatsApp, then fire off the rate log.
    /// `Ok(None)` when a newer preview request superseded this one. Nothing is
    /// logged remotely when the link could not be opened.
    pub async fn generate_and_share(&self, input: &RateInput) -> Result<Option<ShareOutcome>> {
        let Some(message) = self.preview.preview(input).await else {
            return Ok(None);
        };

        tokio::time::sleep(self.settings.timing.share_delay()).await;
        let url = self.open_whatsapp(&message)?;

        let rate_log =
            spawn_rate_log(self.logger.clone(), input.rate_log(), self.notifier.clone());

        Ok(Some(ShareOutcome {
            message,
            url,
            rate_log,
        }))
    }

    pub fn clear(&self, input: &RateInput) -> RateInput {
        let cleared = input.cleared();
        self.notifier.notify(Notice::cleared());
        cleared
    }
}
