// Transient, non-blocking user notices ("toasts"). Failures in delivery services
// end up here instead of aborting the action that triggered them.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn copied() -> Self {
        Notice::new("Copied!", "Message copied to clipboard")
    }

    pub fn copy_failed() -> Self {
        Notice::new("Error", "Could not copy to clipboard")
    }

    pub fn whatsapp_opened() -> Self {
        Notice::new("WhatsApp Opened!", "Message ready to send")
    }

    pub fn downloaded(filename: &str) -> Self {
        Notice::new("Downloaded!", format!("File saved as {}", filename))
    }

    pub fn cleared() -> Self {
        Notice::new("Cleared!", "Form fields have been reset")
    }

    pub fn rate_log_failed(reason: &str) -> Self {
        Notice::new("Rate log failed", reason)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to stderr, keeping stdout free for the message itself.
#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, message = %notice.message, "Notice");
        eprintln!("{}", notice);
    }
}
