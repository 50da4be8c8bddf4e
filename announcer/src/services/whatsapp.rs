// WhatsApp share links (https://wa.me/?text=...).
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{AnnouncerError, Result};

// Same unreserved set as JavaScript's encodeURIComponent, so links match what a
// browser would have produced for the same message.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn whatsapp_url(base_url: &str, message: &str) -> String {
    format!("{}?text={}", base_url, encode_uri_component(message))
}

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the link to the desktop's default browser.
#[derive(Debug, Default, Clone)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| AnnouncerError::LinkOpen(e.to_string()))?;
        tracing::info!("Opened share link in browser");
        Ok(())
    }
}

/// Prints the link instead of opening it (headless machines, `--no-open`).
#[derive(Debug, Default, Clone)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
