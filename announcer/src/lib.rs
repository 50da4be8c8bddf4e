// Rate announcer library root: message composition plus the services and
// flows around it (clipboard, download, WhatsApp share, remote rate log).

pub mod composer;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod workflow;

pub use composer::{build_fields, compose, compose_message};
pub use error::{AnnouncerError, Result};
