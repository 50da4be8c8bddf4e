// Delivery services for a composed message: clipboard, share link, text file,
// remote rate log, and the transient notices that report on them.
pub mod clipboard;
pub mod download;
pub mod notify;
pub mod webhook;
pub mod whatsapp;

pub use notify::{ConsoleNotifier, Notice, Notifier};
pub use webhook::RateLogger;
