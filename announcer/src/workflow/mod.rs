// Sequencing of the user-facing flows on top of the composer and services.
pub mod actions;
pub mod form;
pub mod preview;

pub use actions::{Announcer, CopyOutcome, ShareOutcome};
pub use preview::{PreviewController, PreviewState};
