// Saving the composed message as a dated text file.
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

/// `{prefix}{YYYY-MM-DD}.txt`, e.g. "royal-rate-2026-10-17.txt".
pub fn download_filename(prefix: &str, today: NaiveDate) -> String {
    format!("{}{}.txt", prefix, today.format("%Y-%m-%d"))
}

/// Writes the message as UTF-8 into `dir`, replacing any file from earlier the
/// same day, and returns the full path.
pub async fn save_message(
    dir: &Path,
    prefix: &str,
    today: NaiveDate,
    message: &str,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(download_filename(prefix, today));
    tokio::fs::write(&path, message.as_bytes()).await?;
    tracing::info!(path = %path.display(), bytes = message.len(), "Saved rate message");
    Ok(path)
}
