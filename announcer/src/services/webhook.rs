// Remote rate log: posts the day's rates, form-encoded, to a spreadsheet webhook.
//
// The post is a side effect of sharing. It runs detached, is never retried, and
// its failure only produces a notice; sharing goes ahead regardless.
use std::sync::Arc;

use shared::models::RateLog;
use tokio::task::JoinHandle;

use super::notify::{Notice, Notifier};
use crate::config::WebhookSettings;
use crate::error::{AnnouncerError, Result};

pub struct RateLogger {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl RateLogger {
    pub fn new(settings: &WebhookSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;
        Ok(RateLogger {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Posts the rates. Returns `Ok(false)` when no endpoint is configured.
    pub async fn post(&self, log: &RateLog) -> Result<bool> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            tracing::debug!("No rate log endpoint configured, skipping");
            return Ok(false);
        };

        let response = self.client.post(endpoint).form(log).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnnouncerError::WebhookStatus(status.as_u16()));
        }

        tracing::info!(
            gold24k = %log.gold_24k,
            gold22k = %log.gold_22k,
            silver = %log.silver,
            "Rate log posted"
        );
        Ok(true)
    }
}

/// Fires the post on a background task and returns immediately.
pub fn spawn_rate_log(
    logger: Arc<RateLogger>,
    log: RateLog,
    notifier: Arc<dyn Notifier>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = logger.post(&log).await {
            tracing::warn!(error = %e, "Rate log post failed");
            notifier.notify(Notice::rate_log_failed(&e.to_string()));
        }
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // Single-shot HTTP endpoint: answers one request with `status` and hands
    // back the raw request text.
    pub(crate) async fn stub_endpoint(status: u16) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/rates", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            let reply = format!(
                "HTTP/1.1 {} STUB\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf).into_owned()
        });

        (url, handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }
}

#[cfg(test)]
mod tests {
    use super::testing::stub_endpoint;
    use super::*;
    use crate::services::notify::testing::RecordingNotifier;

    fn sample_log() -> RateLog {
        RateLog {
            gold_24k: "7,900".to_string(),
            gold_22k: "7,250".to_string(),
            silver: "1,050".to_string(),
        }
    }

    fn logger_for(endpoint: Option<String>) -> RateLogger {
        RateLogger::new(&WebhookSettings {
            endpoint,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_post_without_endpoint_is_skipped() {
        let logger = logger_for(None);
        assert!(!logger.is_configured());
        assert!(!logger.post(&sample_log()).await.unwrap());
    }

    #[tokio::test]
    async fn test_post_sends_form_encoded_rates() {
        let (url, server) = stub_endpoint(200).await;
        let logger = logger_for(Some(url));

        assert!(logger.post(&sample_log()).await.unwrap());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /rates"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("gold24k=7%2C900&gold22k=7%2C250&silver=1%2C050"));
    }

    #[tokio::test]
    async fn test_post_non_success_status_is_error() {
        let (url, server) = stub_endpoint(500).await;
        let logger = logger_for(Some(url));

        let err = logger.post(&sample_log()).await.unwrap_err();
        assert!(matches!(err, AnnouncerError::WebhookStatus(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_spawned_failure_reports_notice() {
        let (url, server) = stub_endpoint(503).await;
        let logger = Arc::new(logger_for(Some(url)));
        let notifier = Arc::new(RecordingNotifier::default());

        spawn_rate_log(logger, sample_log(), notifier.clone())
            .await
            .unwrap();
        server.await.unwrap();

        assert_eq!(notifier.titles(), vec!["Rate log failed".to_string()]);
        assert!(notifier.notices()[0].message.contains("503"));
    }
}
