// Preview rendering: Idle -> Loading -> Rendered.
//
// Every request cancels whichever request is still in flight, so rapid repeated
// triggers (typing, double clicks) end with exactly one render of the latest input.
use std::sync::Arc;
use std::time::Duration;

use shared::models::RateInput;
use shared::utils::indian_format::is_positive_amount;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::composer::compose;
use crate::config::AnnouncerSettings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Rendered(String),
}

// `settled` is the last non-loading state; a cancelled request falls back to it.
#[derive(Debug, Default)]
struct Slots {
    current: PreviewState,
    settled: PreviewState,
}

pub struct PreviewController {
    settings: Arc<AnnouncerSettings>,
    state: RwLock<Slots>,
    active: Mutex<Option<CancellationToken>>,
}

impl PreviewController {
    pub fn new(settings: Arc<AnnouncerSettings>) -> Self {
        PreviewController {
            settings,
            state: RwLock::new(Slots::default()),
            active: Mutex::new(None),
        }
    }

    pub async fn state(&self) -> PreviewState {
        self.state.read().await.current.clone()
    }

    /// Cancels the in-flight request, if any, and puts back whatever was shown
    /// before it started loading.
    pub async fn cancel(&self) {
        let mut state = self.state.write().await;
        if let Some(token) = self.active.lock().await.take() {
            tracing::debug!("Cancelling pending preview");
            token.cancel();
            state.current = state.settled.clone();
        }
    }

    /// Renders after the loading delay. `None` if a newer request superseded this one.
    pub async fn preview(&self, input: &RateInput) -> Option<String> {
        self.render_after(input, self.settings.timing.loading_delay()).await
    }

    /// Renders after the debounce delay; used while the user is still typing.
    pub async fn debounced_preview(&self, input: &RateInput) -> Option<String> {
        self.render_after(input, self.settings.timing.debounce()).await
    }

    /// Auto-preview hook for rate fields: only a positive amount schedules a render.
    pub async fn on_rate_edited(&self, edited_value: &str, input: &RateInput) -> Option<String> {
        if !is_positive_amount(edited_value) {
            return None;
        }
        self.debounced_preview(input).await
    }

    async fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut active = self.active.lock().await;
        if let Some(previous) = active.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    async fn render_after(&self, input: &RateInput, delay: Duration) -> Option<String> {
        let token = self.begin().await;
        {
            // A cancel() may land between begin() and here; it has already
            // restored the settled state, so don't flip it back to Loading.
            let mut state = self.state.write().await;
            if token.is_cancelled() {
                return None;
            }
            state.current = PreviewState::Loading;
        }

        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("Preview superseded before render");
                return None;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let message = compose(input, &self.settings.message);

        // Checked under the state lock so a cancelled render never overwrites a newer one.
        let mut state = self.state.write().await;
        if token.is_cancelled() {
            return None;
        }
        state.current = PreviewState::Rendered(message.clone());
        state.settled = state.current.clone();
        drop(state);

        tracing::debug!(lines = message.lines().count(), "Preview rendered");
        Some(message)
    }
}
