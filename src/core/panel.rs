use crate::domain::model::{EmailRequest, EmailResponse};
use crate::domain::ports::EmailDrafter;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Display state of the email panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Loading,
    Ready(String),
    Failed(String),
}

/// Handle to an in-flight email draft. Opening the panel spawns the draft on
/// the runtime; closing it (or dropping the handle) discards a late result
/// without aborting the underlying request.
pub struct EmailPanel {
    rx: Option<oneshot::Receiver<Result<EmailResponse>>>,
    state: PanelState,
}

impl EmailPanel {
    pub fn open(drafter: Arc<dyn EmailDrafter>, request: EmailRequest) -> Self {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = drafter.draft(&request).await;
            // The receiver is gone once the panel is closed; the outcome is
            // then simply dropped.
            let _ = tx.send(outcome);
        });

        Self {
            rx: Some(rx),
            state: PanelState::Loading,
        }
    }

    /// Awaits the draft outcome. No timeout: a hung request keeps the panel
    /// loading until the caller gives up.
    pub async fn wait(&mut self) -> &PanelState {
        if let Some(rx) = self.rx.take() {
            self.state = match rx.await {
                Ok(outcome) => settle(outcome),
                Err(_) => PanelState::Failed("email draft task was dropped".to_string()),
            };
        }
        &self.state
    }

    /// Non-blocking observation of the current state.
    pub fn poll(&mut self) -> &PanelState {
        if let Some(mut rx) = self.rx.take() {
            match rx.try_recv() {
                Ok(outcome) => self.state = settle(outcome),
                Err(oneshot::error::TryRecvError::Empty) => self.rx = Some(rx),
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.state = PanelState::Failed("email draft task was dropped".to_string());
                }
            }
        }
        &self.state
    }

    /// Stops observing the in-flight draft. The request itself is not
    /// aborted; its result just has nowhere to land.
    pub fn close(&mut self) {
        self.rx = None;
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }
}

fn settle(outcome: Result<EmailResponse>) -> PanelState {
    match outcome {
        Ok(response) => PanelState::Ready(response.body),
        Err(e) => PanelState::Failed(e.to_string()),
    }
}
