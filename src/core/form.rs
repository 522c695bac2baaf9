use crate::core::delay::compute_delay;
use crate::core::panel::EmailPanel;
use crate::domain::model::{DelayInput, DelayResult, EmailRequest, ProjectSelection};
use crate::domain::ports::EmailDrafter;
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDate;
use std::sync::Arc;

pub const INVALID_RANGE_MESSAGE: &str =
    "The end date must be later than the start date. Please select a valid date range.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all required fields.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing { error: Option<String> },
    Calculated { input: DelayInput, result: DelayResult },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing { error: None }
    }
}

/// One dashboard form session. Holds the in-progress selections, the two
/// dates and the display state; everything is discarded with the session.
#[derive(Default)]
pub struct FormSession {
    pub selection: ProjectSelection,
    pub planned_start: Option<NaiveDate>,
    pub actual_start: Option<NaiveDate>,
    state: FormState,
    panel: Option<EmailPanel>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The message currently shown under the form, if any: a validation
    /// error while editing, the delay advisory once calculated.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            FormState::Editing { error } => error.as_deref(),
            FormState::Calculated { result, .. } => Some(&result.message),
        }
    }

    /// Validates the session and, when valid, computes the delay and moves
    /// to the calculated state. Date ordering is checked before field
    /// completeness, and the calculator is only reached when both pass.
    pub fn submit(&mut self) -> Result<DelayResult> {
        let input = match (self.planned_start, self.actual_start) {
            (Some(planned_start), Some(actual_start)) if actual_start >= planned_start => {
                DelayInput {
                    planned_start,
                    actual_start,
                }
            }
            _ => return Err(self.fail(TrackerError::InvalidDateRange {
                message: INVALID_RANGE_MESSAGE.to_string(),
            })),
        };

        if !self.selection.is_complete() {
            return Err(self.fail(TrackerError::MissingFields {
                message: MISSING_FIELDS_MESSAGE.to_string(),
            }));
        }

        let result = compute_delay(input.planned_start, input.actual_start);
        tracing::debug!("Calculated delay of {} days", result.total_days);

        self.state = FormState::Calculated {
            input,
            result: result.clone(),
        };
        Ok(result)
    }

    /// Resets every field to its initial value and discards any open email
    /// panel.
    pub fn clear(&mut self) {
        self.selection = ProjectSelection::default();
        self.planned_start = None;
        self.actual_start = None;
        self.state = FormState::default();
        self.panel = None;
    }

    /// The timeline route for the current dates, available once calculated.
    pub fn timeline_route(&self) -> Option<String> {
        match &self.state {
            FormState::Calculated { input, .. } => Some(crate::core::timeline::timeline_route(
                input.planned_start,
                input.actual_start,
            )),
            FormState::Editing { .. } => None,
        }
    }

    /// Opens the email panel for the calculated delay. Replaces any panel
    /// that is already open.
    pub fn open_email_panel(&mut self, drafter: Arc<dyn EmailDrafter>) -> Result<&mut EmailPanel> {
        let request = match &self.state {
            FormState::Calculated { input, result } => {
                EmailRequest::new(&self.selection, input, result)
            }
            FormState::Editing { .. } => {
                return Err(TrackerError::GenerationFailed {
                    message: "no calculated delay to draft an email for".to_string(),
                })
            }
        };

        Ok(self.panel.insert(EmailPanel::open(drafter, request)))
    }

    pub fn panel_mut(&mut self) -> Option<&mut EmailPanel> {
        self.panel.as_mut()
    }

    pub fn close_email_panel(&mut self) {
        self.panel = None;
    }

    fn fail(&mut self, error: TrackerError) -> TrackerError {
        let message = match &error {
            TrackerError::InvalidDateRange { message } | TrackerError::MissingFields { message } => {
                message.clone()
            }
            other => other.to_string(),
        };
        self.state = FormState::Editing {
            error: Some(message),
        };
        error
    }
}
