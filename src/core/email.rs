use crate::domain::model::{EmailRequest, EmailResponse};
use crate::domain::ports::{DraftConfig, EmailDrafter};
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str =
    "You are a professional project manager writing a delay notification email.";

/// Builds the user prompt for the completion API: the delay details plus the
/// required letter structure.
pub fn build_prompt(request: &EmailRequest) -> String {
    format!(
        "Generate a professional project delay notification email with the following details:\n\
         - Project: {}\n\
         - Sub-project: {}\n\
         - Activity: {}\n\
         - Planned Start Date: {}\n\
         - Actual Start Date: {}\n\
         - Delay: {} days\n\
         \n\
         The email should include:\n\
         1. A professional greeting\n\
         2. Clear explanation of the delay\n\
         3. Impact assessment\n\
         4. Mitigation steps\n\
         5. Next actions\n\
         6. Professional closing\n\
         \n\
         Format the email with proper spacing and bullet points.",
        request.project,
        request.sub_project,
        request.activity,
        request.start_date,
        request.end_date,
        request.days_diff
    )
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Networked drafter: forwards the prompt to an OpenAI-style chat-completions
/// endpoint under a bearer credential and returns the first choice's content
/// verbatim. Never retries; every failure mode surfaces as `GenerationFailed`.
pub struct OpenAiDrafter<C: DraftConfig> {
    config: C,
    client: Client,
}

impl<C: DraftConfig> OpenAiDrafter<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: DraftConfig> EmailDrafter for OpenAiDrafter<C> {
    async fn draft(&self, request: &EmailRequest) -> Result<EmailResponse> {
        let prompt = build_prompt(request);
        let body = ChatCompletionRequest {
            model: self.config.model(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature(),
        };

        tracing::debug!("Requesting email draft from: {}", self.config.api_endpoint());
        let response = self
            .client
            .post(self.config.api_endpoint())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| TrackerError::GenerationFailed {
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        tracing::debug!("Completion API response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Completion API returned {}: {}", status, detail);
            return Err(TrackerError::GenerationFailed {
                message: format!("completion API returned {}", status),
            });
        }

        let payload: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| TrackerError::GenerationFailed {
                    message: format!("malformed completion payload: {}", e),
                })?;

        match payload.choices.into_iter().next() {
            Some(choice) => Ok(EmailResponse {
                body: choice.message.content,
            }),
            None => Err(TrackerError::GenerationFailed {
                message: "no email generated".to_string(),
            }),
        }
    }
}

/// Offline drafter: fills a fixed letter template from the request. Same
/// interface as the networked drafter, no I/O, never fails.
pub struct TemplateDrafter;

#[async_trait]
impl EmailDrafter for TemplateDrafter {
    async fn draft(&self, request: &EmailRequest) -> Result<EmailResponse> {
        let body = format!(
            "Dear Client,\n\
             \n\
             We are writing to inform you that the activity \"{activity}\" under the \
             {project} project ({sub_project} phase) has been delayed.\n\
             \n\
             - Planned Start Date: {start}\n\
             - Actual Start Date: {end}\n\
             - Delay: {days} days\n\
             \n\
             Impact assessment: downstream milestones shift by the same number of days \
             unless the time is recovered.\n\
             Mitigation steps: the schedule is being re-sequenced and additional resources \
             have been assigned to the affected activity.\n\
             Next actions: a revised baseline will be shared for sign-off within five \
             working days.\n\
             \n\
             We apologize for the inconvenience and appreciate your understanding.\n\
             \n\
             Sincerely,\n\
             Project Management Office\n",
            activity = request.activity,
            project = request.project,
            sub_project = request.sub_project,
            start = request.start_date,
            end = request.end_date,
            days = request.days_diff,
        );

        Ok(EmailResponse { body })
    }
}
