use crate::domain::model::{EmailRequest, EmailResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Drafts a delay-notification email for a computed delay. Implemented by the
/// networked completion-API drafter and by the offline template drafter.
#[async_trait]
pub trait EmailDrafter: Send + Sync {
    async fn draft(&self, request: &EmailRequest) -> Result<EmailResponse>;
}

/// Settings needed to reach the completion API. The credential stays on this
/// side of the boundary and is never part of any response.
pub trait DraftConfig: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;
}
