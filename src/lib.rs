pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::DraftSettings;
pub use crate::core::delay::compute_delay;
pub use crate::core::email::{OpenAiDrafter, TemplateDrafter};
pub use crate::core::form::{FormSession, FormState};
pub use crate::core::panel::{EmailPanel, PanelState};
pub use crate::domain::model::{
    DelayInput, DelayResult, EmailRequest, EmailResponse, ProjectSelection,
};
pub use crate::domain::ports::{DraftConfig, EmailDrafter};
pub use crate::utils::error::{Result, TrackerError};
