pub mod delay;
pub mod email;
pub mod form;
pub mod panel;
pub mod timeline;

pub use crate::domain::model::{DelayInput, DelayResult, EmailRequest, EmailResponse};
pub use crate::domain::ports::{DraftConfig, EmailDrafter};
pub use crate::utils::error::Result;
