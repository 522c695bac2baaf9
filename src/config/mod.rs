pub mod file;

use crate::domain::ports::DraftConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use file::FileConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "delay-tracker")]
#[command(about = "Project delay tracking dashboard")]
pub struct CliConfig {
    #[arg(long, help = "Project name")]
    pub project: Option<String>,

    #[arg(long, help = "Sub-project name")]
    pub sub_project: Option<String>,

    #[arg(long, help = "Activity name")]
    pub activity: Option<String>,

    #[arg(long, help = "Planned start date (YYYY-MM-DD)")]
    pub planned_start: Option<NaiveDate>,

    #[arg(long, help = "Actual start date (YYYY-MM-DD)")]
    pub actual_start: Option<NaiveDate>,

    #[arg(long, help = "Draft the delay notification email after calculating")]
    pub email: bool,

    #[arg(long, help = "Use the offline letter template instead of the completion API")]
    pub offline: bool,

    #[arg(long, help = "Print the updated project timeline")]
    pub timeline: bool,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved completion-API settings. The credential comes from the
/// environment, never from a flag or a config file.
#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub api_endpoint: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl DraftSettings {
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Self {
        Self {
            api_endpoint: cli.api_endpoint.clone(),
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            model: cli.model.clone(),
            temperature: cli.temperature,
        }
    }

    /// Overlays values from a config file. File values win over CLI
    /// defaults; absent file values leave the current settings untouched.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(api) = &file.api {
            if let Some(endpoint) = &api.endpoint {
                self.api_endpoint = endpoint.clone();
            }
            if let Some(model) = &api.model {
                self.model = model.clone();
            }
            if let Some(temperature) = api.temperature {
                self.temperature = temperature;
            }
        }
    }
}

impl DraftConfig for DraftSettings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Validate for DraftSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::ApiFileConfig;

    #[test]
    fn test_default_settings_validate() {
        let settings = DraftSettings {
            api_key: "key".to_string(),
            ..DraftSettings::default()
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_out_of_range_temperature_is_rejected() {
        let settings = DraftSettings {
            temperature: 3.2,
            ..DraftSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_values_overlay_defaults() {
        let mut settings = DraftSettings::default();
        let file = FileConfig {
            api: Some(ApiFileConfig {
                endpoint: Some("https://proxy.example.com/v1/chat/completions".to_string()),
                model: None,
                temperature: Some(0.2),
            }),
        };

        settings.apply_file(&file);

        assert_eq!(
            settings.api_endpoint,
            "https://proxy.example.com/v1/chat/completions"
        );
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.temperature, 0.2);
    }
}
