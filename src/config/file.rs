use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// TOML configuration file. Only the completion-API settings are
/// file-configurable; everything else is a CLI concern.
///
/// ```toml
/// [api]
/// endpoint = "https://api.openai.com/v1/chat/completions"
/// model = "gpt-3.5-turbo"
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiFileConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFileConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| TrackerError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nendpoint = \"https://proxy.example.com/v1/chat/completions\"\nmodel = \"gpt-4o-mini\"\ntemperature = 0.3"
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        let api = config.api.unwrap();
        assert_eq!(
            api.endpoint.as_deref(),
            Some("https://proxy.example.com/v1/chat/completions")
        );
        assert_eq!(api.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(api.temperature, Some(0.3));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "").unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert!(config.api.is_none());
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nendpoint = ").unwrap();

        let err = FileConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigError { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileConfig::from_path(Path::new("/nonexistent/delay-tracker.toml")).unwrap_err();
        assert!(matches!(err, TrackerError::IoError(_)));
    }
}
