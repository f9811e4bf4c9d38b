use crate::core::render::OutputFormat;
use crate::utils::error::{Result, ShapeError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub shape: ShapeConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeConfig {
    pub length: Option<i64>,
    pub width: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        tracing::debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Output format named in `[output]`, if any. Unknown names are an error.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(name) = self.output.as_ref().and_then(|o| o.format.as_deref()) else {
            return Ok(None);
        };

        OutputFormat::from_name(name)
            .map(Some)
            .ok_or_else(|| ShapeError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: name.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OutputFormat::NAMES.join(", ")
                ),
            })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.output_format()?;
        Ok(())
    }
}
