pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::domain::model::Rectangle;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved inputs for one run: the shape and how to print it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSettings {
    pub rectangle: Rectangle,
    pub format: OutputFormat,
}

impl ShapeSettings {
    /// Layers explicit values over the config file. Each dimension must come
    /// from one of the two.
    pub fn resolve(
        length: Option<i64>,
        width: Option<i64>,
        format: Option<OutputFormat>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let length = length.or_else(|| file.and_then(|f| f.shape.length));
        let width = width.or_else(|| file.and_then(|f| f.shape.width));
        let format = match format {
            Some(format) => format,
            None => match file {
                Some(f) => f.output_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        let rectangle = Rectangle::new(
            validate_required_field("length", length)?,
            validate_required_field("width", width)?,
        );

        Ok(Self { rectangle, format })
    }

    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        Self::resolve(None, None, None, Some(file))
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shape-dims")]
#[command(about = "Print a rectangle's dimensions as single-key mappings")]
pub struct CliConfig {
    /// Length of the rectangle (whole number, may be zero or negative)
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Width of the rectangle (whole number, may be zero or negative)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<ShapeSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = ShapeSettings::resolve(self.length, self.width, self.format, file.as_ref())?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShapeError;

    #[test]
    fn test_resolve_from_explicit_values() {
        let settings = ShapeSettings::resolve(Some(10), Some(5), None, None).unwrap();
        assert_eq!(settings.rectangle, Rectangle::new(10, 5));
        assert_eq!(settings.format, OutputFormat::JsonLines);
    }

    #[test]
    fn test_explicit_values_override_file() {
        let file = TomlConfig::from_toml_str(
            "[shape]\nlength = 1\nwidth = 2\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let settings =
            ShapeSettings::resolve(Some(-3), None, Some(OutputFormat::Text), Some(&file)).unwrap();
        assert_eq!(settings.rectangle, Rectangle::new(-3, 2));
        assert_eq!(settings.format, OutputFormat::Text);

        let settings = ShapeSettings::from_toml(&file).unwrap();
        assert_eq!(settings.rectangle, Rectangle::new(1, 2));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_dimension() {
        let err = ShapeSettings::resolve(Some(4), None, None, None).unwrap_err();
        match err {
            ShapeError::MissingConfig { field } => assert_eq!(field, "width"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_negative_values() {
        let cli = CliConfig::parse_from(["shape-dims", "--length", "-3", "--width", "7", "-f", "text"]);
        assert!(cli.validate().is_ok());

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.rectangle, Rectangle::new(-3, 7));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_non_numeric_length() {
        let err = CliConfig::try_parse_from(["shape-dims", "--length", "abc", "--width", "7"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flag_is_not_taken_as_a_value() {
        let err = CliConfig::try_parse_from(["shape-dims", "--length", "--width", "5"]).unwrap_err();
        assert_ne!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = CliConfig::try_parse_from(["shape-dims", "--width", "-5", "--length", "0"]).unwrap();
        assert_eq!(cli.length, Some(0));
        assert_eq!(cli.width, Some(-5));
    }
}
