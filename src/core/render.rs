use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::model::Dimension;
use crate::domain::ports::Dimensioned;
use crate::utils::error::{Result, ShapeError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    JsonLines,
    /// A single JSON array
    Json,
    /// `key: value` lines
    Text,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["json-lines", "json", "text"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json-lines" => Some(OutputFormat::JsonLines),
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// Writes every dimension of `shape` to `writer`, pulling them from the
/// iterator one at a time.
pub fn render<D, W>(shape: &D, format: OutputFormat, mut writer: W) -> Result<usize>
where
    D: Dimensioned,
    W: Write,
{
    let mut written = 0;

    match format {
        OutputFormat::JsonLines => {
            for dim in shape.dimensions() {
                serde_json::to_writer(&mut writer, &dim)?;
                writer.write_all(b"\n")?;
                written += 1;
            }
        }
        OutputFormat::Json => {
            let dims: Vec<Dimension> = shape.dimensions().collect();
            written = dims.len();
            serde_json::to_writer(&mut writer, &dims)?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Text => {
            for dim in shape.dimensions() {
                writeln!(writer, "{}", dim)?;
                written += 1;
            }
        }
    }

    writer.flush()?;
    tracing::debug!("Rendered {} dimensions as {:?}", written, format);
    Ok(written)
}

pub fn render_to_string<D: Dimensioned>(shape: &D, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    render(shape, format, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ShapeError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
