pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ShapeSettings};
pub use core::dimensions::Dimensions;
pub use core::render::{render, render_to_string, OutputFormat};
pub use domain::model::{Dimension, DimensionKind, Rectangle};
pub use domain::ports::Dimensioned;
pub use utils::error::{Result, ShapeError};
