use crate::utils::error::{Result, ShapeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a whole-number dimension. Zero and negative values pass; only
/// malformed input is rejected.
pub fn parse_dimension(field_name: &str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ShapeError::invalid_argument(
            field_name,
            raw,
            "Value cannot be empty or whitespace-only",
        ));
    }

    trimmed.parse::<i64>().map_err(|e| {
        use std::num::IntErrorKind;
        let reason = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                format!("Value must be between {} and {}", i64::MIN, i64::MAX)
            }
            _ => "Value must be a whole number".to_string(),
        };
        ShapeError::invalid_argument(field_name, raw, reason)
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShapeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShapeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<T: Copy>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ShapeError::MissingConfig {
        field: field_name.to_string(),
    })
}
