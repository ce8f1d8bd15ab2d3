use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A suffix becomes part of a file name, so it must not carry a directory
/// separator or a NUL byte.
pub fn validate_file_name_fragment(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(std::path::is_separator) {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: format!("'{}' must not contain a path separator", value),
        });
    }

    if value.contains('\0') {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("image_path", "photo.jpg").is_ok());
        assert!(validate_path("image_path", "").is_err());
        assert!(validate_path("image_path", "pho\0to.jpg").is_err());
    }

    #[test]
    fn test_validate_file_name_fragment() {
        assert!(validate_file_name_fragment("suffix", "_BW").is_ok());
        assert!(validate_file_name_fragment("suffix", "").is_ok());
        assert!(validate_file_name_fragment("suffix", "/../evil").is_err());
        assert!(validate_file_name_fragment("suffix", "a\0b").is_err());
    }
}
