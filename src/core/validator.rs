use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Read-only checks run before anything is written.
pub fn validate_conversion(input: &Path, output: &Path, overwrite: bool) -> Result<()> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !input.is_file() {
        return Err(ConvertError::InputNotAFile {
            path: input.to_path_buf(),
        });
    }

    if output.exists() {
        if !overwrite {
            return Err(ConvertError::OutputAlreadyExists {
                path: output.to_path_buf(),
            });
        }
        if fs::canonicalize(input)? == fs::canonicalize(output)? {
            return Err(ConvertError::OutputIsInput {
                path: output.to_path_buf(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.png");
        let output = dir.path().join("missing_BW.png");

        let err = validate_conversion(&input, &output, false).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
    }

    #[test]
    fn test_directory_input() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out_BW");

        let err = validate_conversion(dir.path(), &output, true).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotAFile { .. }));
    }

    #[test]
    fn test_existing_output_requires_overwrite() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("photo.jpg");
        let output = dir.path().join("photo_BW.jpg");
        fs::write(&input, b"in").unwrap();
        fs::write(&output, b"out").unwrap();

        let err = validate_conversion(&input, &output, false).unwrap_err();
        assert!(matches!(err, ConvertError::OutputAlreadyExists { .. }));
        assert!(validate_conversion(&input, &output, true).is_ok());
    }

    #[test]
    fn test_fresh_output_passes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("photo.jpg");
        fs::write(&input, b"in").unwrap();

        assert!(validate_conversion(&input, &dir.path().join("photo_BW.jpg"), false).is_ok());
    }

    #[test]
    fn test_output_aliasing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("photo.jpg");
        fs::write(&input, b"in").unwrap();

        let err = validate_conversion(&input, &input, false).unwrap_err();
        assert!(matches!(err, ConvertError::OutputAlreadyExists { .. }));

        let err = validate_conversion(&input, &input, true).unwrap_err();
        assert!(matches!(err, ConvertError::OutputIsInput { .. }));
    }
}
