use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input path is not a file: {}", path.display())]
    InputNotAFile { path: PathBuf },

    #[error("Output file already exists: {}", path.display())]
    OutputAlreadyExists { path: PathBuf },

    #[error("Output path is the input file itself: {}", path.display())]
    OutputIsInput { path: PathBuf },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },
}

impl ConvertError {
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            ConvertError::OutputAlreadyExists { .. } => {
                Some("Re-run with --overwrite to replace it, or change --suffix.")
            }
            ConvertError::OutputIsInput { .. } => {
                Some("Pass a non-empty --suffix so the original is kept.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ConvertError::InputNotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(err.to_string(), "Input file not found: missing.png");

        let err = ConvertError::OutputAlreadyExists {
            path: PathBuf::from("photo_BW.jpg"),
        };
        assert_eq!(err.to_string(), "Output file already exists: photo_BW.jpg");
        assert!(err.recovery_suggestion().unwrap().contains("--overwrite"));
    }

    #[test]
    fn test_not_found_has_no_suggestion() {
        let err = ConvertError::InputNotAFile {
            path: PathBuf::from("dir"),
        };
        assert!(err.recovery_suggestion().is_none());
    }
}
