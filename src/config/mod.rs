use crate::core::paths::DEFAULT_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name_fragment, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rgb2bw")]
#[command(
    about = "Convert an RGB image to black & white (grayscale) and save alongside the original"
)]
pub struct CliConfig {
    /// Path to the input image (e.g. ~/images/photo.jpg)
    pub image_path: String,

    #[arg(long, default_value = DEFAULT_SUFFIX, allow_hyphen_values = true)]
    /// Suffix to append to the output filename
    pub suffix: String,

    #[arg(long, help = "Overwrite output file if it already exists")]
    pub overwrite: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn image_path(&self) -> &str {
        &self.image_path
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn overwrite(&self) -> bool {
        self.overwrite
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("image_path", &self.image_path)?;
        validate_file_name_fragment("suffix", &self.suffix)?;
        Ok(())
    }
}
