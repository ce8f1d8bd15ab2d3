use crate::domain::model::ConversionOutcome;
use crate::domain::ports::Converter;
use crate::utils::error::{ConvertError, Result};
use image::{ImageFormat, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Converts through the `image` crate: decode, `to_luma8`, encode in the
/// format named by the output extension.
///
/// The encoded bytes go to a temp file next to the output which is renamed
/// into place once complete, so a failed encode never leaves a partial file
/// at the output path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LumaConverter;

impl Converter for LumaConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionOutcome> {
        let decoded = ImageReader::open(input)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| ConvertError::Decode {
                path: input.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            input.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        let format = ImageFormat::from_path(output).map_err(|source| ConvertError::Encode {
            path: output.to_path_buf(),
            source,
        })?;

        let luma = decoded.to_luma8();
        let (width, height) = luma.dimensions();

        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut builder = tempfile::Builder::new();
        builder.prefix(".rgb2bw-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut staged = builder.tempfile_in(dir)?;

        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            luma.write_to(&mut writer, format)
                .map_err(|source| ConvertError::Encode {
                    path: output.to_path_buf(),
                    source,
                })?;
            writer.flush()?;
        }

        staged.persist(output).map_err(|e| ConvertError::Io(e.error))?;
        tracing::debug!("Wrote {:?} luminance image to {}", format, output.display());

        Ok(ConversionOutcome {
            output_path: output.to_path_buf(),
            width,
            height,
        })
    }
}
