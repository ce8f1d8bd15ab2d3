use crate::domain::model::{ConversionOutcome, ConversionPlan};
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn image_path(&self) -> &str;
    fn suffix(&self) -> &str;
    fn overwrite(&self) -> bool;
}

/// Decodes `input`, reduces it to luminance and writes it to `output`.
pub trait Converter {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionOutcome>;
}

pub trait Pipeline {
    fn resolve(&self) -> Result<ConversionPlan>;
    fn validate(&self, plan: &ConversionPlan) -> Result<()>;
    fn convert(&self, plan: &ConversionPlan) -> Result<ConversionOutcome>;
}
