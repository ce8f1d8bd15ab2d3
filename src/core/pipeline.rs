use crate::core::paths::{derive_output_path, expand_path};
use crate::core::validator::validate_conversion;
use crate::core::{ConfigProvider, ConversionOutcome, ConversionPlan, Converter, Pipeline};
use crate::domain::model::{InputSpec, OutputSpec};
use crate::utils::error::Result;
use std::path::Path;

pub struct GrayscalePipeline<C: ConfigProvider, V: Converter> {
    config: C,
    converter: V,
}

impl<C: ConfigProvider, V: Converter> GrayscalePipeline<C, V> {
    pub fn new(config: C, converter: V) -> Self {
        Self { config, converter }
    }
}

impl<C: ConfigProvider, V: Converter> Pipeline for GrayscalePipeline<C, V> {
    fn resolve(&self) -> Result<ConversionPlan> {
        let input = expand_path(Path::new(self.config.image_path()));
        let output = derive_output_path(&input, self.config.suffix());
        tracing::debug!("Resolved {} -> {}", input.display(), output.display());

        Ok(ConversionPlan {
            input: InputSpec { path: input },
            output: OutputSpec { path: output },
            overwrite: self.config.overwrite(),
        })
    }

    fn validate(&self, plan: &ConversionPlan) -> Result<()> {
        validate_conversion(plan.input_path(), plan.output_path(), plan.overwrite)
    }

    fn convert(&self, plan: &ConversionPlan) -> Result<ConversionOutcome> {
        self.converter
            .convert(plan.input_path(), plan.output_path())
    }
}
