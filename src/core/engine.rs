use crate::core::{ConversionOutcome, Pipeline};
use crate::utils::error::Result;

/// Runs resolve, validate and convert in order, stopping at the first error.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionOutcome> {
        let plan = self.pipeline.resolve()?;
        tracing::info!("Converting {}", plan.input_path().display());

        self.pipeline.validate(&plan)?;
        if plan.overwrite && plan.output_path().exists() {
            tracing::info!("Replacing existing {}", plan.output_path().display());
        }

        let outcome = self.pipeline.convert(&plan)?;
        tracing::info!(
            "Wrote {}x{} grayscale image to {}",
            outcome.width,
            outcome.height,
            outcome.output_path.display()
        );

        Ok(outcome)
    }
}
