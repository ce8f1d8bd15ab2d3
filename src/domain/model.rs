use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub path: PathBuf,
}

/// The resolved input/output pair for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub input: InputSpec,
    pub output: OutputSpec,
    pub overwrite: bool,
}

impl ConversionPlan {
    pub fn input_path(&self) -> &Path {
        &self.input.path
    }

    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}
