#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::core::{converter::LumaConverter, engine::ConvertEngine, pipeline::GrayscalePipeline};
pub use domain::model::{ConversionOutcome, ConversionPlan};
pub use utils::error::{ConvertError, Result};
