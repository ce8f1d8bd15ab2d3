pub mod converter;
pub mod engine;
pub mod paths;
pub mod pipeline;
pub mod validator;

pub use crate::domain::model::{ConversionOutcome, ConversionPlan};
pub use crate::domain::ports::{ConfigProvider, Converter, Pipeline};
pub use crate::utils::error::Result;
