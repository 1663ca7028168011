pub mod diagram;

pub use crate::domain::model::{DiagramResult, SaturationEstimate};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
