pub mod config;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod math;
pub mod operations;

pub use config::{EmptyProbes, TerminalTangent, WidthConfig};
pub use error::{Result, RoadWidthError};
