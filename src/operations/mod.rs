pub mod measure;
pub mod probe;
pub mod report;
pub mod skeleton;

pub use measure::{MeasureWidth, WidthOutput};
pub use probe::{generate_probes, resolve, Probe, ProbeGenerator, ProbeResolver, WidthSample};
pub use report::{WidthProfile, WidthRange};
pub use skeleton::{ChordalAxis, Skeletonizer};
