pub mod control;
pub mod handler;
pub mod step;

pub use control::{PipelineControl, PipelineResult};
pub use handler::Handler;
pub use step::{SkipCondition, StepDef};
