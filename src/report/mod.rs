pub mod model;
pub mod parser;

pub use model::{AvailableDependency, Dependency, DependencyGraph, GradleChannel, GradleChannels};
pub use parser::ReportParser;
