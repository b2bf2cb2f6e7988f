pub mod module_writer;
pub mod project_scanner;
pub mod version_control;

pub use module_writer::{ModuleWriterAgent, WriteReport};
pub use project_scanner::ProjectScannerAgent;
pub use version_control::VersionControlAgent;
