pub mod version;

pub use version::VersionDelta;
