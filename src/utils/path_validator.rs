use crate::error::{GbvError, Result};
use std::path::{Path, PathBuf};

const SYSTEM_DIRECTORIES: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

/// Safe path validation helpers. Generation and Git staging both write to
/// paths derived from user input, so every such path is canonicalised and
/// fenced in before use.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalise a project directory and refuse system locations.
    pub fn validate_project_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            GbvError::ProjectValidation(format!("Invalid path '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(GbvError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                canonical.display()
            )));
        }

        for forbidden in SYSTEM_DIRECTORIES {
            let forbidden_path = Path::new(forbidden);
            let resolved_forbidden = forbidden_path.canonicalize().ok();

            let inside = path.starts_with(forbidden_path)
                || canonical.starts_with(forbidden_path)
                || resolved_forbidden
                    .as_deref()
                    .is_some_and(|f| canonical.starts_with(f));

            if inside {
                return Err(GbvError::ProjectValidation(format!(
                    "Access to system directory '{forbidden}' is not allowed"
                )));
            }
        }

        Ok(canonical)
    }

    /// Canonicalise a path and ensure it stays inside the base directory.
    pub fn validate_file_path(
        file_path: impl AsRef<Path>,
        base_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let file_path = file_path.as_ref();
        let base_dir = base_dir.as_ref();

        let canonical_file = file_path.canonicalize().map_err(|e| {
            GbvError::ProjectValidation(format!("Invalid file path '{}': {e}", file_path.display()))
        })?;

        let canonical_base = base_dir.canonicalize().map_err(|e| {
            GbvError::ProjectValidation(format!(
                "Invalid base directory '{}': {e}",
                base_dir.display()
            ))
        })?;

        if !canonical_file.starts_with(&canonical_base) {
            return Err(GbvError::ProjectValidation(
                "File path is outside the allowed directory".to_string(),
            ));
        }

        Ok(canonical_file)
    }
}
