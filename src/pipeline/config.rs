use crate::error::{GbvError, Result};

/// Fixed provenance comment placed at the top of both generated modules.
/// Names the regeneration command so tooling and humans can tell the files
/// are machine-written.
pub const GENERATED_HEADER: &str = "Generated by gbv. Do not edit; changes are overwritten.\n\n\
Regenerate with `gbv generate` after refreshing the dependency updates report.";

pub const DEFAULT_VERSIONS_OBJECT: &str = "Versions";
pub const DEFAULT_LIBS_OBJECT: &str = "Libs";

/// Generation settings, owned by the caller and passed into the pipeline.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the generated versions object.
    pub versions_object: String,
    /// Name of the generated libs object.
    pub libs_object: String,
    /// Extra short names that always take the group-qualified form, on top
    /// of the built-in generic names.
    pub qualify_always: Vec<String>,
    /// Provenance comment body for both modules.
    pub header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            versions_object: DEFAULT_VERSIONS_OBJECT.to_string(),
            libs_object: DEFAULT_LIBS_OBJECT.to_string(),
            qualify_always: Vec::new(),
            header: GENERATED_HEADER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Both object names must be legal Kotlin identifiers and distinct.
    pub fn validate(&self) -> Result<()> {
        for name in [&self.versions_object, &self.libs_object] {
            if !is_valid_object_name(name) {
                return Err(GbvError::CodeGeneration(format!(
                    "'{name}' is not a valid object name"
                )));
            }
        }

        if self.versions_object == self.libs_object {
            return Err(GbvError::CodeGeneration(
                "The versions and libs objects must have distinct names".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_valid_object_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
