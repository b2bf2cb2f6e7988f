use crate::error::{GbvError, Result};
use crate::kotlin;
use crate::pipeline::GeneratedModules;
use crate::utils::path_validator::PathValidator;
use std::fs;
use std::path::{Path, PathBuf};

const BUILD_SRC_SCRIPT: &str = "buildSrc/build.gradle.kts";

const BUILD_SRC_SCAFFOLD: &str = "plugins {\n    `kotlin-dsl`\n}\n\nrepositories {\n    mavenCentral()\n}\n";

/// ModuleWriterAgent persists the generated modules under the project and
/// scaffolds the buildSrc build script when it is missing.
pub struct ModuleWriterAgent {
    project_path: PathBuf,
    output_path: PathBuf,
}

/// What one generation run touched on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReport {
    pub written: Vec<WrittenFile>,
    /// Set when buildSrc/build.gradle.kts was created by this run.
    pub scaffolded_build_script: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub changed: bool,
}

impl WriteReport {
    pub fn any_changed(&self) -> bool {
        self.scaffolded_build_script.is_some() || self.written.iter().any(|file| file.changed)
    }

    /// Paths to stage in Git, relative to the project root.
    pub fn changed_paths(&self) -> Vec<&Path> {
        self.scaffolded_build_script
            .iter()
            .map(PathBuf::as_path)
            .chain(
                self.written
                    .iter()
                    .filter(|file| file.changed)
                    .map(|file| file.path.as_path()),
            )
            .collect()
    }
}

impl ModuleWriterAgent {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(project_path: P, output_path: Q) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Render both modules and write them under the output directory.
    ///
    /// Files are compared byte-for-byte before writing, so an unchanged
    /// module is reported but not rewritten.
    pub fn write(&self, modules: &GeneratedModules) -> Result<WriteReport> {
        fs::create_dir_all(&self.output_path)?;
        let output_dir = PathValidator::validate_file_path(&self.output_path, &self.project_path)
            .map_err(|err| {
            GbvError::CodeGeneration(format!(
                "Output directory escapes the project directory: {err}"
            ))
        })?;

        let mut written = Vec::with_capacity(2);
        for module in [&modules.versions, &modules.libs] {
            let path = output_dir.join(kotlin::module_file_name(module));
            let source = kotlin::render_module(module);
            let changed = fs::read(&path).ok().as_deref() != Some(source.as_bytes());

            if changed {
                fs::write(&path, &source)?;
            }
            if std::env::var("GBV_VERBOSE").is_ok() {
                let state = if changed { "written" } else { "unchanged" };
                println!("   [writer] {} ({state})", path.display());
            }
            written.push(WrittenFile { path, changed });
        }

        Ok(WriteReport {
            written,
            scaffolded_build_script: self.scaffold_build_script()?,
        })
    }

    /// Create buildSrc/build.gradle.kts with a kotlin-dsl block when absent,
    /// so a fresh project compiles the generated objects out of the box.
    fn scaffold_build_script(&self) -> Result<Option<PathBuf>> {
        let script_path = self.project_path.join(BUILD_SRC_SCRIPT);
        if script_path.exists() {
            return Ok(None);
        }

        if let Some(parent) = script_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&script_path, BUILD_SRC_SCAFFOLD)?;
        Ok(Some(script_path))
    }
}
