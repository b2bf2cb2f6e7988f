use crate::error::{GbvError, Result};
use std::path::{Path, PathBuf};

/// Default report location, relative to the project root. This is where the
/// dependency updates task writes its JSON output.
pub const DEFAULT_REPORT_PATH: &str = "build/dependencyUpdates/report.json";

/// Default output directory for the generated Kotlin modules.
pub const DEFAULT_OUTPUT_PATH: &str = "buildSrc/src/main/kotlin";

const GRADLE_MARKERS: &[&str] = &[
    "settings.gradle",
    "settings.gradle.kts",
    "build.gradle",
    "build.gradle.kts",
];

/// ProjectScannerAgent validates the project structure and locates the
/// report and output paths.
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Validates that the path is a Gradle project with a readable report.
    pub fn validate(&self, report_override: Option<&Path>) -> Result<ProjectInfo> {
        if !self.is_gradle_project() {
            return Err(GbvError::ProjectValidation(format!(
                "No Gradle build script found in '{}' (expected one of: {})",
                self.project_path.display(),
                GRADLE_MARKERS.join(", ")
            )));
        }

        let report_path = match report_override {
            Some(path) => path.to_path_buf(),
            None => self.project_path.join(DEFAULT_REPORT_PATH),
        };

        if !report_path.is_file() {
            return Err(GbvError::ProjectValidation(format!(
                "Dependency report '{}' not found. Run the dependency updates task first \
                 (e.g. ./gradlew dependencyUpdates -DoutputFormatter=json)",
                report_path.display()
            )));
        }

        if std::env::var("GBV_VERBOSE").is_ok() {
            println!("   [scanner] report: {}", report_path.display());
        }

        let git_dir = self.project_path.join(".git");

        Ok(ProjectInfo {
            project_path: self.project_path.clone(),
            report_path,
            output_path: self.project_path.join(DEFAULT_OUTPUT_PATH),
            has_git: git_dir.is_dir(),
        })
    }

    fn is_gradle_project(&self) -> bool {
        GRADLE_MARKERS
            .iter()
            .any(|marker| self.project_path.join(marker).is_file())
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_path: PathBuf,
    pub report_path: PathBuf,
    /// Default output directory; `--out` overrides it downstream.
    pub output_path: PathBuf,
    pub has_git: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn gradle_project_with_report() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.gradle.kts"), "rootProject.name = \"app\"").unwrap();
        let report_dir = dir.path().join("build/dependencyUpdates");
        fs::create_dir_all(&report_dir).unwrap();
        fs::write(report_dir.join("report.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn accepts_a_gradle_project_with_a_report() {
        let dir = gradle_project_with_report();
        let info = ProjectScannerAgent::new(dir.path()).validate(None).unwrap();

        assert_eq!(
            info.report_path,
            dir.path().join("build/dependencyUpdates/report.json")
        );
        assert_eq!(info.output_path, dir.path().join(DEFAULT_OUTPUT_PATH));
        assert!(!info.has_git);
    }

    #[test]
    fn rejects_a_directory_without_gradle_files() {
        let dir = tempdir().unwrap();
        let err = ProjectScannerAgent::new(dir.path()).validate(None).unwrap_err();
        assert!(matches!(err, GbvError::ProjectValidation(_)));
    }

    #[test]
    fn rejects_a_missing_report() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("build.gradle"), "").unwrap();

        let err = ProjectScannerAgent::new(dir.path()).validate(None).unwrap_err();
        match err {
            GbvError::ProjectValidation(message) => assert!(message.contains("dependencyUpdates")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn explicit_report_path_overrides_the_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("build.gradle.kts"), "").unwrap();
        let report = dir.path().join("custom-report.json");
        fs::write(&report, "{}").unwrap();

        let info = ProjectScannerAgent::new(dir.path())
            .validate(Some(report.as_path()))
            .unwrap();
        assert_eq!(info.report_path, report);
    }

    #[test]
    fn detects_a_git_repository() {
        let dir = gradle_project_with_report();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let info = ProjectScannerAgent::new(dir.path()).validate(None).unwrap();
        assert!(info.has_git);
    }
}
