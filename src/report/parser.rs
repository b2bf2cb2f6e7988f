use crate::error::{GbvError, Result};
use crate::report::model::DependencyGraph;
use std::fs;
use std::path::Path;

/// ReportParser turns the dependency updates JSON report into a
/// `DependencyGraph`.
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a report file.
    pub fn read_report<P: AsRef<Path>>(&self, path: P) -> Result<DependencyGraph> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GbvError::MalformedReport(format!("Failed to read '{}': {e}", path.display()))
        })?;

        self.parse(&content)
    }

    /// Parse a report payload.
    ///
    /// Fails when the payload is not well-formed JSON or a dependency entry
    /// is missing `group`, `name` or `version`. Unknown fields are ignored.
    pub fn parse(&self, payload: &str) -> Result<DependencyGraph> {
        let graph: DependencyGraph = serde_json::from_str(payload)
            .map_err(|e| GbvError::MalformedReport(format!("Failed to parse report: {e}")))?;

        for dependency in graph.flatten() {
            if dependency.group.trim().is_empty() || dependency.name.trim().is_empty() {
                return Err(GbvError::MalformedReport(format!(
                    "Dependency entry '{}' has an empty group or name",
                    dependency.coordinate()
                )));
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_buckets_and_optional_fields() {
        let payload = r#"{
            "current": [
                {
                    "group": "com.squareup.okhttp3",
                    "name": "okhttp",
                    "version": "3.12.0",
                    "projectUrl": "https://square.github.io/okhttp/"
                }
            ],
            "outdated": [
                {
                    "group": "org.jetbrains.kotlin",
                    "name": "kotlin-stdlib",
                    "version": "1.9.0",
                    "available": { "release": "2.0.0", "milestone": null, "integration": null }
                }
            ],
            "exceeded": [
                {
                    "group": "com.example",
                    "name": "widget",
                    "version": "9.9",
                    "latest": "2.0"
                }
            ],
            "gradle": {
                "running": { "version": "8.7" },
                "current": { "version": "8.9" },
                "nightly": { "version": "8.11-nightly" },
                "releaseCandidate": { "version": "" }
            }
        }"#;

        let graph = ReportParser::new().parse(payload).unwrap();
        assert_eq!(graph.dependency_count(), 3);
        assert_eq!(
            graph.current[0].project_url.as_deref(),
            Some("https://square.github.io/okhttp/")
        );
        assert_eq!(
            graph.outdated[0]
                .available
                .as_ref()
                .unwrap()
                .release
                .as_deref(),
            Some("2.0.0")
        );
        assert_eq!(graph.exceeded[0].latest.as_deref(), Some("2.0"));
        assert_eq!(graph.gradle.running.version, "8.7");
        assert_eq!(graph.gradle.release_candidate.version, "");
    }

    #[test]
    fn missing_buckets_default_to_empty() {
        let graph = ReportParser::new().parse("{}").unwrap();
        assert_eq!(graph.dependency_count(), 0);
        assert_eq!(graph.gradle.nightly.version, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = r#"{
            "count": 1,
            "unresolved": [],
            "current": [
                { "group": "g", "name": "n", "version": "1.0", "userReason": null }
            ]
        }"#;
        let graph = ReportParser::new().parse(payload).unwrap();
        assert_eq!(graph.current.len(), 1);
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let payload = r#"{ "current": [ { "group": "g", "name": "n" } ] }"#;
        let err = ReportParser::new().parse(payload).unwrap_err();
        match err {
            GbvError::MalformedReport(message) => assert!(message.contains("version")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = ReportParser::new().parse("not json").unwrap_err();
        assert!(matches!(err, GbvError::MalformedReport(_)));
    }

    #[test]
    fn bucket_must_be_a_list() {
        let payload = r#"{ "current": { "dependencies": [] } }"#;
        let err = ReportParser::new().parse(payload).unwrap_err();
        assert!(matches!(err, GbvError::MalformedReport(_)));
    }

    #[test]
    fn empty_group_is_malformed() {
        let payload = r#"{ "current": [ { "group": " ", "name": "n", "version": "1.0" } ] }"#;
        let err = ReportParser::new().parse(payload).unwrap_err();
        assert!(matches!(err, GbvError::MalformedReport(_)));
    }

    #[test]
    fn reads_report_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, r#"{ "current": [] }"#).unwrap();

        let graph = ReportParser::new().read_report(&path).unwrap();
        assert_eq!(graph.dependency_count(), 0);

        let missing = ReportParser::new().read_report(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(GbvError::MalformedReport(_))));
    }
}
