use serde::Deserialize;

/// Parsed dependency updates report.
///
/// The three buckets may overlap in membership; processing flattens them into
/// one sequence and treats that as a flat multiset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub current: Vec<Dependency>,
    #[serde(default)]
    pub outdated: Vec<Dependency>,
    #[serde(default)]
    pub exceeded: Vec<Dependency>,
    #[serde(default)]
    pub gradle: GradleChannels,
}

impl DependencyGraph {
    /// Flatten the buckets into one sequence, preserving report order:
    /// current, then outdated, then exceeded.
    pub fn flatten(&self) -> Vec<&Dependency> {
        self.current
            .iter()
            .chain(self.outdated.iter())
            .chain(self.exceeded.iter())
            .collect()
    }

    pub fn dependency_count(&self) -> usize {
        self.current.len() + self.outdated.len() + self.exceeded.len()
    }
}

/// One dependency entry from the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub group: String,
    pub name: String,
    /// Version currently pinned in the build.
    pub version: String,
    /// Set when the pinned version exceeds the newest one the scanner found.
    #[serde(default)]
    pub latest: Option<String>,
    /// Free-text rejection reason from a resolution policy, possibly multi-line.
    #[serde(default)]
    pub reason: Option<String>,
    /// Newer version available per release channel, when the entry is outdated.
    #[serde(default)]
    pub available: Option<AvailableDependency>,
    #[serde(default)]
    pub project_url: Option<String>,
}

impl Dependency {
    /// Maven coordinate without the version part, `group:name`.
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

/// Available upgrade versions, at most one channel meaningful at a time
/// (not enforced).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AvailableDependency {
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub milestone: Option<String>,
    #[serde(default)]
    pub integration: Option<String>,
}

/// Gradle's own version channels as reported by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleChannels {
    #[serde(default)]
    pub running: GradleChannel,
    #[serde(default)]
    pub current: GradleChannel,
    #[serde(default)]
    pub nightly: GradleChannel,
    #[serde(default)]
    pub release_candidate: GradleChannel,
}

/// Version string holder for a single Gradle release channel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GradleChannel {
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, name: &str, version: &str) -> Dependency {
        Dependency {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            latest: None,
            reason: None,
            available: None,
            project_url: None,
        }
    }

    #[test]
    fn flatten_preserves_bucket_order() {
        let graph = DependencyGraph {
            current: vec![dep("a", "one", "1.0")],
            outdated: vec![dep("b", "two", "2.0")],
            exceeded: vec![dep("c", "three", "3.0")],
            gradle: GradleChannels::default(),
        };

        let names: Vec<&str> = graph.flatten().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(graph.dependency_count(), 3);
    }

    #[test]
    fn coordinate_joins_group_and_name() {
        let d = dep("com.squareup.okhttp3", "okhttp", "3.12.0");
        assert_eq!(d.coordinate(), "com.squareup.okhttp3:okhttp");
    }
}
