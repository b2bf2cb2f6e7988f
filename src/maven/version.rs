use colored::{ColoredString, Colorize};

/// Parsed artifact version. The updates report carries plain strings; this
/// understands enough structure to describe the jump between two of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    parsed: VersionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionKind {
    Semantic(semver::Version),
    Numeric(Vec<u64>),
    Unknown,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        let parsed = if let Ok(v) = semver::Version::parse(version) {
            VersionKind::Semantic(v)
        } else if let Some(numeric) = Self::parse_numeric(version) {
            VersionKind::Numeric(numeric)
        } else {
            VersionKind::Unknown
        };

        Version { parsed }
    }

    /// Strictly dotted-numeric forms like `1.4` or `30.1.1.2`. Anything with
    /// a qualifier (`1.4-jre`, `2021.0.0-M1`) falls through to `Unknown`.
    fn parse_numeric(version: &str) -> Option<Vec<u64>> {
        let mut numbers = Vec::new();
        for part in version.split('.') {
            numbers.push(part.parse::<u64>().ok()?);
        }

        if numbers.is_empty() {
            None
        } else {
            Some(numbers)
        }
    }

    fn triple(&self) -> Option<(u64, u64, u64)> {
        match &self.parsed {
            VersionKind::Semantic(v) => Some((v.major, v.minor, v.patch)),
            VersionKind::Numeric(parts) => Some((
                parts.first().copied().unwrap_or(0),
                parts.get(1).copied().unwrap_or(0),
                parts.get(2).copied().unwrap_or(0),
            )),
            VersionKind::Unknown => None,
        }
    }
}

/// Size of the jump between the pinned version and a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionDelta {
    Major,
    Minor,
    Patch,
    Other,
}

impl VersionDelta {
    pub fn between(current: &str, candidate: &str) -> Self {
        let current = Version::parse(current);
        let candidate = Version::parse(candidate);

        match (current.triple(), candidate.triple()) {
            (Some((c_major, c_minor, c_patch)), Some((n_major, n_minor, n_patch))) => {
                if n_major != c_major {
                    VersionDelta::Major
                } else if n_minor != c_minor {
                    VersionDelta::Minor
                } else if n_patch != c_patch {
                    VersionDelta::Patch
                } else {
                    VersionDelta::Other
                }
            }
            _ => VersionDelta::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VersionDelta::Major => "major",
            VersionDelta::Minor => "minor",
            VersionDelta::Patch => "patch",
            VersionDelta::Other => "changed",
        }
    }

    /// Label tinted by severity for console output.
    pub fn colored_label(&self) -> ColoredString {
        match self {
            VersionDelta::Major => self.label().red(),
            VersionDelta::Minor => self.label().yellow(),
            VersionDelta::Patch => self.label().green(),
            VersionDelta::Other => self.label().normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semantic_and_numeric_forms() {
        assert!(matches!(
            Version::parse("1.2.3").parsed,
            VersionKind::Semantic(_)
        ));
        assert!(matches!(
            Version::parse("1.4").parsed,
            VersionKind::Numeric(_)
        ));
        assert!(matches!(
            Version::parse("1.4-jre").parsed,
            VersionKind::Unknown
        ));
    }

    #[test]
    fn classifies_the_jump() {
        assert_eq!(VersionDelta::between("1.2.3", "2.0.0"), VersionDelta::Major);
        assert_eq!(VersionDelta::between("1.2.3", "1.3.0"), VersionDelta::Minor);
        assert_eq!(VersionDelta::between("1.2.3", "1.2.4"), VersionDelta::Patch);
    }

    #[test]
    fn two_component_versions_use_the_numeric_fallback() {
        assert_eq!(VersionDelta::between("1.4", "1.5"), VersionDelta::Minor);
        assert_eq!(VersionDelta::between("8", "9"), VersionDelta::Major);
    }

    #[test]
    fn unparseable_versions_fall_back_to_other() {
        assert_eq!(
            VersionDelta::between("1.0.0", "2021.0.0-M1-local"),
            VersionDelta::Other
        );
        assert_eq!(
            VersionDelta::between("Release-7", "Release-8"),
            VersionDelta::Other
        );
    }

    #[test]
    fn same_triple_with_different_text_is_other() {
        assert_eq!(
            VersionDelta::between("2.0.0-rc1", "2.0.0"),
            VersionDelta::Other
        );
    }

    #[test]
    fn labels_name_the_severity() {
        assert_eq!(VersionDelta::Major.label(), "major");
        assert_eq!(VersionDelta::Other.label(), "changed");
    }
}
