use crate::pipeline::config::GeneratorConfig;
use crate::pipeline::naming::ResolvedDependency;
use crate::pipeline::status;
use crate::report::{Dependency, GradleChannels};
use url::Url;

const GRADLE_OBJECT_DOC: &str =
    "Gradle release channels reported by the dependency updates scanner.";

/// Description of one generated Kotlin module: a top-level object holding
/// immutable string constants. Rendering to source text lives in
/// `crate::kotlin`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModule {
    pub name: String,
    /// Provenance comment emitted at the top of the file.
    pub header: String,
    pub constants: Vec<Constant>,
    pub nested: Option<NestedObject>,
}

/// One generated constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub value: ConstantValue,
    /// Rendered as `//` comment lines directly above the constant.
    pub comment: Option<String>,
    /// Rendered as a KDoc block directly above the constant.
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// A plain string literal.
    Literal(String),
    /// A string literal concatenated with a reference to another constant:
    /// `"{prefix}" + {reference}`.
    Concat { prefix: String, reference: String },
}

/// A nested object grouping constants inside a module.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedObject {
    pub name: String,
    pub doc: Option<String>,
    pub constants: Vec<Constant>,
}

/// Build the versions module: one constant per dependency valued with the
/// pinned version and annotated with its update status, plus the nested
/// `Gradle` object carrying the four channel versions.
pub fn versions_module(
    resolved: &[ResolvedDependency],
    gradle: &GradleChannels,
    config: &GeneratorConfig,
) -> GeneratedModule {
    let constants = resolved
        .iter()
        .map(|entry| Constant {
            name: entry.name.clone(),
            value: ConstantValue::Literal(entry.dependency.version.clone()),
            comment: Some(status::annotate(&entry.dependency)),
            doc: None,
        })
        .collect();

    GeneratedModule {
        name: config.versions_object.clone(),
        header: config.header.clone(),
        constants,
        nested: Some(gradle_object(gradle)),
    }
}

/// Build the libs module: one constant per dependency valued with the
/// coordinate prefix concatenated onto the matching versions constant, so
/// regenerating versions alone is enough to move a library.
pub fn libs_module(resolved: &[ResolvedDependency], config: &GeneratorConfig) -> GeneratedModule {
    let constants = resolved
        .iter()
        .map(|entry| {
            let dependency = &entry.dependency;
            Constant {
                name: entry.name.clone(),
                value: ConstantValue::Concat {
                    prefix: format!("{}:{}:", dependency.group, dependency.name),
                    reference: format!("{}.{}", config.versions_object, entry.name),
                },
                comment: None,
                doc: documentation_url(dependency),
            }
        })
        .collect();

    GeneratedModule {
        name: config.libs_object.clone(),
        header: config.header.clone(),
        constants,
        nested: None,
    }
}

fn gradle_object(gradle: &GradleChannels) -> NestedObject {
    let channel = |name: &str, version: &str| Constant {
        name: name.to_string(),
        value: ConstantValue::Literal(version.to_string()),
        comment: None,
        doc: None,
    };

    NestedObject {
        name: "Gradle".to_string(),
        doc: Some(GRADLE_OBJECT_DOC.to_string()),
        constants: vec![
            channel("runningVersion", &gradle.running.version),
            channel("currentVersion", &gradle.current.version),
            channel("nightlyVersion", &gradle.nightly.version),
            channel("releaseCandidate", &gradle.release_candidate.version),
        ],
    }
}

/// A project URL is only worth linking when it parses and uses http(s).
fn documentation_url(dependency: &Dependency) -> Option<String> {
    let raw = dependency.project_url.as_deref()?.trim();
    let parsed = Url::parse(raw).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(raw.to_string()),
        _ => None,
    }
}
