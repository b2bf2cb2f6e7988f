use crate::report::Dependency;
use std::collections::{HashMap, HashSet};

/// Short names too generic to stand alone as constant names. Dependencies
/// whose escaped name matches one of these always get the group-qualified
/// form.
pub const GENERIC_NAMES: &[&str] = &[
    "core",
    "common",
    "runtime",
    "testing",
    "io",
    "db",
    "compiler",
    "loader",
    "media",
    "print",
    "collection",
    "extensions",
    "migration",
    "rules",
    "runner",
    "monitor",
    "core-testing",
];

/// A dependency paired with the unique constant name it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependency {
    pub dependency: Dependency,
    pub name: String,
}

#[derive(Clone, Copy, PartialEq)]
enum NameForm {
    Short,
    Qualified,
}

/// Lowercase `raw` and replace each `-`, `.`, `:` with `_`. All other
/// characters pass through unchanged.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '-' | '.' | ':') {
            escaped.push('_');
        } else {
            escaped.extend(c.to_lowercase());
        }
    }
    escaped
}

/// The set of short keys that must always take the qualified form: the
/// built-in generic names plus caller-supplied ones, in escaped form.
pub fn force_qualified_set(extra: &[String]) -> HashSet<String> {
    GENERIC_NAMES
        .iter()
        .map(|name| escape(name))
        .chain(extra.iter().map(|name| escape(name)))
        .collect()
}

/// Assign one code-safe constant name to every dependency.
///
/// Names default to the escaped artifact name. A name on the forced list, or
/// one already claimed by an earlier dependency, switches to the escaped
/// `group_name` form; on a claim collision the earlier claimant is
/// retroactively switched as well. The result is deduplicated by final name
/// (first occurrence wins) and sorted alphabetically.
///
/// Qualified forms are not re-checked against already-claimed names, so two
/// entries can still end up with the same name; deduplication then silently
/// drops the later one.
pub fn resolve_names(
    dependencies: &[&Dependency],
    force_qualified: &HashSet<String>,
) -> Vec<ResolvedDependency> {
    let mut forms = vec![NameForm::Short; dependencies.len()];
    let mut claims: HashMap<String, usize> = HashMap::new();

    for (index, dependency) in dependencies.iter().enumerate() {
        let short_key = escape(&dependency.name);

        if force_qualified.contains(&short_key) {
            forms[index] = NameForm::Qualified;
            continue;
        }

        match claims.get(&short_key) {
            Some(&claimant) => {
                forms[index] = NameForm::Qualified;
                forms[claimant] = NameForm::Qualified;
            }
            None => {
                claims.insert(short_key, index);
            }
        }
    }

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(dependencies.len());
    for (index, dependency) in dependencies.iter().enumerate() {
        let name = match forms[index] {
            NameForm::Short => escape(&dependency.name),
            NameForm::Qualified => qualified_name(dependency),
        };

        if seen.insert(name.clone()) {
            resolved.push(ResolvedDependency {
                dependency: (*dependency).clone(),
                name,
            });
        }
    }

    resolved.sort_by(|a, b| a.name.cmp(&b.name));
    resolved
}

fn qualified_name(dependency: &Dependency) -> String {
    escape(&format!("{}_{}", dependency.group, dependency.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, name: &str) -> Dependency {
        Dependency {
            group: group.to_string(),
            name: name.to_string(),
            version: "1.0".to_string(),
            latest: None,
            reason: None,
            available: None,
            project_url: None,
        }
    }

    fn resolve(dependencies: &[Dependency]) -> Vec<ResolvedDependency> {
        let refs: Vec<&Dependency> = dependencies.iter().collect();
        resolve_names(&refs, &force_qualified_set(&[]))
    }

    fn names(resolved: &[ResolvedDependency]) -> Vec<&str> {
        resolved.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn escape_lowercases_and_replaces_separators() {
        assert_eq!(escape("okhttp"), "okhttp");
        assert_eq!(escape("lifecycle-runtime-ktx"), "lifecycle_runtime_ktx");
        assert_eq!(escape("com.squareup.okhttp3"), "com_squareup_okhttp3");
        assert_eq!(escape("Guava.Core-X"), "guava_core_x");
        assert_eq!(escape("a:b"), "a_b");
    }

    #[test]
    fn unique_names_stay_short() {
        let resolved = resolve(&[dep("com.squareup.okhttp3", "okhttp")]);
        assert_eq!(names(&resolved), vec!["okhttp"]);
    }

    #[test]
    fn generic_names_are_qualified() {
        let resolved = resolve(&[dep("org.example", "core")]);
        assert_eq!(names(&resolved), vec!["org_example_core"]);
    }

    #[test]
    fn generic_names_match_in_escaped_form() {
        let resolved = resolve(&[dep("androidx.arch.core", "core-testing")]);
        assert_eq!(names(&resolved), vec!["androidx_arch_core_core_testing"]);
    }

    #[test]
    fn caller_supplied_names_are_qualified() {
        let deps = [dep("com.squareup.okhttp3", "okhttp")];
        let refs: Vec<&Dependency> = deps.iter().collect();
        let forced = force_qualified_set(&["okhttp".to_string()]);
        let resolved = resolve_names(&refs, &forced);
        assert_eq!(names(&resolved), vec!["com_squareup_okhttp3_okhttp"]);
    }

    #[test]
    fn collision_qualifies_both_claimants() {
        let resolved = resolve(&[dep("a", "lib"), dep("b", "lib")]);
        assert_eq!(names(&resolved), vec!["a_lib", "b_lib"]);
    }

    #[test]
    fn collision_reassignment_leaves_other_names_alone() {
        let resolved = resolve(&[dep("a", "lib"), dep("c", "other"), dep("b", "lib")]);
        assert_eq!(names(&resolved), vec!["a_lib", "b_lib", "other"]);
    }

    #[test]
    fn identical_coordinates_collapse_to_one_entry() {
        // The same group:name listed in two buckets collides with itself,
        // both occurrences qualify to the same name, and deduplication keeps
        // the first.
        let resolved = resolve(&[dep("a", "lib"), dep("a", "lib")]);
        assert_eq!(names(&resolved), vec!["a_lib"]);
    }

    #[test]
    fn qualified_collision_is_not_rechecked() {
        // `a:lib` is retroactively qualified to `a_lib`, which lands on the
        // name `x:a-lib` already claimed. The qualified form is not checked
        // for collisions, so deduplication drops the `x:a-lib` entry.
        let resolved = resolve(&[dep("a", "lib"), dep("x", "a-lib"), dep("b", "lib")]);
        assert_eq!(names(&resolved), vec!["a_lib", "b_lib"]);
        assert_eq!(resolved[0].dependency.group, "a");
    }

    #[test]
    fn output_is_sorted_alphabetically() {
        let resolved = resolve(&[
            dep("g", "zebra"),
            dep("g", "alpha"),
            dep("g", "middle-ware"),
        ]);
        assert_eq!(names(&resolved), vec!["alpha", "middle_ware", "zebra"]);
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        assert!(resolve(&[]).is_empty());
    }
}
