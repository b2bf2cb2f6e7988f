use crate::agents::{ModuleWriterAgent, ProjectScannerAgent, VersionControlAgent};
use crate::error::Result;
use crate::maven::VersionDelta;
use crate::pipeline::{status, GeneratorConfig, Pipeline, ResolvedDependency, StatusKind};
use crate::report::{Dependency, DependencyGraph, ReportParser};
use crate::utils::PatternMatcher;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options for the generate workflow, straight from the CLI.
pub struct GenerateOptions {
    pub report: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub versions_name: String,
    pub libs_name: String,
    pub fqdn: Vec<String>,
    pub no_git: bool,
}

/// Execute the generate workflow
pub fn execute_generate<P: AsRef<Path>>(project_path: P, options: GenerateOptions) -> Result<()> {
    let project_path = project_path.as_ref();
    println!(
        "{}",
        "Regenerating buildSrc version constants...".cyan().bold()
    );

    let config = GeneratorConfig {
        versions_object: options.versions_name,
        libs_object: options.libs_name,
        qualify_always: options.fqdn,
        ..GeneratorConfig::default()
    };
    config.validate()?;

    // Step 1: Validate project structure and locate the report
    println!("\n{}", "1. Validating project structure...".yellow());
    let scanner = ProjectScannerAgent::new(project_path);
    let project_info = scanner.validate(options.report.as_deref())?;
    println!("{}", "✓ Project structure is valid".green());

    // Step 2: Check Git status (if Git is available and not disabled)
    if project_info.has_git && !options.no_git {
        println!("\n{}", "2. Checking Git status...".yellow());
        // The Git agent insists on absolute paths, so resolve "." first.
        let git_agent = VersionControlAgent::new(std::fs::canonicalize(project_path)?)?;

        if !git_agent.is_working_directory_clean()? {
            println!(
                "{}",
                "⚠ Warning: Working directory has uncommitted changes".red()
            );
            println!("Please commit or stash your changes before proceeding.");
            return Ok(());
        }
        println!("{}", "✓ Working directory is clean".green());
    } else if !options.no_git {
        println!(
            "\n{}",
            "2. Git repository not detected, skipping Git checks".yellow()
        );
    }

    // Step 3: Parse the dependency updates report
    println!("\n{}", "3. Parsing the dependency updates report...".yellow());
    let graph = ReportParser::new().read_report(&project_info.report_path)?;
    println!(
        "{}",
        format!("✓ Report parsed ({} dependencies)", graph.dependency_count()).green()
    );

    // Step 4: Generate both modules
    println!("\n{}", "4. Generating modules...".yellow());
    let modules = Pipeline::new(&config).generate(&graph);
    if modules.is_empty() {
        println!(
            "{}",
            "⚠ Report contains no dependencies; generating Gradle channels only".yellow()
        );
    }
    println!(
        "{}",
        format!(
            "✓ {} and {} generated",
            modules.versions.name, modules.libs.name
        )
        .green()
    );

    // Step 5: Write the modules under buildSrc
    println!("\n{}", "5. Writing generated files...".yellow());
    let output_path = options
        .out
        .unwrap_or_else(|| project_info.output_path.clone());
    let writer = ModuleWriterAgent::new(project_path, &output_path);
    let write_report = writer.write(&modules)?;

    for file in &write_report.written {
        let state = if file.changed {
            "written".green()
        } else {
            "unchanged".dimmed()
        };
        println!("   • {} ({})", file.path.display(), state);
    }
    if let Some(script) = &write_report.scaffolded_build_script {
        println!(
            "   • {} ({})",
            script.display(),
            "scaffolded".bright_cyan()
        );
    }

    // Step 6: Git operations (if enabled)
    if project_info.has_git && !options.no_git && write_report.any_changed() {
        println!("\n{}", "6. Creating Git commit...".yellow());
        let git_agent = VersionControlAgent::new(std::fs::canonicalize(project_path)?)?;
        let branch_name = git_agent.commit_to_new_branch(&write_report.changed_paths())?;
        println!(
            "{}",
            format!("✓ Changes committed to branch: {}", branch_name).green()
        );
    } else if !write_report.any_changed() {
        println!("\n{}", "Generated files are already up to date".yellow());
    }

    println!(
        "\n{}",
        "✨ Generation completed successfully!".green().bold()
    );
    Ok(())
}

/// Execute the check workflow (read-only)
pub fn execute_check<P: AsRef<Path>>(
    project_path: P,
    report: Option<PathBuf>,
    filter: Option<String>,
    json: bool,
) -> Result<()> {
    let project_path = project_path.as_ref();

    // An explicit report path stands on its own; only the default location
    // requires a Gradle project around it.
    let report_path = match report {
        Some(path) => path,
        None => {
            let scanner = ProjectScannerAgent::new(project_path);
            scanner.validate(None)?.report_path
        }
    };

    let graph = ReportParser::new().read_report(&report_path)?;

    let config = GeneratorConfig::default();
    let mut resolved = Pipeline::new(&config).resolve(&graph);

    if let Some(pattern) = filter {
        let matcher = PatternMatcher::new(&pattern)?;
        resolved.retain(|entry| {
            matcher.matches(&entry.name) || matcher.matches(&entry.dependency.coordinate())
        });
    }

    if json {
        let summary = CheckSummary::build(&graph, &resolved);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_check_report(&graph, &resolved);
    }

    Ok(())
}

/// Machine-readable counterpart of the text report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckSummary {
    gradle: GradleSummary,
    dependencies: Vec<DependencySummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradleSummary {
    running: String,
    current: String,
    nightly: String,
    release_candidate: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencySummary {
    group: String,
    name: String,
    version: String,
    resolved_name: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate: Option<String>,
}

impl CheckSummary {
    fn build(graph: &DependencyGraph, resolved: &[ResolvedDependency]) -> Self {
        let dependencies = resolved
            .iter()
            .map(|entry| {
                let dependency = &entry.dependency;
                DependencySummary {
                    group: dependency.group.clone(),
                    name: dependency.name.clone(),
                    version: dependency.version.clone(),
                    resolved_name: entry.name.clone(),
                    status: status::classify(dependency).label().to_string(),
                    candidate: candidate_version(dependency).map(str::to_string),
                }
            })
            .collect();

        CheckSummary {
            gradle: GradleSummary {
                running: graph.gradle.running.version.clone(),
                current: graph.gradle.current.version.clone(),
                nightly: graph.gradle.nightly.version.clone(),
                release_candidate: graph.gradle.release_candidate.version.clone(),
            },
            dependencies,
        }
    }
}

/// First non-blank available channel, the version a user would move to.
fn candidate_version(dependency: &Dependency) -> Option<&str> {
    let available = dependency.available.as_ref()?;
    [&available.release, &available.milestone, &available.integration]
        .into_iter()
        .find_map(|channel| channel.as_deref().filter(|v| !v.trim().is_empty()))
}

fn print_check_report(graph: &DependencyGraph, resolved: &[ResolvedDependency]) {
    println!("{}", "📦 Dependency update status".cyan().bold());
    println!(
        "{}",
        format!(
            "   current: {} | outdated: {} | exceeded: {}",
            graph.current.len(),
            graph.outdated.len(),
            graph.exceeded.len()
        )
        .dimmed()
    );

    if !graph.gradle.running.version.is_empty() {
        println!(
            "   Gradle {} (latest release: {})",
            graph.gradle.running.version.white().bold(),
            graph.gradle.current.version
        );
    }

    if resolved.is_empty() {
        println!("\n{}", "No dependencies matched".yellow());
        return;
    }

    let verbose = std::env::var("GBV_VERBOSE").is_ok();
    let section = |kind: StatusKind| {
        resolved
            .iter()
            .filter(move |entry| status::classify(&entry.dependency) == kind)
    };

    let exceeded: Vec<_> = section(StatusKind::Exceeded).collect();
    if !exceeded.is_empty() {
        println!("\n{}:", "Exceeded".red().bold());
        for entry in exceeded {
            println!(
                "  • {} {} ({})",
                entry.dependency.coordinate().white().bold(),
                entry.dependency.version.red(),
                status::annotate(&entry.dependency).dimmed()
            );
        }
    }

    let rejected: Vec<_> = section(StatusKind::Rejected).collect();
    if !rejected.is_empty() {
        println!("\n{}:", "Rejected".red().bold());
        for entry in rejected {
            println!(
                "  • {} {}",
                entry.dependency.coordinate().white().bold(),
                entry.dependency.version.dimmed()
            );
            for line in status::annotate(&entry.dependency).lines() {
                println!("    {}", line.dimmed());
            }
        }
    }

    let outdated: Vec<_> = section(StatusKind::Outdated).collect();
    if !outdated.is_empty() {
        println!("\n{}:", "Outdated".cyan().bold());
        for entry in outdated {
            let current = &entry.dependency.version;
            match candidate_version(&entry.dependency) {
                Some(candidate) => {
                    let delta = VersionDelta::between(current, candidate);
                    println!(
                        "  • {} {} → {} ({})",
                        entry.dependency.coordinate().white().bold(),
                        current.red(),
                        candidate.green().bold(),
                        delta.colored_label()
                    );
                }
                None => println!(
                    "  • {} {} ({})",
                    entry.dependency.coordinate().white().bold(),
                    current.dimmed(),
                    status::annotate(&entry.dependency).dimmed()
                ),
            }
        }
    }

    let up_to_date: Vec<_> = section(StatusKind::UpToDate).collect();
    if verbose && !up_to_date.is_empty() {
        println!("\n{}:", "Up to date".green().bold());
        for entry in up_to_date {
            println!(
                "  • {} {}",
                entry.dependency.coordinate().white().bold(),
                entry.dependency.version.green()
            );
        }
    } else if !up_to_date.is_empty() {
        println!(
            "\n{}",
            format!("{} dependencies are up to date", up_to_date.len()).green()
        );
    }

    println!("\n{}", "To regenerate the constants, run:".dimmed());
    println!("  {}", "gbv generate".cyan());
}
