use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gbv",
    about = "Gradle buildSrc Versions - generate Versions.kt and Libs.kt from the dependency updates report",
    version,
    author
)]
pub struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate Versions.kt and Libs.kt from the dependency updates report
    Generate {
        /// Report location (defaults to build/dependencyUpdates/report.json)
        #[arg(long, value_name = "FILE")]
        report: Option<String>,

        /// Output directory (defaults to buildSrc/src/main/kotlin)
        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        /// Rename the generated versions object
        #[arg(long, value_name = "NAME", default_value = "Versions")]
        versions_name: String,

        /// Rename the generated libs object
        #[arg(long, value_name = "NAME", default_value = "Libs")]
        libs_name: String,

        /// Force group-qualified naming for a short name (repeatable)
        #[arg(long, value_name = "NAME")]
        fqdn: Vec<String>,

        /// Skip Git operations (don't create branch or commit)
        #[arg(long)]
        no_git: bool,
    },

    /// Show per-dependency update status from the report without writing files
    Check {
        /// Report location (defaults to build/dependencyUpdates/report.json)
        #[arg(long, value_name = "FILE")]
        report: Option<String>,

        /// Only show dependencies matching the glob (e.g. "*okhttp*")
        #[arg(long, value_name = "GLOB")]
        filter: Option<String>,

        /// Print a machine-readable JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
}
