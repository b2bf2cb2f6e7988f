mod agents;
mod cli;
mod error;
mod kotlin;
mod maven;
mod pipeline;
mod report;
mod utils;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use workflow::GenerateOptions;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("GBV_VERBOSE", "1");
        }
    }

    let result = match cli.command {
        Commands::Generate {
            report,
            out,
            versions_name,
            libs_name,
            fqdn,
            no_git,
        } => workflow::execute_generate(
            &cli.path,
            GenerateOptions {
                report: report.map(PathBuf::from),
                out: out.map(PathBuf::from),
                versions_name,
                libs_name,
                fqdn,
                no_git,
            },
        ),
        Commands::Check {
            report,
            filter,
            json,
        } => workflow::execute_check(&cli.path, report.map(PathBuf::from), filter, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
