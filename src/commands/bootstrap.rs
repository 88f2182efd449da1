//! Run the full bootstrap pipeline against a fresh project directory.

use anyhow::{Context, Result};
use colored::*;

use groundwork::environment::{self, Environment};
use groundwork::pipeline::stages;
use groundwork::pipeline::{Executor, SystemRunner};

/// Name of the directory the pipeline creates under the current working
/// directory. The tool takes no arguments; every run targets the same path
/// and replaces whatever is there.
pub const PROJECT_NAME: &str = "my-app";

pub fn execute() -> Result<()> {
    println!("{}", "🚀 Groundwork".bold().blue());
    println!(
        "{}",
        format!("Bootstrapping project: {PROJECT_NAME}\n").dimmed()
    );

    display_tool_status(&Environment::detect());

    let root = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(PROJECT_NAME);

    let runner = SystemRunner;
    let executor = Executor::new(root, &runner);
    executor.run(PROJECT_NAME, &stages::all())?;

    println!("\n✨ Project '{PROJECT_NAME}' bootstrapped successfully!");
    println!("\nNext steps:");
    println!("  1. cd {PROJECT_NAME}");
    println!("  2. Replace the repositoryUrl placeholder in .releaserc.json");
    println!("  3. npm test");

    Ok(())
}

fn display_tool_status(environment: &Environment) {
    println!("🔍 Checking for required tools...");

    for tool in environment::REQUIRED_TOOLS {
        match environment.tools.get(*tool) {
            Some(info) if info.available => {
                println!(
                    "   {} {}: {}",
                    "✓".green().bold(),
                    tool,
                    info.version.as_deref().unwrap_or("detected")
                );
            }
            _ => println!("   {} {}: not found", "✗".red().bold(), tool),
        }
    }

    if !environment.missing_tools().is_empty() {
        println!(
            "   {} The run will stop at the first step that needs a missing tool",
            "⚠️".yellow()
        );
    }

    println!();
}
