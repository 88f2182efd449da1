//! Applies stage plans against the filesystem and external tools.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::action::{Action, Plan};
use super::Stage;

/// Capability for invoking external tools.
///
/// The pipeline never spawns processes directly; every invocation flows
/// through this trait so tests can substitute a recording or failing runner.
pub trait CommandRunner {
    /// Run `program` with `args`, using `cwd` as the working directory.
    fn run(&self, cwd: &Path, program: &str, args: &[String]) -> Result<()>;
}

/// Runner that spawns real processes.
///
/// Stdio is inherited, so the child's own output and error messages reach
/// the user unchanged.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("Failed to spawn {program}"))?;

        if !status.success() {
            anyhow::bail!("`{} {}` exited with {}", program, args.join(" "), status);
        }

        Ok(())
    }
}

/// Applies plans in order against a project root, stopping at the first
/// failure. No retries, no rollback; artifacts already written stay.
pub struct Executor<'a> {
    root: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Executor<'a> {
    pub fn new(root: impl Into<PathBuf>, runner: &'a dyn CommandRunner) -> Self {
        Executor {
            root: root.into(),
            runner,
        }
    }

    /// Run every stage in order, printing its status line first.
    pub fn run(&self, project_name: &str, stages: &[Box<dyn Stage>]) -> Result<()> {
        for stage in stages {
            println!("{}...", stage.describe());

            self.apply(&stage.plan(project_name))
                .with_context(|| format!("Stage `{}` failed", stage.name()))?;
        }

        Ok(())
    }

    /// Apply one plan, action by action.
    pub fn apply(&self, plan: &Plan) -> Result<()> {
        for action in plan {
            self.apply_action(action)?;
        }

        Ok(())
    }

    fn apply_action(&self, action: &Action) -> Result<()> {
        match action {
            Action::RemoveProjectDir => {
                if self.root.exists() {
                    fs::remove_dir_all(&self.root).with_context(|| {
                        format!("Failed to remove {}", self.root.display())
                    })?;
                }
                Ok(())
            }
            Action::CreateProjectDir => fs::create_dir_all(&self.root)
                .with_context(|| format!("Failed to create {}", self.root.display())),
            Action::WriteFile { path, contents } => {
                let target = self.root.join(path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(&target, contents)
                    .with_context(|| format!("Failed to write {}", target.display()))
            }
            Action::MakeExecutable { path } => make_executable(&self.root.join(path)),
            Action::Run { program, args } => self.runner.run(&self.root, program, args),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    permissions.set_mode(0o755);

    fs::set_permissions(path, permissions)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
