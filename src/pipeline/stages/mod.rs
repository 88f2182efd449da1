//! The ten bootstrap stages.

pub mod commitlint;
pub mod format;
pub mod install;
pub mod lint;
pub mod prepare;
pub mod release;
pub mod spellcheck;
pub mod staged;
pub mod test_runner;

use super::Stage;

/// Every stage of the pipeline, in the order they must run.
///
/// The order is load-bearing: the hooks manager has to be installed before
/// the commit-msg and pre-commit hooks are written into `.husky/`, and the
/// run-script registrations need the package metadata from the prepare stage.
pub fn all() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(prepare::Prepare),
        Box::new(install::InstallDependencies),
        Box::new(install::InstallHookManager),
        Box::new(spellcheck::Spellcheck),
        Box::new(commitlint::Commitlint),
        Box::new(lint::Lint),
        Box::new(format::Format),
        Box::new(staged::LintStaged),
        Box::new(release::Release),
        Box::new(test_runner::TestRunner),
    ]
}
