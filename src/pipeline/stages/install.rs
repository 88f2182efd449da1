//! Install the fixed development-tool set and the git hooks manager.

use crate::pipeline::action::{Action, Plan};
use crate::pipeline::Stage;

/// The full dev-dependency set, installed in one `npm install` invocation.
///
/// Four entries are version-pinned and the rest install at latest. The split
/// is intentional and must not be normalized in either direction.
pub const DEV_PACKAGES: &[&str] = &[
    "@commitlint/cli",
    "@commitlint/config-conventional",
    "@semantic-release/changelog",
    "@semantic-release/git",
    "cspell@8.3.2",
    "eslint@8.56.0",
    "eslint-config-prettier",
    "husky@8.0.3",
    "jest",
    "lint-staged@15.2.0",
    "markdownlint-cli",
    "prettier",
    "semantic-release",
];

pub struct InstallDependencies;

impl Stage for InstallDependencies {
    fn name(&self) -> &'static str {
        "install"
    }

    fn describe(&self) -> &'static str {
        "📦 Installing development dependencies"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        let mut args = vec!["install".to_string(), "--save-dev".to_string()];
        args.extend(DEV_PACKAGES.iter().map(|package| package.to_string()));

        vec![Action::Run {
            program: "npm".to_string(),
            args,
        }]
    }
}

pub struct InstallHookManager;

impl Stage for InstallHookManager {
    fn name(&self) -> &'static str {
        "hook-manager"
    }

    fn describe(&self) -> &'static str {
        "🔗 Installing git hooks manager"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![Action::run("npx", &["husky", "install"])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_list_is_verbatim() {
        assert_eq!(
            DEV_PACKAGES,
            &[
                "@commitlint/cli",
                "@commitlint/config-conventional",
                "@semantic-release/changelog",
                "@semantic-release/git",
                "cspell@8.3.2",
                "eslint@8.56.0",
                "eslint-config-prettier",
                "husky@8.0.3",
                "jest",
                "lint-staged@15.2.0",
                "markdownlint-cli",
                "prettier",
                "semantic-release",
            ]
        );
    }

    #[test]
    fn exactly_four_entries_are_pinned() {
        let pinned: Vec<&&str> = DEV_PACKAGES
            .iter()
            .filter(|package| package.rfind('@') > Some(0))
            .collect();

        assert_eq!(
            pinned,
            vec![
                &"cspell@8.3.2",
                &"eslint@8.56.0",
                &"husky@8.0.3",
                &"lint-staged@15.2.0",
            ]
        );
    }

    #[test]
    fn install_is_a_single_invocation() {
        let plan = InstallDependencies.plan("my-app");

        assert_eq!(plan.len(), 1);
        match &plan[0] {
            Action::Run { program, args } => {
                assert_eq!(program, "npm");
                assert_eq!(args[0], "install");
                assert_eq!(args[1], "--save-dev");
                assert_eq!(args.len(), 2 + DEV_PACKAGES.len());
            }
            other => panic!("expected a Run action, got {other:?}"),
        }
    }
}
