//! Release automation: semantic-release config and the release run-scripts.

use serde_json::{json, Value};

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

/// Plugin pipeline order matters: analysis, notes, changelog, publish, then
/// the release commit.
fn config(project_name: &str) -> Value {
    json!({
        "branches": ["main"],
        "repositoryUrl": format!("https://github.com/your-org/{project_name}.git"),
        "plugins": [
            "@semantic-release/commit-analyzer",
            "@semantic-release/release-notes-generator",
            "@semantic-release/changelog",
            "@semantic-release/npm",
            [
                "@semantic-release/git",
                {
                    "assets": ["CHANGELOG.md", "package.json"],
                    "message": "chore(release): ${nextRelease.version}",
                },
            ],
        ],
    })
}

pub struct Release;

impl Stage for Release {
    fn name(&self) -> &'static str {
        "release"
    }

    fn describe(&self) -> &'static str {
        "🚢 Configuring release automation"
    }

    fn plan(&self, project_name: &str) -> Plan {
        vec![
            Action::write(".releaserc.json", pretty_json(&config(project_name))),
            Action::run("npm", &["pkg", "set", "scripts.release=semantic-release"]),
            Action::run(
                "npm",
                &["pkg", "set", "scripts.release:dry=semantic-release --dry-run"],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugins_keep_their_fixed_order() {
        let config = config("my-app");
        let plugins = config["plugins"].as_array().unwrap();

        assert_eq!(plugins[0], "@semantic-release/commit-analyzer");
        assert_eq!(plugins[1], "@semantic-release/release-notes-generator");
        assert_eq!(plugins[2], "@semantic-release/changelog");
        assert_eq!(plugins[3], "@semantic-release/npm");
        assert_eq!(plugins[4][0], "@semantic-release/git");
    }

    #[test]
    fn release_commit_uses_the_chore_template() {
        let config = config("my-app");

        assert_eq!(
            config["plugins"][4][1]["message"],
            "chore(release): ${nextRelease.version}"
        );
    }

    #[test]
    fn repository_url_is_a_placeholder_derived_from_the_name() {
        let config = config("demo");

        assert_eq!(
            config["repositoryUrl"],
            "https://github.com/your-org/demo.git"
        );
    }

    #[test]
    fn registers_release_and_dry_run_scripts() {
        let plan = Release.plan("my-app");

        assert_eq!(
            plan[1],
            Action::run("npm", &["pkg", "set", "scripts.release=semantic-release"])
        );
        assert_eq!(
            plan[2],
            Action::run(
                "npm",
                &["pkg", "set", "scripts.release:dry=semantic-release --dry-run"]
            )
        );
    }
}
