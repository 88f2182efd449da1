//! Commit-message linting: config plus the commit-msg hook.

use serde_json::{json, Value};

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

/// Runs the commit linter and the spell checker against the message file git
/// hands the hook.
const COMMIT_MSG_HOOK: &str = r#"#!/usr/bin/env sh
. "$(dirname -- "$0")/_/husky.sh"

npx --no -- commitlint --edit "$1"
npx --no -- cspell --no-summary --no-progress "$1"
"#;

fn config() -> Value {
    json!({
        "extends": ["@commitlint/config-conventional"],
        "rules": {
            "body-max-line-length": [0, "always"],
        },
    })
}

pub struct Commitlint;

impl Stage for Commitlint {
    fn name(&self) -> &'static str {
        "commitlint"
    }

    fn describe(&self) -> &'static str {
        "📝 Configuring commit linter"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::write(".commitlintrc.json", pretty_json(&config())),
            Action::write(".husky/commit-msg", COMMIT_MSG_HOOK),
            Action::make_executable(".husky/commit-msg"),
        ]
    }
}
