//! Staged-file checks: the glob-to-command mapping and the pre-commit hook.

use serde_json::{json, Value};

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

const PRE_COMMIT_HOOK: &str = r#"#!/usr/bin/env sh
. "$(dirname -- "$0")/_/husky.sh"

npx --no -- lint-staged
"#;

fn config() -> Value {
    json!({
        "*.js": ["eslint --fix", "prettier --write"],
        "*.md": "markdownlint --fix",
        "*.{json,yml}": "prettier --write",
    })
}

pub struct LintStaged;

impl Stage for LintStaged {
    fn name(&self) -> &'static str {
        "lint-staged"
    }

    fn describe(&self) -> &'static str {
        "🧹 Configuring staged-file checks"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::write(".lintstagedrc.json", pretty_json(&config())),
            Action::write(".husky/pre-commit", PRE_COMMIT_HOOK),
            Action::make_executable(".husky/pre-commit"),
        ]
    }
}
