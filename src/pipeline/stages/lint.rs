//! Linter configuration and ignore list.

use serde_json::{json, Value};

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

const ESLINTIGNORE: &str = "\
node_modules/
coverage/
dist/
";

fn config() -> Value {
    json!({
        "env": {
            "es2022": true,
            "node": true,
        },
        "extends": ["eslint:recommended", "prettier"],
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module",
        },
        "overrides": [
            {
                "files": ["*.test.js"],
                "env": { "jest": true },
            },
        ],
    })
}

pub struct Lint;

impl Stage for Lint {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn describe(&self) -> &'static str {
        "🔍 Configuring linter"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::write(".eslintrc.json", pretty_json(&config())),
            Action::write(".eslintignore", ESLINTIGNORE),
        ]
    }
}
