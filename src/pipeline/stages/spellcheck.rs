//! Spell-checker configuration.

use serde_json::{json, Value};

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

fn config() -> Value {
    json!({
        "version": "0.2",
        "language": "en",
        "ignorePaths": [
            "node_modules/**",
            "coverage/**",
            "package-lock.json",
            ".husky/**",
        ],
        "words": [
            "camelcase",
            "commitlint",
            "cspell",
            "lintstaged",
            "markdownlint",
            "releaserc",
        ],
    })
}

pub struct Spellcheck;

impl Stage for Spellcheck {
    fn name(&self) -> &'static str {
        "spellcheck"
    }

    fn describe(&self) -> &'static str {
        "📖 Configuring spell checker"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![Action::write(".cspell.json", pretty_json(&config()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_installed_and_generated_paths() {
        let config = config();
        let ignored: Vec<&str> = config["ignorePaths"]
            .as_array()
            .unwrap()
            .iter()
            .map(|path| path.as_str().unwrap())
            .collect();

        assert!(ignored.contains(&"node_modules/**"));
        assert!(ignored.contains(&".husky/**"));
    }

    #[test]
    fn whitelists_the_tooling_vocabulary() {
        let config = config();

        assert!(config["words"]
            .as_array()
            .unwrap()
            .iter()
            .any(|word| word == "commitlint"));
    }
}
