//! Intents produced by stage planning.

use serde::Serialize;
use std::path::PathBuf;

/// A single intent: one filesystem operation or one external-tool invocation.
///
/// Paths are relative to the project root. `Run` executes with the project
/// root as its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete the project directory and everything under it, if present.
    RemoveProjectDir,
    /// Create the project directory.
    CreateProjectDir,
    /// Write a file, replacing any previous content.
    WriteFile { path: PathBuf, contents: String },
    /// Set the executable bits on a previously written file.
    MakeExecutable { path: PathBuf },
    /// Invoke an external tool.
    Run { program: String, args: Vec<String> },
}

/// The ordered actions of one stage.
pub type Plan = Vec<Action>;

impl Action {
    pub fn write(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Action::WriteFile {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn make_executable(path: impl Into<PathBuf>) -> Self {
        Action::MakeExecutable { path: path.into() }
    }

    pub fn run(program: &str, args: &[&str]) -> Self {
        Action::Run {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Serialize a config value the way every generated JSON artifact is written:
/// pretty-printed with a trailing newline.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    let mut contents =
        serde_json::to_string_pretty(value).expect("static config values serialize");
    contents.push('\n');
    contents
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_collects_owned_args() {
        let action = Action::run("npm", &["init", "-y"]);

        assert_eq!(
            action,
            Action::Run {
                program: "npm".to_string(),
                args: vec!["init".to_string(), "-y".to_string()],
            }
        );
    }

    #[test]
    fn pretty_json_ends_with_newline() {
        let contents = pretty_json(&json!({ "a": 1 }));

        assert!(contents.ends_with("}\n"));
    }
}
