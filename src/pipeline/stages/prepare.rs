//! Wipe and recreate the project directory, then seed package metadata and
//! version control.

use crate::pipeline::action::{Action, Plan};
use crate::pipeline::Stage;

const GITIGNORE: &str = "\
node_modules/
coverage/
dist/
*.log
.DS_Store
";

pub struct Prepare;

impl Stage for Prepare {
    fn name(&self) -> &'static str {
        "prepare"
    }

    fn describe(&self) -> &'static str {
        "📁 Preparing project directory"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::RemoveProjectDir,
            Action::CreateProjectDir,
            Action::run("npm", &["init", "-y"]),
            Action::run("git", &["init"]),
            Action::write(".gitignore", GITIGNORE),
        ]
    }
}
