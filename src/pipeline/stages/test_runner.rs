//! Test-runner configuration and the test run-script.

use serde::Serialize;

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JestConfig {
    clear_mocks: bool,
    collect_coverage: bool,
    coverage_directory: &'static str,
    coverage_provider: &'static str,
}

fn config() -> JestConfig {
    JestConfig {
        clear_mocks: true,
        collect_coverage: true,
        coverage_directory: "coverage",
        coverage_provider: "v8",
    }
}

pub struct TestRunner;

impl Stage for TestRunner {
    fn name(&self) -> &'static str {
        "test-runner"
    }

    fn describe(&self) -> &'static str {
        "🧪 Configuring test runner"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::write("jest.config.json", pretty_json(&config())),
            Action::run("npm", &["pkg", "set", "scripts.test=jest"]),
        ]
    }
}
