//! Preflight detection of the external tools the pipeline shells out to.

use std::collections::HashMap;
use std::env;
use std::process::Command;

/// Tools a full bootstrap run invokes.
pub const REQUIRED_TOOLS: &[&str] = &["node", "npm", "npx", "git"];

#[derive(Debug)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub tools: HashMap<String, ToolInfo>,
}

#[derive(Debug)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    /// Probe PATH for the required tools and capture their versions.
    ///
    /// Detection is informational only: a missing tool is reported to the
    /// user, and the pipeline later fails with the native error of whichever
    /// invocation needed it first.
    pub fn detect() -> Self {
        let mut environment = Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            tools: HashMap::new(),
        };

        environment.detect_tools();
        environment
    }

    fn detect_tools(&mut self) {
        for tool_name in REQUIRED_TOOLS {
            let mut tool_info = ToolInfo {
                available: false,
                version: None,
                path: None,
            };

            if let Ok(path) = which::which(tool_name) {
                tool_info.available = true;
                tool_info.path = Some(path.display().to_string());

                // Try to get version
                if let Ok(output) = Command::new(tool_name).arg("--version").output() {
                    let version_str = String::from_utf8_lossy(&output.stdout);
                    if !version_str.is_empty() {
                        tool_info.version =
                            Some(version_str.lines().next().unwrap_or("").to_string());
                    }
                }
            }

            self.tools.insert(tool_name.to_string(), tool_info);
        }
    }

    /// Required tools not found on PATH.
    pub fn missing_tools(&self) -> Vec<&'static str> {
        REQUIRED_TOOLS
            .iter()
            .copied()
            .filter(|tool| {
                !self
                    .tools
                    .get(*tool)
                    .map(|info| info.available)
                    .unwrap_or(false)
            })
            .collect()
    }
}
