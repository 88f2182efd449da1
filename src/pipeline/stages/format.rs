//! Formatter style options and ignore list.

use serde::Serialize;

use crate::pipeline::action::{pretty_json, Action, Plan};
use crate::pipeline::Stage;

const PRETTIERIGNORE: &str = "\
node_modules/
coverage/
package-lock.json
";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrettierOptions {
    print_width: u32,
    tab_width: u32,
    semi: bool,
    single_quote: bool,
    trailing_comma: &'static str,
}

fn options() -> PrettierOptions {
    PrettierOptions {
        print_width: 100,
        tab_width: 2,
        semi: true,
        single_quote: true,
        trailing_comma: "all",
    }
}

pub struct Format;

impl Stage for Format {
    fn name(&self) -> &'static str {
        "format"
    }

    fn describe(&self) -> &'static str {
        "🎨 Configuring formatter"
    }

    fn plan(&self, _project_name: &str) -> Plan {
        vec![
            Action::write(".prettierrc.json", pretty_json(&options())),
            Action::write(".prettierignore", PRETTIERIGNORE),
        ]
    }
}
