use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap a Node.js project with an opinionated tooling setup", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    commands::bootstrap::execute()
}
