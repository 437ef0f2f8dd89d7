//! GDV CLI - Command line tool for checking and summarizing gun deaths data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gdv-cli",
    version,
    about = "Gun deaths by state data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gdv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gdv_cmd::run(cli.command)
}
