//! satdash - Command line tool for inspecting vegetation dashboard snapshots.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "satdash",
    version,
    about = "Satellite vegetation dashboard snapshot toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: satdash_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    satdash_cmd::run(cli.command)
}
