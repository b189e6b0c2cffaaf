//! BGD CLI - terminal reports over Brazilian state GDP datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bgd-cli",
    version,
    about = "Brazilian state GDP dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bgd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bgd_cmd::run(cli.command)
}
