use clap::Parser;
use vcm::cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    vcm::cli::run(cli)
}
