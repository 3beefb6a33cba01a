use anyhow::Result;
use clap::Parser;

use sneakmatch::cli::SubCommandExtend;
use sneakmatch::config::{Opts, SubCommand};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    match &opts.subcmd {
        SubCommand::Match(cmd) => cmd.run(&opts).await,
        SubCommand::Palette(cmd) => cmd.run(&opts).await,
        SubCommand::Server(cmd) => cmd.run(&opts).await,
    }
}
