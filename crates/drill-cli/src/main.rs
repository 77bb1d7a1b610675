mod cli;
mod config;
mod logging;

use clap::Parser;
use cli::args::Cli;
use cli::commands::dispatch;
use config::Config;

/// Exit code for bad input, bad config, or any other failure.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let configured_filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| Config::default().log_filter);
    logging::init(cli.verbose, &configured_filter);

    if let Err(e) = run(cli, config) {
        eprintln!("error: {e:#}");
        std::process::exit(EXIT_ERROR);
    }
}

fn run(cli: Cli, config: anyhow::Result<Config>) -> anyhow::Result<()> {
    let config = config?;
    let format = cli.format.unwrap_or(config.output);
    let answer = dispatch(cli.cmd)?;
    println!("{}", answer.render(format)?);
    Ok(())
}
