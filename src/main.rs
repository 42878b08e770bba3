use anyhow::Context;
use batch_resizer::{install_interrupt_handler, operator_message, run_interactive, Cli, Prompter};
use clap::Parser;
use log::LevelFilter;
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    install_interrupt_handler().context("interrupt handling unavailable")?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match run_interactive(&mut prompter, true) {
        Ok(stats) => {
            log::debug!(
                "Run finished: {} processed, {} failed",
                stats.processed_count,
                stats.failed_count
            );
            Ok(())
        }
        Err(e) => match operator_message(&e) {
            Some(message) => {
                println!("{}", message);
                Ok(())
            }
            None => Err(e).context("batch resize failed"),
        },
    }
}
