mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use hello_common::config::Config;
use hello_core::app::{self, HelloService};
use hello_core::greeting::LocalGreeting;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let _ = CommandLine::parse_args();

    logging::init();

    let service = HelloService::new(Box::new(LocalGreeting), Config::default());
    let mut stdout = io::stdout().lock();

    app::launch(&mut stdout, &service)?;
    Ok(())
}
