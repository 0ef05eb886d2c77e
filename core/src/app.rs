//! # Hello Service
//!
//! Prints the greeting and the reversed literal, in that order.

use std::io::Write;

use hello_common::config::Config;
use hello_common::quote::QuoteProvider;
use hello_common::text::reverse;
use tracing::debug;

use crate::error::{OutputLine, RunError};
use crate::startup;

pub struct HelloService {
    quotes: Box<dyn QuoteProvider>,
    cfg: Config,
}

impl HelloService {
    pub fn new(quotes: Box<dyn QuoteProvider>, cfg: Config) -> Self {
        Self { quotes, cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Writes the provider's greeting, then the reversal of the configured literal.
    ///
    /// A provider failure is returned before anything is written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), RunError> {
        let greeting: String = self.quotes.hello()?;
        debug!(%greeting, "got greeting");
        writeln!(out, "{}", greeting).map_err(RunError::output(OutputLine::Greeting))?;

        let reversed: String = reverse(&self.cfg.reversal_input);
        debug!(input = %self.cfg.reversal_input, %reversed, "reversed literal");
        writeln!(out, "{}", reversed).map_err(RunError::output(OutputLine::Reversal))
    }
}

/// Announces, then runs `service`. Flushes `out` once both succeed.
pub fn launch<W: Write>(out: &mut W, service: &HelloService) -> Result<(), RunError> {
    startup::announce(out, service.config())?;
    service.run(out)?;
    out.flush().map_err(RunError::Flush)
}
