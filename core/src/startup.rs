use std::io::Write;

use hello_common::config::Config;
use tracing::debug;

use crate::error::{OutputLine, RunError};

/// Writes the announcement line. Must run before [`HelloService::run`](crate::app::HelloService::run).
pub fn announce<W: Write>(out: &mut W, cfg: &Config) -> Result<(), RunError> {
    debug!("writing announcement");
    writeln!(out, "{}", cfg.announcement()).map_err(RunError::output(OutputLine::Announcement))
}
