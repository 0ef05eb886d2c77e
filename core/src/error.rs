use std::fmt;
use std::io;

use hello_common::quote::QuoteError;
use thiserror::Error;

/// Which of the three output lines a write failure hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLine {
    Announcement,
    Greeting,
    Reversal,
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputLine::Announcement => "announcement",
            OutputLine::Greeting => "greeting",
            OutputLine::Reversal => "reversal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to write {line} line")]
    Output {
        line: OutputLine,
        #[source]
        source: io::Error,
    },
    #[error("failed to flush output")]
    Flush(#[source] io::Error),
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl RunError {
    pub(crate) fn output(line: OutputLine) -> impl FnOnce(io::Error) -> Self {
        move |source| RunError::Output { line, source }
    }
}
