use hello_common::quote::{QuoteError, QuoteProvider};

pub const GREETING: &str = "Hello, world.";

pub fn hello() -> &'static str {
    GREETING
}

/// Default [`QuoteProvider`], always answers with [`GREETING`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalGreeting;

impl QuoteProvider for LocalGreeting {
    fn hello(&self) -> Result<String, QuoteError> {
        Ok(hello().to_string())
    }
}
