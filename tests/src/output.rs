#![cfg(test)]
use hello_common::config::Config;
use hello_common::quote::{QuoteError, QuoteProvider};
use hello_core::app::{self, HelloService};
use hello_core::greeting::LocalGreeting;

struct StubQuote;

impl QuoteProvider for StubQuote {
    fn hello(&self) -> Result<String, QuoteError> {
        Ok("Stub says hi.".to_string())
    }
}

fn capture(service: &HelloService) -> anyhow::Result<Vec<String>> {
    let mut out: Vec<u8> = Vec::new();
    app::launch(&mut out, service)?;
    let text = String::from_utf8(out)?;

    assert!(text.ends_with('\n'), "output is not newline-terminated: {:?}", text);
    Ok(text.lines().map(str::to_string).collect())
}

/// The binary wires exactly this service, so this is its stdout.
#[test]
fn default_program_output() -> anyhow::Result<()> {
    let service = HelloService::new(Box::new(LocalGreeting), Config::default());
    let lines = capture(&service)?;

    assert_eq!(
        lines,
        vec!["Command ==> I am Hello", "Hello, world.", "Hello, world!"]
    );
    Ok(())
}

#[test]
fn injected_provider_is_line_two() -> anyhow::Result<()> {
    let service = HelloService::new(Box::new(StubQuote), Config::default());
    let lines = capture(&service)?;

    assert_eq!(lines.len(), 3, "expected three lines, got {:?}", lines);
    assert_eq!(lines[0], "Command ==> I am Hello");
    assert_eq!(lines[1], "Stub says hi.");
    assert_eq!(lines[2], "Hello, world!");
    Ok(())
}

#[test]
fn announcement_comes_first_even_on_failure() {
    struct Down;

    impl QuoteProvider for Down {
        fn hello(&self) -> Result<String, QuoteError> {
            Err(QuoteError::Unavailable("no network".into()))
        }
    }

    let service = HelloService::new(Box::new(Down), Config::default());
    let mut out: Vec<u8> = Vec::new();
    let result = app::launch(&mut out, &service);

    assert!(result.is_err());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Command ==> I am Hello\n"
    );
}
