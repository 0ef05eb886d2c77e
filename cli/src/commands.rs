use clap::Parser;

/// The program takes no arguments of its own; clap only provides `--help` and `--version`.
#[derive(Parser)]
#[command(name = "hello")]
#[command(version, about = "Prints a greeting and a reversed literal.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
