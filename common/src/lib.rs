//! Shared building blocks for `hello`.
//!
//! * **[`config`]**: the fixed literals the program prints.
//! * **[`text`]**: string helpers, most importantly [`text::reverse`].
//! * **[`quote`]**: the [`quote::QuoteProvider`] seam the entry point pulls its greeting from.

pub mod config;
pub mod quote;
pub mod text;
