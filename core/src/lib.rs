//! # hello core
//!
//! * **[`startup`]**: the announcement written before anything else.
//! * **[`greeting`]**: the built-in greeting and the default [`QuoteProvider`](hello_common::quote::QuoteProvider).
//! * **[`app`]**: [`app::HelloService`], which prints the greeting and the reversed literal.
//! * **[`error`]**: [`error::RunError`].

pub mod app;
pub mod error;
pub mod greeting;
pub mod startup;
