//! Core types and trait definitions for the Roundest voting service.
//!
//! This crate is deliberately free of HTTP, GraphQL and database
//! dependencies. Every other crate depends on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod pokemon;
pub mod ranking;
pub mod store;
pub mod vote;

pub use error::{Error, Result};
