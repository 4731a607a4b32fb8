//! CLI command handlers
//!
//! This module contains what happens after the Makefile is written:
//! turning the first CLI argument into a [`dispatch::Verb`] and acting on it.

pub mod dispatch;

pub use dispatch::{SERVE_FLAG, Verb, dispatch};
