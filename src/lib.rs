//! # bober - Makefiles for small C/C++ projects
//!
//! bober reads a `project.toml`, writes a `Makefile` next to it and then
//! gets out of the way: all compiling and linking is done by `make`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Regenerate the Makefile only
//! bober
//!
//! # Build, run, or serve an Emscripten build on :8080
//! bober build
//! bober run
//! bober run --html5
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - `project.toml` parsing and the per-invocation [`config::Settings`]
//! - [`build`] - source discovery, library flags and Makefile rendering
//! - [`commands`] - verb dispatch (`build`, `run`, `clean`, passthrough)
//! - [`process`] - the [`process::ProcessRunner`] seam for external programs
//! - [`serve`] - static file server for web builds

/// Makefile generation and build directory handling.
pub mod build;

/// CLI verb handling.
pub mod commands;

/// Configuration file parsing (`project.toml`).
pub mod config;

/// Error types.
pub mod error;

/// External process execution.
pub mod process;

/// Static file server for `run --html5`.
pub mod serve;

/// Terminal output.
pub mod ui;

pub use error::{BoberError, Result};
