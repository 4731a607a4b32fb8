//! Makefile rendering.
//!
//! The generated file has two targets: `build` (the default) compiles every
//! discovered source into `build/<executable>` in one compiler call, and
//! `run` executes it. Paths and flags are written verbatim, without quoting.

use std::fs;
use std::path::PathBuf;

use super::flags::{ResolvedFlags, resolve_flags};
use super::sources::find_sources;
use crate::config::{BUILD_DIR, ProjectConfig, Settings};
use crate::error::{BoberError, Result};
use crate::process::ProcessRunner;

pub fn render_makefile(config: &ProjectConfig, sources: &[PathBuf], flags: &ResolvedFlags) -> String {
    let sources: Vec<String> = sources
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();

    format!(
        r#"# Automatically generated Makefile for {name} by Bober!

CXX = {compiler}
CXXFLAGS = {flags} -std={standard} {lib_cflags}
LDFLAGS = {lib_libs}

SRCS = {sources}
EXECUTABLE = {build_dir}/{executable}

build: $(EXECUTABLE)

$(EXECUTABLE):
	$(CXX) $(CXXFLAGS) $(SRCS) -o $@ $(LDFLAGS)

# For web builds, use 'bober run --html5' to start a local server
run: $(EXECUTABLE)
	./$(EXECUTABLE)

.PHONY: build run
"#,
        name = config.project.name,
        compiler = config.cpp.compiler,
        flags = config.cpp.flags,
        standard = config.cpp.standard,
        lib_cflags = flags.compile.join(" "),
        lib_libs = flags.link.join(" "),
        sources = sources.join(" "),
        build_dir = BUILD_DIR,
        executable = config.output.executable,
    )
}

/// Discovers sources, resolves library flags and writes the Makefile.
///
/// Nothing is written when no sources are found.
pub fn generate_makefile(
    config: &ProjectConfig,
    settings: &Settings,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let sources = find_sources(&settings.root, &config.sources)?;
    if sources.is_empty() {
        return Err(BoberError::NoSources);
    }

    let flags = resolve_flags(&config.libraries, runner);
    let makefile = render_makefile(config, &sources, &flags);

    fs::write(&settings.makefile, makefile).map_err(|source| BoberError::Write {
        path: settings.makefile.clone(),
        source,
    })
}
