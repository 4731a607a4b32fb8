//! Verb handling after the Makefile has been written.
//!
//! `build`, `run` and `clean` get a little preparation (or, for `clean` and
//! `run --html5`, replace `make` entirely). Everything else is handed to
//! `make` as-is, so `bober install` or `bober -j8 build` work as they would
//! with plain make.

use crate::build;
use crate::config::Settings;
use crate::error::{BoberError, Result};
use crate::process::ProcessRunner;
use crate::serve::StaticServer;
use crate::ui::{self, Level};

/// Switches `run` from executing the binary to serving `build/` over HTTP.
pub const SERVE_FLAG: &str = "--html5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// `build [args...]`
    Build(Vec<String>),
    /// `run [args...]`, with `--html5` pulled out of the arguments.
    Run { serve: bool, args: Vec<String> },
    Clean,
    /// Any other first argument; the whole list goes to make untouched.
    Passthrough(Vec<String>),
}

impl Verb {
    /// Returns `None` when no arguments were given.
    pub fn parse(args: &[String]) -> Option<Verb> {
        let (first, rest) = args.split_first()?;
        let verb = match first.as_str() {
            "build" => Verb::Build(rest.to_vec()),
            "run" => {
                let serve = rest.iter().any(|a| a == SERVE_FLAG);
                let args = rest.iter().filter(|a| *a != SERVE_FLAG).cloned().collect();
                Verb::Run { serve, args }
            }
            "clean" => Verb::Clean,
            _ => Verb::Passthrough(args.to_vec()),
        };
        Some(verb)
    }

    /// Arguments passed to make for this verb, if it reaches make at all.
    pub fn make_args(&self) -> Option<Vec<String>> {
        match self {
            Verb::Build(rest) => Some(prefixed("build", rest)),
            Verb::Run { serve: false, args } => Some(prefixed("run", args)),
            Verb::Run { serve: true, .. } | Verb::Clean => None,
            Verb::Passthrough(args) => Some(args.clone()),
        }
    }
}

fn prefixed(verb: &str, rest: &[String]) -> Vec<String> {
    std::iter::once(verb.to_string())
        .chain(rest.iter().cloned())
        .collect()
}

/// Executes one verb. Returns make's output for the caller to relay, or
/// `None` when make was not involved.
///
/// `run --html5` does not return unless the server fails.
pub fn dispatch(
    verb: &Verb,
    settings: &Settings,
    runner: &dyn ProcessRunner,
) -> Result<Option<String>> {
    match verb {
        Verb::Build(_) | Verb::Run { serve: false, .. } => {
            build::ensure_build_dir(&settings.build_dir)?;
        }
        Verb::Run { serve: true, .. } => {
            build::ensure_build_dir(&settings.build_dir)?;
            serve_build_dir(settings)?;
            return Ok(None);
        }
        Verb::Clean => {
            if build::clean(&settings.build_dir)? {
                ui::info("Build directory cleaned successfully");
            } else {
                ui::warn("Nothing to clean");
            }
            return Ok(None);
        }
        Verb::Passthrough(_) => {}
    }

    match verb.make_args() {
        Some(args) => run_make(settings, runner, &args).map(Some),
        None => Ok(None),
    }
}

pub fn make_command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn run_make(settings: &Settings, runner: &dyn ProcessRunner, args: &[String]) -> Result<String> {
    let command = make_command_line(&settings.make_program, args);
    runner.run(&command).map_err(|source| {
        if let Some(output) = source.output().filter(|o| !o.is_empty()) {
            eprint!("{}", output);
        }
        BoberError::ExternalTool { command, source }
    })
}

fn serve_build_dir(settings: &Settings) -> Result<()> {
    let server = StaticServer::bind(settings.serve_addr, &settings.build_dir)?;
    let port = server
        .local_addr()
        .map(|a| a.port())
        .unwrap_or(settings.serve_addr.port());

    ui::log(
        Level::Info,
        "Starting server",
        &[("directory", &server.root().display()), ("port", &port)],
    );
    ui::info(format!("Server is running at http://localhost:{}", port));
    ui::info("Press Ctrl+C to stop the server");

    server.serve()
}
