//! Running external programs.
//!
//! Everything bober shells out to (`make`, `sdl2-config --libs`, ...) goes
//! through [`ProcessRunner`], so flag resolution and verb dispatch can be
//! exercised against a fake in tests.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("could not start process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{status}")]
    Failed { status: ExitStatus, output: String },
}

impl ProcessError {
    /// Whatever the process printed before failing, if it got that far.
    pub fn output(&self) -> Option<&str> {
        match self {
            ProcessError::Spawn(_) => None,
            ProcessError::Failed { output, .. } => Some(output),
        }
    }
}

pub trait ProcessRunner {
    /// Runs a full shell command line and returns its combined stdout/stderr.
    ///
    /// A non-zero exit status is an error carrying the captured output.
    fn run(&self, command_line: &str) -> Result<String, ProcessError>;
}

/// Runs command lines through the platform shell inside `dir`.
pub struct ShellRunner {
    dir: PathBuf,
}

impl ShellRunner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<String, ProcessError> {
        let output = if cfg!(target_os = "windows") {
            Command::new("cmd")
                .args(["/C", command_line])
                .current_dir(&self.dir)
                .output()?
        } else {
            Command::new("sh")
                .args(["-c", command_line])
                .current_dir(&self.dir)
                .output()?
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(combined)
        } else {
            Err(ProcessError::Failed {
                status: output.status,
                output: combined,
            })
        }
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_shell_runner_combines_streams() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ShellRunner::new(dir.path());
        let out = runner.run("echo out; echo err 1>&2").unwrap();
        assert_eq!(out, "out\nerr\n");
    }

    #[test]
    fn test_shell_runner_runs_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "here").unwrap();
        let runner = ShellRunner::new(dir.path());
        assert_eq!(runner.run("cat marker.txt").unwrap(), "here");
    }

    #[test]
    fn test_shell_runner_failure_keeps_output() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ShellRunner::new(dir.path());
        let err = runner.run("echo broken; exit 3").unwrap_err();
        assert_eq!(err.output(), Some("broken\n"));
        match err {
            ProcessError::Failed { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
