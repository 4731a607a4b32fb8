use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::process::ProcessError;

#[derive(Error, Debug)]
pub enum BoberError {
    #[error("failed to read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("error walking the path {}", .dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no source files found")]
    NoSources,

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create build directory {}", .path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove build directory {}", .path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start server on {addr}")]
    ServerStart {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),

    #[error("`{command}` failed")]
    ExternalTool {
        command: String,
        #[source]
        source: ProcessError,
    },
}

pub type Result<T> = std::result::Result<T, BoberError>;
