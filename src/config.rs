//! Project description (`project.toml`) and process layout.

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{BoberError, Result};

pub const CONFIG_FILE: &str = "project.toml";
pub const MAKEFILE: &str = "Makefile";
/// Build output directory, relative to the project root.
pub const BUILD_DIR: &str = "build";
pub const MAKE_PROGRAM: &str = "make";
pub const SERVE_PORT: u16 = 8080;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub project: ProjectInfo,
    pub cpp: CppConfig,
    pub sources: Vec<String>,
    pub output: OutputConfig,
    #[serde(default)]
    pub libraries: Vec<LibrarySpec>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CppConfig {
    pub compiler: String,
    pub standard: String,
    pub flags: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub executable: String,
}

/// A library to link against, either by name (`-l<name>`) or through a
/// `*-config` style helper that prints its own flags.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LibrarySpec {
    pub name: Option<String>,
    pub config: Option<String>,
}

impl LibrarySpec {
    pub fn helper(&self) -> Option<&str> {
        self.config.as_deref().filter(|s| !s.is_empty())
    }

    pub fn link_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BoberError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| BoberError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Where bober reads and writes things for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub makefile: PathBuf,
    pub build_dir: PathBuf,
    pub make_program: String,
    pub serve_addr: SocketAddr,
}

impl Settings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_file: root.join(CONFIG_FILE),
            makefile: root.join(MAKEFILE),
            build_dir: root.join(BUILD_DIR),
            make_program: MAKE_PROGRAM.to_string(),
            serve_addr: SocketAddr::from(([0, 0, 0, 0], SERVE_PORT)),
            root,
        }
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(".")
    }
}
