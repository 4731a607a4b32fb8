//! # bober CLI Entry Point
//!
//! Every invocation loads `project.toml` and rewrites the `Makefile`. The
//! first positional argument then picks what happens next:
//!
//! - **none**: stop after generating the Makefile
//! - **build** / **run**: ensure `build/` exists, then call make
//! - **run --html5**: serve `build/` on port 8080 instead of calling make
//! - **clean**: remove `build/`
//! - **anything else**: forwarded to make verbatim

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bober::build;
use bober::commands::{self, Verb};
use bober::config::{CONFIG_FILE, ProjectConfig, Settings};
use bober::process::ShellRunner;
use bober::ui;

#[derive(Parser)]
#[command(name = "bober")]
#[command(about = "Generate a Makefile from project.toml and drive make", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Project description to read
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// build, run [--html5], clean, or any make arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::error(format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::default().with_config_file(cli.config);
    let runner = ShellRunner::new(&settings.root);

    let config = ProjectConfig::load(&settings.config_file).context("Loading configuration")?;

    build::generate_makefile(&config, &settings, &runner).context("Generating Makefile")?;

    match Verb::parse(&cli.args) {
        Some(verb) => {
            let output = commands::dispatch(&verb, &settings, &runner).context("Running make")?;
            if let Some(output) = output {
                print!("{}", output);
            }
        }
        None => ui::info("Makefile generated successfully."),
    }

    Ok(())
}
