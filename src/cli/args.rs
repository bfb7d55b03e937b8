// file: src/cli/args.rs
// version: 1.0.0
// guid: f2a9d4c6-18e7-4b3f-a5d0-6e7c4b19f823

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Node selector used when `--nodes` is not given
pub const DEFAULT_NODES: &str = "local://localhost";

#[derive(Parser, Debug)]
#[command(name = "ref-arch-setup")]
#[command(about = "Run Puppet Bolt commands, tasks and uploads against remote nodes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(short, long, global = true, env = "RAS_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Bolt executable to invoke")]
    pub bolt: Option<String>,

    #[arg(long, global = true, help = "Module path passed to `bolt task run`")]
    pub module_path: Option<String>,

    #[arg(long, global = true, help = "Print the Bolt command lines without running them")]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a directory on the nodes unless it already exists
    MakeDir {
        path: String,

        #[arg(short, long, default_value = DEFAULT_NODES)]
        nodes: String,
    },

    /// Run a shell command on the nodes
    RunCommand {
        command: String,

        #[arg(short, long, default_value = DEFAULT_NODES)]
        nodes: String,
    },

    /// Run a task with environment variable parameters
    RunTask {
        task: String,

        #[arg(short, long = "env", value_name = "VAR=VALUE", value_parser = parse_env_assignment)]
        env: Vec<String>,

        #[arg(short, long, default_value = DEFAULT_NODES)]
        nodes: String,
    },

    /// Upload a file to the nodes
    UploadFile {
        source: String,

        destination: String,

        #[arg(short, long, default_value = DEFAULT_NODES)]
        nodes: String,
    },
}

/// Accept only `NAME=value` with a non-empty name
fn parse_env_assignment(raw: &str) -> std::result::Result<String, String> {
    match raw.split_once('=') {
        Some((name, _)) if !name.is_empty() && !name.contains(char::is_whitespace) => {
            Ok(raw.to_string())
        }
        _ => Err(format!("expected VAR=VALUE, got '{}'", raw)),
    }
}
