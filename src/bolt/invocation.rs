// file: src/bolt/invocation.rs
// version: 1.0.0
// guid: 9b2e61d4-3a7c-4f05-b8e1-6c0d2a95f317

//! Bolt command line templates
//!
//! Arguments are interpolated verbatim. No shell escaping is applied, so
//! callers must quote anything that has to survive `/bin/sh` intact.

use std::fmt;

/// The Bolt sub-command an invocation runs, with its positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// `command run '<command>'`
    CommandRun { command: String },
    /// `task run <task> <env vars> --modulepath <path>`
    TaskRun {
        task: String,
        env_vars: String,
        module_path: String,
    },
    /// `file upload <source> <destination>`
    FileUpload { source: String, destination: String },
}

/// One rendered call of the orchestration tool against a node selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub tool: String,
    pub verb: Verb,
    pub nodes: String,
}

impl CommandInvocation {
    pub fn command_run(tool: &str, command: &str, nodes: &str) -> Self {
        Self {
            tool: tool.to_string(),
            verb: Verb::CommandRun {
                command: command.to_string(),
            },
            nodes: nodes.to_string(),
        }
    }

    pub fn task_run(tool: &str, task: &str, env_vars: &str, module_path: &str, nodes: &str) -> Self {
        Self {
            tool: tool.to_string(),
            verb: Verb::TaskRun {
                task: task.to_string(),
                env_vars: env_vars.to_string(),
                module_path: module_path.to_string(),
            },
            nodes: nodes.to_string(),
        }
    }

    pub fn file_upload(tool: &str, source: &str, destination: &str, nodes: &str) -> Self {
        Self {
            tool: tool.to_string(),
            verb: Verb::FileUpload {
                source: source.to_string(),
                destination: destination.to_string(),
            },
            nodes: nodes.to_string(),
        }
    }

    /// Render the full shell command line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verb {
            Verb::CommandRun { command } => write!(
                f,
                "{} command run '{}' --nodes {}",
                self.tool, command, self.nodes
            ),
            Verb::TaskRun {
                task,
                env_vars,
                module_path,
            } => write!(
                f,
                "{} task run {} {} --modulepath {} --nodes {}",
                self.tool, task, env_vars, module_path, self.nodes
            ),
            Verb::FileUpload {
                source,
                destination,
            } => write!(
                f,
                "{} file upload {} {} --nodes {}",
                self.tool, source, destination, self.nodes
            ),
        }
    }
}

/// Shell snippet that creates `path` (with parents) unless it is already a directory
pub fn ensure_dir_snippet(path: &str) -> String {
    format!("[ -d {} ] || mkdir -p {}", path, path)
}
