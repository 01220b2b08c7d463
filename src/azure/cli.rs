//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and parsing their output.

use crate::config;
use crate::error::{ClickOpsError, Result};
use colored::Colorize;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::process::{Command, Output};
use std::sync::OnceLock;

/// One argument: a single-quoted run, a double-quoted run, or a bare word.
static ARG_REGEX: OnceLock<Regex> = OnceLock::new();

fn arg_regex() -> &'static Regex {
    ARG_REGEX.get_or_init(|| {
        Regex::new(r#"'(?P<single>[^']*)'|"(?P<double>[^"]*)"|(?P<bare>\S+)"#)
            .expect("Invalid Regex")
    })
}

/// Handle to the Azure CLI binary.
#[derive(Debug, Clone)]
pub struct AzCli {
    program: String,
}

impl Default for AzCli {
    fn default() -> Self {
        AzCli::new(config::AZ_CLI_PROGRAM)
    }
}

impl AzCli {
    /// `program` is split like any other command line, so it may carry leading
    /// arguments (`sh '/path/to/fake-az.sh'`).
    pub fn new(program: impl Into<String>) -> AzCli {
        AzCli {
            program: program.into(),
        }
    }

    /// Run `az <args>` and return its stdout.
    ///
    /// # Returns
    /// * `Ok(String)` - The stdout output on success
    /// * `Err` - Binary missing, non-zero exit, oversized or non UTF-8 output
    pub fn run(&self, args: &str) -> Result<String> {
        let cmd = format!("{} {}", self.program, args);
        let output = self.output(&cmd)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!(
                "{} {} ({})",
                "az call failed:".on_red(),
                cmd.on_blue(),
                output.status
            );
            log::debug!("stderr of failed az call:\n{}", stderr.red());
            return Err(ClickOpsError::CommandFailed {
                cmd,
                code: output.status.code(),
                stderr,
            });
        }

        log::debug!("az returned {} bytes", output.stdout.len());

        if output.stdout.len() > config::MAX_RESPONSE_BYTES {
            return Err(ClickOpsError::ResponseTooLarge {
                bytes: output.stdout.len(),
                cmd,
            });
        }

        String::from_utf8(output.stdout).map_err(|e| ClickOpsError::Parse {
            cmd,
            path: ".".to_string(),
            details: format!("invalid UTF-8: {e}"),
        })
    }

    /// Run `az <args>` and deserialize its stdout as JSON.
    pub fn run_json<T: DeserializeOwned>(&self, args: &str) -> Result<T> {
        let output = self.run(args)?;
        parse_json(&output, &format!("{} {}", self.program, args))
    }

    /// Run `az <args>` attached to the terminal (used for `az login`).
    pub fn run_interactive(&self, args: &str) -> Result<()> {
        let cmd = format!("{} {}", self.program, args);
        log::debug!("run_interactive({cmd})", cmd = cmd.on_blue());
        let status = self.command(&cmd).status().map_err(|e| spawn_error(&cmd, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClickOpsError::CommandFailed {
                cmd,
                code: status.code(),
                stderr: format!("exited with {status}"),
            })
        }
    }

    fn output(&self, cmd: &str) -> Result<Output> {
        log::debug!("run({cmd})", cmd = cmd.on_blue());
        self.command(cmd).output().map_err(|e| spawn_error(cmd, e))
    }

    fn command(&self, cmd: &str) -> Command {
        let argv = split_command_line(cmd);
        log::trace!("argv={:?}", argv);

        let mut command = Command::new(argv[0]);
        command.args(&argv[1..]);
        command
    }
}

/// Parse a JSON document, reporting the failing path.
pub fn parse_json<T: DeserializeOwned>(json: &str, cmd: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", json);
        ClickOpsError::Parse {
            cmd: cmd.to_string(),
            path: e.path().to_string(),
            details: e.inner().to_string(),
        }
    })
}

fn spawn_error(cmd: &str, e: std::io::Error) -> ClickOpsError {
    log::error!("Command execution failed: {}", e);
    if e.kind() == ErrorKind::NotFound {
        let program = split_command_line(cmd).first().copied().unwrap_or_default();
        ClickOpsError::ToolNotFound {
            program: program.to_string(),
        }
    } else {
        ClickOpsError::Spawn {
            cmd: cmd.to_string(),
            source: e,
        }
    }
}

/// Split an az command line into argv. Quotes group words and are dropped;
/// nothing is escaped inside them.
fn split_command_line(line: &str) -> Vec<&str> {
    arg_regex()
        .captures_iter(line)
        .filter_map(|caps| {
            caps.name("single")
                .or_else(|| caps.name("double"))
                .or_else(|| caps.name("bare"))
        })
        .map(|m| m.as_str())
        .collect()
}
