use std::process::{Command, Stdio};

use colored::Colorize;

use crate::error::{Result, ScaffoldError};
use crate::planner::CommandSpec;

/// Executes one-shot setup commands. A failed command is fatal; nothing is retried.
pub trait ProcessRunner: Sync {
    fn run(&self, command: &CommandSpec) -> Result<()>;
}

/// Runs commands with the system's process API, inheriting the terminal.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ScaffoldError::Process {
                command: command.to_string(),
                reason: format!(
                    "could not be started in {}: {}. Is {} installed?",
                    command.working_dir.display(),
                    e,
                    command.program
                ),
            })?;

        if !status.success() {
            return Err(ScaffoldError::Process {
                command: command.to_string(),
                reason: format!("failed with {}", status),
            });
        }
        Ok(())
    }
}

/// Prints commands instead of running them
pub struct DryRunRunner;

impl ProcessRunner for DryRunRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        println!(
            "  {} {} {}",
            "Would run:".cyan(),
            command.to_string().bold(),
            format!("(in {})", command.working_dir.display()).dimmed()
        );
        Ok(())
    }
}

/// Records commands without running them
#[cfg(test)]
#[derive(Default)]
pub struct RecordingRunner {
    commands: std::sync::Mutex<Vec<CommandSpec>>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(command.clone());
        Ok(())
    }
}
