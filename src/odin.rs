use std::ffi::{OsStr, OsString};
use std::process::Command;

use anyhow::Context;

/// Something able to run the compiler with a list of arguments
pub trait Toolchain {
    /// Runs the compiler to completion and returns its exit code, or `None` if it was terminated by a signal
    fn run(&self, args: &[OsString]) -> anyhow::Result<Option<i32>>;

    /// Renders the command line that [`Toolchain::run`] executes, for display purposes
    fn command_line(&self, args: &[OsString]) -> String;
}

/// Wrapper around the `odin` command
pub struct Odin {
    program: OsString,
}

impl Odin {
    /// Creates a wrapper running `program` (a name looked up in `PATH`, or a path)
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);

        command
    }
}

impl Default for Odin {
    fn default() -> Self {
        Self::new("odin")
    }
}

impl Toolchain for Odin {
    fn run(&self, args: &[OsString]) -> anyhow::Result<Option<i32>> {
        let status = self
            .command(args)
            .status()
            .with_context(|| format!("Failed to execute `{}`", self.program.to_string_lossy()))?;

        Ok(status.code())
    }

    fn command_line(&self, args: &[OsString]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
