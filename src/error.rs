use std::path::PathBuf;

/// Fatal failures of a build, each mapped to the exit code of the wrapper
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The source directory does not exist, so the compiler was never started
    #[error("Source directory `{}` does not exist", .path.display())]
    MissingSourceDirectory { path: PathBuf },

    /// The compiler exited with a non-zero status, or was killed by a signal (`code` is `None`)
    #[error("The compiler failed ({})", describe_exit(.code))]
    BuildProcessFailure { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by a signal".to_owned(),
    }
}

impl BuildError {
    /// Exit code used for every failure that has no exit code of its own
    pub const FAILURE: u8 = 1;

    /// Returns the exit code the wrapper should terminate with.
    ///
    /// The compiler's own exit code is mirrored when it fits in a process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::BuildProcessFailure { code: Some(code) } => u8::try_from(*code)
                .ok()
                .filter(|&code| code != 0)
                .unwrap_or(Self::FAILURE),
            _ => Self::FAILURE,
        }
    }
}
