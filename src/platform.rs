use std::ffi::OsString;
use std::path::Path;

use target_lexicon::{OperatingSystem, Triple};

/// Family of operating systems that decides how executables are named
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    /// Executables end with `.exe`
    Windows,
    /// Executables have no extension
    Other,
}

impl Platform {
    /// Returns the platform the wrapper is running on
    pub fn host() -> Self {
        Self::from_triple(&Triple::host())
    }

    /// Returns the platform of a target triple
    pub fn from_triple(triple: &Triple) -> Self {
        match triple.operating_system {
            OperatingSystem::Windows => Self::Windows,
            _ => Self::Other,
        }
    }

    /// Suffix appended to executables (e.g., `.exe`)
    pub const fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Other => "",
        }
    }

    /// Name of the executable built from the project in `source_dir`.
    ///
    /// Returns `None` if the path has no base name (e.g., `/`).
    pub fn exe_name(self, source_dir: &Path) -> Option<OsString> {
        let mut name = source_dir.file_name()?.to_owned();
        name.push(self.exe_suffix());

        Some(name)
    }
}
