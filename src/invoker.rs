use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use console::style;

use crate::cli::Args;
use crate::error::BuildError;
use crate::odin::Toolchain;
use crate::platform::Platform;

/// Resolves `path` against the current directory and normalizes it lexically, without following symlinks
///
/// An empty path resolves to the current directory.
pub fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let path = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve `{}`", path.display()))?;

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            component => normalized.push(component),
        }
    }

    Ok(normalized)
}

/// Builds the binary of an Odin project by invoking `odin build`
pub struct BuildInvoker {
    debug: bool,
    source_dir: PathBuf,
    output_dir: PathBuf,
    platform: Platform,
    verbose: bool,
    compiler_args: Vec<String>,
}

impl BuildInvoker {
    /// Creates an invoker building `source_dir` into `output_dir`, naming the executable for `platform`
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        platform: Platform,
    ) -> Self {
        Self {
            debug: false,
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            platform,
            verbose: false,
            compiler_args: Vec::new(),
        }
    }

    /// Creates an invoker for the host platform from the command line
    pub fn from_args(args: &Args) -> Self {
        Self::new(&args.source_dir, &args.output_dir, Platform::host())
            .debug(args.debug)
            .verbose(args.verbose)
            .compiler_args(args.args.clone())
    }

    /// Requests a debug variant of the binary
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Prints the compiler command line before running it
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Extra arguments appended to the compiler command line
    pub fn compiler_args(mut self, args: Vec<String>) -> Self {
        self.compiler_args = args;
        self
    }

    /// Returns the arguments given to the compiler to build `source_dir` into `output_path`
    pub fn build_args(&self, source_dir: &Path, output_path: &Path) -> Vec<OsString> {
        let mut out = OsString::from("-out:");
        out.push(output_path);

        let mut args = vec!["build".into(), source_dir.into(), out];
        if self.debug {
            args.push("-debug".into());
        }
        args.extend(self.compiler_args.iter().map(OsString::from));

        args
    }

    /// Builds the project and returns the path of the binary.
    ///
    /// The output directory is created before the source directory is checked.
    pub fn build(&self, toolchain: &impl Toolchain) -> anyhow::Result<PathBuf> {
        let output_dir = absolute(&self.output_dir)?;
        if !output_dir.exists() {
            println!(
                "{:>12} {}",
                style("Creating").bold().green(),
                output_dir.display()
            );
            std::fs::create_dir_all(&output_dir).with_context(|| {
                format!("Failed to create output directory `{}`", output_dir.display())
            })?;
        }

        let source_dir = absolute(&self.source_dir)?;
        if !source_dir.exists() {
            return Err(BuildError::MissingSourceDirectory { path: source_dir }.into());
        }

        let exe_name = self.platform.exe_name(&source_dir).ok_or_else(|| {
            anyhow::anyhow!(
                "Failed to name the executable: `{}` has no base name",
                source_dir.display()
            )
        })?;
        let output_path = output_dir.join(&exe_name);

        println!(
            "{:>12} {}{} ({})",
            style("Compiling").bold().green(),
            exe_name.to_string_lossy(),
            if self.debug { " [debug]" } else { "" },
            source_dir.display()
        );

        let args = self.build_args(&source_dir, &output_path);
        if self.verbose {
            println!(
                "{:>12} `{}`",
                style("Running").bold().green(),
                toolchain.command_line(&args)
            );
        }

        match toolchain.run(&args)? {
            Some(0) => {}
            code => return Err(BuildError::BuildProcessFailure { code }.into()),
        }

        println!(
            "{:>12} ({})",
            style("Finished").bold().green(),
            output_path.display()
        );

        Ok(output_path)
    }
}
