use std::path::PathBuf;

use clap::ColorChoice;

#[derive(clap::Parser)]
#[command(name = "odin-build", version, author, about, long_about)]
pub struct Args {
    /// Build a debug variant of the project
    #[clap(long)]
    pub debug: bool,

    /// Project source directory
    #[clap(long, value_name = "PATH", default_value = "bin")]
    pub source_dir: PathBuf,

    /// Directory to place built binaries
    #[clap(long, value_name = "PATH", default_value = "bin")]
    pub output_dir: PathBuf,

    /// Odin compiler to invoke
    #[clap(long, value_name = "PROGRAM", env = "ODIN", default_value = "odin")]
    pub compiler: PathBuf,

    /// Print the compiler command line before running it
    #[clap(short, long)]
    pub verbose: bool,

    /// Color preferences for program output
    #[clap(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Arguments given to odin build
    #[clap(raw = true)]
    pub args: Vec<String>,
}
