//! Builds the binary of an Odin project by invoking `odin build`.
use std::process::ExitCode;

use clap::{ColorChoice, Parser};

use console::style;

mod cli;
mod error;
mod invoker;
mod odin;
mod platform;

use crate::cli::Args;
use crate::error::BuildError;
use crate::invoker::BuildInvoker;
use crate::odin::Odin;

fn run(args: &Args) -> anyhow::Result<()> {
    if args.color == ColorChoice::Never {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    } else if args.color == ColorChoice::Always {
        console::set_colors_enabled(true);
        console::set_colors_enabled_stderr(true);
    }

    let odin = Odin::new(&args.compiler);
    BuildInvoker::from_args(args).build(&odin)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").for_stderr().bold().red());
            let code = e
                .downcast_ref::<BuildError>()
                .map_or(BuildError::FAILURE, BuildError::exit_code);

            ExitCode::from(code)
        }
    }
}
