//! Stands in for the `odin` compiler.
//!
//! Appends its arguments (one per line) to `$FAKE_ODIN_LOG`, writes an empty
//! artifact at the `-out:` path, then exits with `$FAKE_ODIN_EXIT` (0 by default).
use std::io::Write;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(log) = std::env::var_os("FAKE_ODIN_LOG") {
        let mut log = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log)
            .unwrap();
        for arg in &args {
            writeln!(log, "{arg}").unwrap();
        }
    }

    let code = std::env::var("FAKE_ODIN_EXIT")
        .ok()
        .and_then(|code| code.parse().ok())
        .unwrap_or(0);

    if code == 0 {
        if let Some(out) = args.iter().find_map(|arg| arg.strip_prefix("-out:")) {
            std::fs::write(out, b"").unwrap();
        }
    }

    std::process::exit(code);
}
