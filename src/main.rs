mod convert;
mod error;
mod logging;
mod theme;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("terco converts Visual Studio Code color theme to Windows Terminal color theme");
    println!();
    println!("USAGE:");
    println!("\tterco <vscode-theme-file>");
    println!();
}

fn print_version() {
    println!("terco {}", VERSION);
}

fn main() -> ExitCode {
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    let path = match args.as_slice() {
        [arg] if arg == "-h" || arg == "--help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        [arg] if arg == "-v" || arg == "-V" || arg == "--version" => {
            print_version();
            return ExitCode::SUCCESS;
        }
        [path] => Path::new(path),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    logging::init();

    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = convert::convert_file(path)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&json)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
