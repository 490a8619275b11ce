//! objconv - OBJ to indexed text model converter
//!
//! Usage: objconv <input.obj> [output.txt] [--normals] [--skip-existing]
//!                [--log-file <path>] [--quiet]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use objconv_cli::{CliArgs, CliConfig, ConverterApp};
use objconv_core::logging;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = CliConfig::from(args);

    if let Err(e) = logging::init(Some(&config.log_file), config.quiet) {
        eprintln!("warning: {}", e);
    }

    let app = ConverterApp::new(config);
    match app.run(&mut io::stdout()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
