//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use objconv_core::logging::DEFAULT_LOG_FILE;
use objconv_core::ConvertOptions;

/// objconv command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "objconv",
    version,
    about = "Converts a Wavefront OBJ model into the indexed text model format",
    after_help = "Environment:\n  \
        RUST_LOG          Log filter, e.g. `debug` or `objconv_core=debug`\n  \
        OBJCONV_DEBUG     Log at debug level when RUST_LOG is unset"
)]
pub struct CliArgs {
    /// Wavefront OBJ model to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Output file; defaults to the input path with a .txt extension.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
    /// Also write normals count and data.
    #[arg(long)]
    pub normals: bool,
    /// Do nothing if the output file already exists.
    #[arg(long)]
    pub skip_existing: bool,
    /// Log file, truncated on start.
    #[arg(long, value_name = "FILE", env = "OBJCONV_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
    /// Don't log to the console.
    #[arg(long)]
    pub quiet: bool,
}

/// Settings for one run of the converter
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
    pub log_file: PathBuf,
    pub quiet: bool,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let output = args
            .output
            .unwrap_or_else(|| args.input.with_extension("txt"));
        Self {
            input: args.input,
            output,
            options: ConvertOptions {
                emit_normals: args.normals,
                skip_existing: args.skip_existing,
            },
            log_file: args.log_file,
            quiet: args.quiet,
        }
    }
}
