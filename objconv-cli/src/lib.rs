//! Command-line front end for the OBJ model converter

use std::io::{self, Write};

use objconv_core::{ObjConverter, Outcome};

pub mod config;
pub mod report;

pub use config::{CliArgs, CliConfig};

/// Runs one conversion described by a [`CliConfig`] and reports the result
pub struct ConverterApp {
    config: CliConfig,
    converter: ObjConverter,
}

impl ConverterApp {
    pub fn new(config: CliConfig) -> Self {
        let converter = ObjConverter::new(config.options);
        Self { config, converter }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Convert and print a status line to `out`. Returns whether the
    /// conversion succeeded; a skipped conversion counts as success.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let CliConfig { input, output, .. } = &self.config;
        tracing::info!(input = %input.display(), output = %output.display(), "converting model");

        match self.converter.convert(input, output) {
            Ok(Outcome::Converted(layout)) => {
                report::converted(out, input, output, &layout)?;
                Ok(true)
            }
            Ok(Outcome::SkippedExisting) => {
                report::skipped(out, output)?;
                Ok(true)
            }
            Err(e) => {
                report::failed(out, input, &e)?;
                Ok(false)
            }
        }
    }
}
