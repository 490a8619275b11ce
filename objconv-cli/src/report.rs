//! Colored status lines for the terminal
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;

use objconv_core::{BlockLayout, Error};

pub fn converted<W: Write>(out: &mut W, input: &Path, output: &Path, layout: &BlockLayout) -> io::Result<()> {
    let counts = &layout.counts;
    let message = format!(
        "{} -> {} ({} vertices, {} texture coords, {} faces)",
        input.display(),
        output.display(),
        counts.vertices,
        counts.textures,
        counts.faces
    );
    status(out, Color::Green, "converted", &message)
}

pub fn skipped<W: Write>(out: &mut W, output: &Path) -> io::Result<()> {
    let message = format!("{} already exists", output.display());
    status(out, Color::Yellow, "skipped", &message)
}

pub fn failed<W: Write>(out: &mut W, input: &Path, error: &Error) -> io::Result<()> {
    let message = format!("{}: {}", input.display(), error);
    status(out, Color::Red, "failed", &message)
}

fn status<W: Write>(out: &mut W, color: Color, label: &str, message: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color),
        Print(format!("{:>10}", label)),
        ResetColor,
        Print(format!(" {}\n", message))
    )?;
    out.flush()
}
