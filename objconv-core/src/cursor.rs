//! Seekable line reader over the input model

use std::io::{BufRead, Seek, SeekFrom};

use crate::error::Result;

/// Reads one owned line at a time and tracks its byte offset in the source.
///
/// Line terminators (`\n` or `\r\n`) are stripped from the returned text but
/// counted in the offsets, so an offset taken before a line can be seeked back
/// to later. Lines are read as raw bytes; anything that is not UTF-8 is
/// replaced with U+FFFD instead of failing the read.
pub struct LineCursor<R> {
    reader: R,
    offset: u64,
    line_number: usize,
    raw: Vec<u8>,
    line: String,
}

impl<R: BufRead + Seek> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            line_number: 0,
            raw: Vec::new(),
            line: String::new(),
        }
    }

    /// Byte offset of the next line to be read
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// 1-based number of the last line returned by `next_line`
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Move to an absolute byte offset. `offset` must be the start of a line.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset < self.offset {
            self.reader.seek(SeekFrom::Start(0))?;
            self.offset = 0;
            self.line_number = 0;
        }
        // Walk forward so line numbers stay exact for error reports
        while self.offset < offset {
            if self.next_line()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Read the next line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.raw.clear();
        let read = self.reader.read_until(b'\n', &mut self.raw)?;
        if read == 0 {
            return Ok(None);
        }
        self.offset += read as u64;
        self.line_number += 1;

        let mut text = self.raw.as_slice();
        if let Some(rest) = text.strip_suffix(b"\n") {
            text = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(text));
        Ok(Some(&self.line))
    }
}
