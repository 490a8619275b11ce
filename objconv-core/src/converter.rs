//! Conversion driver: locate, extract, write

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::extract::{extract_normals, extract_textures, extract_vertices};
use crate::faces::extract_faces;
use crate::geometry::BlockLayout;
use crate::locator::locate_blocks;
use crate::log::{ConvertLog, TracingLog};
use crate::writer::ModelWriter;

/// Switches for a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Also write a normals count and a `Normals Data:` section
    pub emit_normals: bool,
    /// Leave an existing output file untouched and report the conversion as skipped
    pub skip_existing: bool,
}

/// What a call to [`ObjConverter::convert`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted(BlockLayout),
    SkippedExisting,
}

/// Converts OBJ models into the indexed text format.
///
/// The converter keeps no state between conversions; every call starts from
/// a fresh cursor, layout and set of index buffers, so one instance can be
/// reused for any number of files.
pub struct ObjConverter<L = TracingLog> {
    options: ConvertOptions,
    log: L,
}

impl ObjConverter<TracingLog> {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_log(options, TracingLog)
    }
}

impl Default for ObjConverter<TracingLog> {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl<L: ConvertLog> ObjConverter<L> {
    pub fn with_log(options: ConvertOptions, log: L) -> Self {
        Self { options, log }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the file at `input` and write the result to `output`.
    ///
    /// The input is opened before the output is created, so a missing input
    /// never leaves an output file behind. A failure part-way through leaves
    /// whatever was written so far.
    pub fn convert(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Outcome> {
        let (input, output) = (input.as_ref(), output.as_ref());
        self.log.debug(
            "convert",
            &format!("IN: {}, OUT: {}", input.display(), output.display()),
        );

        if self.options.skip_existing && output.exists() {
            self.log.debug(
                "convert",
                &format!("{} already exists, skipping", output.display()),
            );
            return Ok(Outcome::SkippedExisting);
        }

        let reader = File::open(input).map_err(|source| Error::Open {
            path: input.to_path_buf(),
            source,
        });
        let reader = self.report("convert", "can't open input data file", reader)?;

        let writer = File::create(output).map_err(|source| Error::Open {
            path: output.to_path_buf(),
            source,
        });
        let writer = self.report("convert", "can't open the output data file", writer)?;

        let layout = self.convert_streams(BufReader::new(reader), BufWriter::new(writer));
        let layout = self.report("convert", "can't convert model's data from .obj type", layout)?;
        Ok(Outcome::Converted(layout))
    }

    /// Convert from any seekable reader into any writer
    pub fn convert_streams<R, W>(&self, input: R, output: W) -> Result<BlockLayout>
    where
        R: BufRead + Seek,
        W: Write,
    {
        let mut cursor = LineCursor::new(input);
        let mut writer = ModelWriter::new(output);

        let layout = self.report("locate_blocks", "can't locate data blocks", locate_blocks(&mut cursor))?;
        self.log_layout(&layout);
        let (b, counts) = (layout.boundaries, layout.counts);

        writer.write_counts(&counts, self.options.emit_normals)?;

        let result = extract_vertices(&mut cursor, &mut writer, b.before_vertices, counts.vertices);
        self.report("extract_vertices", "can't read/write vertices data", result)?;
        self.log.debug("extract_vertices", "vertices data was handled correctly");

        let result = extract_textures(&mut cursor, &mut writer, b.before_textures, counts.textures);
        self.report("extract_textures", "can't read/write textures data", result)?;
        self.log.debug("extract_textures", "texture data was handled correctly");

        if self.options.emit_normals {
            let result = extract_normals(&mut cursor, &mut writer, b.before_normals, counts.normals);
            self.report("extract_normals", "can't read/write normals data", result)?;
            self.log.debug("extract_normals", "normals data was handled correctly");
        }

        let result = extract_faces(&mut cursor, b.before_faces, counts.faces, &self.log);
        let buffers = self.report("extract_faces", "can't read in faces data", result)?;
        self.log.debug("extract_faces", "faces data was read in successfully");

        let result = writer.write_indices(&buffers).and_then(|()| writer.finish());
        self.report("write_indices", "can't write indices data", result)?;
        self.log.debug("write_indices", "faces data was written successfully");

        Ok(layout)
    }

    fn log_layout(&self, layout: &BlockLayout) {
        let b = &layout.boundaries;
        let c = &layout.counts;
        self.log.debug(
            "locate_blocks",
            &format!(
                "before vertices: {}, textures: {}, normals: {}, faces: {}",
                b.before_vertices, b.before_textures, b.before_normals, b.before_faces
            ),
        );
        self.log.debug(
            "locate_blocks",
            &format!(
                "counts: {} vertices, {} textures, {} normals, {} faces",
                c.vertices, c.textures, c.normals, c.faces
            ),
        );
    }

    fn report<T>(&self, site: &str, context: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.log.error(site, &format!("{}: {}", context, e));
        }
        result
    }
}

/// Convert `input` into `output` with default options, logging through
/// `tracing`. Returns whether the conversion succeeded.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> bool {
    ObjConverter::default().convert(input, output).is_ok()
}
