//! Vertex, texture coordinate and normal extraction
//!
//! Each extractor seeks to the start of its block, parses exactly as many
//! lines as the locator counted, converts them to the left-handed convention
//! and writes them out straight away. Nothing is retained.

use std::io::{self, BufRead, Seek, Write};

use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::geometry::BlockKind;
use crate::obj;
use crate::transform::Handedness;
use crate::writer::{ModelWriter, NORMALS_HEADER, TEXTURES_HEADER, VERTICES_HEADER};

pub fn extract_vertices<R, W>(
    cursor: &mut LineCursor<R>,
    writer: &mut ModelWriter<W>,
    before_vertices: u64,
    count: usize,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    writer.begin_section(VERTICES_HEADER)?;
    extract_block(
        cursor,
        BlockKind::Vertices,
        before_vertices,
        count,
        obj::parse_vertex,
        |v| writer.vertex(&Handedness::vertex(&v)),
    )?;
    writer.end_section()
}

pub fn extract_textures<R, W>(
    cursor: &mut LineCursor<R>,
    writer: &mut ModelWriter<W>,
    before_textures: u64,
    count: usize,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    writer.begin_section(TEXTURES_HEADER)?;
    extract_block(
        cursor,
        BlockKind::Textures,
        before_textures,
        count,
        obj::parse_texture,
        |t| writer.texture(&Handedness::texture(&t)),
    )?;
    writer.end_section()
}

pub fn extract_normals<R, W>(
    cursor: &mut LineCursor<R>,
    writer: &mut ModelWriter<W>,
    before_normals: u64,
    count: usize,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    writer.begin_section(NORMALS_HEADER)?;
    extract_block(
        cursor,
        BlockKind::Normals,
        before_normals,
        count,
        obj::parse_normal,
        |n| writer.normal(&Handedness::normal(&n)),
    )?;
    writer.end_section()
}

fn extract_block<R, T>(
    cursor: &mut LineCursor<R>,
    kind: BlockKind,
    before: u64,
    count: usize,
    parse: fn(&str) -> std::result::Result<(T, &str), String>,
    mut emit: impl FnMut(T) -> Result<()>,
) -> Result<()>
where
    R: BufRead + Seek,
{
    cursor.seek(before)?;

    for _ in 0..count {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("{} block ended early", kind),
                )))
            }
        };
        let parsed = parse(line).map(|(value, _)| value);
        let value = parsed.map_err(|reason| Error::Parse {
            kind,
            line: cursor.line_number(),
            reason,
        })?;
        emit(value)?;
    }

    Ok(())
}
