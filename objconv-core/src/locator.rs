//! Block boundary detection
//!
//! An OBJ file is scanned once, front to back, to find where the vertex,
//! texture, normal and face blocks start and how many lines each holds. The
//! extractors later seek straight to those offsets.

use std::io::{BufRead, Seek};

use crate::cursor::LineCursor;
use crate::error::Result;
use crate::geometry::{BlockBoundaries, BlockKind, BlockLayout, Counts};

/// Scan the whole input and work out the layout of its data blocks.
///
/// Vertex, texture and normal blocks must be contiguous. Face lines may be
/// interleaved with comments, groups or blank lines. A block that is missing
/// gets a count of zero and the offset of whatever follows it.
pub fn locate_blocks<R: BufRead + Seek>(cursor: &mut LineCursor<R>) -> Result<BlockLayout> {
    cursor.seek(0)?;

    let mut boundaries = BlockBoundaries::default();
    let mut counts = Counts::default();

    let mut scan = BlockScan::start(cursor)?;
    boundaries.before_vertices = scan.line_start;

    let (vertices, before_textures) = scan.count_block(cursor, BlockKind::Vertices)?;
    let (textures, before_normals) = scan.count_block(cursor, BlockKind::Textures)?;
    let (normals, before_faces) = scan.count_block(cursor, BlockKind::Normals)?;
    counts.vertices = vertices;
    counts.textures = textures;
    counts.normals = normals;
    boundaries.before_textures = before_textures;
    boundaries.before_normals = before_normals;
    boundaries.before_faces = before_faces;

    counts.faces = scan.count_faces(cursor)?;

    Ok(BlockLayout { boundaries, counts })
}

/// The line the scan is currently looking at, kept across block counts
struct BlockScan {
    line: Option<String>,
    line_start: u64,
}

impl BlockScan {
    /// Skip everything up to the first line starting with `v`
    fn start<R: BufRead + Seek>(cursor: &mut LineCursor<R>) -> Result<Self> {
        loop {
            let line_start = cursor.position();
            match cursor.next_line()? {
                Some(line) if line.starts_with('v') => {
                    return Ok(Self {
                        line: Some(line.to_string()),
                        line_start,
                    })
                }
                Some(_) => continue,
                None => {
                    return Ok(Self {
                        line: None,
                        line_start,
                    })
                }
            }
        }
    }

    fn advance<R: BufRead + Seek>(&mut self, cursor: &mut LineCursor<R>) -> Result<()> {
        self.line_start = cursor.position();
        self.line = cursor.next_line()?.map(str::to_string);
        Ok(())
    }

    fn current_kind(&self) -> Option<BlockKind> {
        self.line.as_deref().and_then(BlockKind::of_line)
    }

    /// Count the contiguous lines of `kind`, then skip ahead to the next data
    /// line of any kind. Returns the count and the offset the following block
    /// starts at.
    fn count_block<R: BufRead + Seek>(
        &mut self,
        cursor: &mut LineCursor<R>,
        kind: BlockKind,
    ) -> Result<(usize, u64)> {
        let mut count = 0;
        while self.line.is_some() && self.current_kind() == Some(kind) {
            count += 1;
            self.advance(cursor)?;
        }

        while self.line.is_some() && self.current_kind().is_none() {
            self.advance(cursor)?;
        }

        Ok((count, self.line_start))
    }

    /// Tally every face line from here to the end of the input
    fn count_faces<R: BufRead + Seek>(&mut self, cursor: &mut LineCursor<R>) -> Result<usize> {
        let mut faces = 0;
        while self.line.is_some() {
            if self.current_kind() == Some(BlockKind::Faces) {
                faces += 1;
            }
            self.advance(cursor)?;
        }
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn layout(text: &str) -> BlockLayout {
        let mut cursor = LineCursor::new(Cursor::new(text.as_bytes().to_vec()));
        locate_blocks(&mut cursor).unwrap()
    }

    const CUBE_CORNER: &str = "# exported\n\
        mtllib a.mtl\n\
        o Corner\n\
        v 0 0 0\n\
        v 1 0 0\n\
        v 0 1 0\n\
        vt 0 0\n\
        vt 1 0\n\
        vn 0 0 1\n\
        usemtl None\n\
        s off\n\
        f 1/1/1 2/2/1 3/1/1\n";

    #[test]
    fn test_counts() {
        let layout = layout(CUBE_CORNER);
        assert_eq!(
            layout.counts,
            Counts {
                vertices: 3,
                textures: 2,
                normals: 1,
                faces: 1
            }
        );
    }

    #[test]
    fn test_boundaries_point_at_block_starts() {
        let layout = layout(CUBE_CORNER);
        let b = layout.boundaries;
        assert!(CUBE_CORNER[b.before_vertices as usize..].starts_with("v 0 0 0"));
        assert!(CUBE_CORNER[b.before_textures as usize..].starts_with("vt 0 0"));
        assert!(CUBE_CORNER[b.before_normals as usize..].starts_with("vn 0 0 1"));
        assert!(CUBE_CORNER[b.before_faces as usize..].starts_with("f 1/1/1"));
    }

    #[test]
    fn test_interleaved_faces_are_all_counted() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\n\
                    g first\nf 1/1/1 2/1/1 3/1/1\n# note\n\nf 3/1/1 2/1/1 1/1/1\n";
        assert_eq!(layout(text).counts.faces, 2);
    }

    #[test]
    fn test_missing_textures_and_normals() {
        let text = "v 1.0 2.0 3.0\nf 1/1/1 1/1/1 1/1/1\n";
        let layout = layout(text);
        assert_eq!(layout.counts.vertices, 1);
        assert_eq!(layout.counts.textures, 0);
        assert_eq!(layout.counts.normals, 0);
        assert_eq!(layout.counts.faces, 1);
        let b = layout.boundaries;
        assert_eq!(b.before_textures, b.before_faces);
        assert_eq!(b.before_normals, b.before_faces);
        assert!(text[b.before_faces as usize..].starts_with("f "));
    }

    #[test]
    fn test_boundaries_are_monotonic() {
        let b = layout(CUBE_CORNER).boundaries;
        assert!(b.before_vertices <= b.before_textures);
        assert!(b.before_textures <= b.before_normals);
        assert!(b.before_normals <= b.before_faces);
    }

    #[test]
    fn test_no_data_at_all() {
        let text = "# nothing here\n\n";
        let layout = layout(text);
        assert_eq!(layout.counts, Counts::default());
        assert_eq!(layout.boundaries.before_faces, text.len() as u64);
    }

    #[test]
    fn test_blank_lines_between_blocks() {
        let text = "v 0 0 0\n\n\nvt 0.5 0.5\n\nvn 0 1 0\n\n\nf 1/1/1 1/1/1 1/1/1\n";
        let layout = layout(text);
        assert_eq!(layout.counts.vertices, 1);
        assert_eq!(layout.counts.textures, 1);
        assert_eq!(layout.counts.normals, 1);
        assert_eq!(layout.counts.faces, 1);
    }
}
