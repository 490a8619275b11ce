//! Face index extraction

use std::io::{BufRead, Seek};

use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::geometry::{BlockKind, FaceIndexBuffers};
use crate::log::ConvertLog;
use crate::obj::{self, FaceCorner};

/// Read every face from `before_faces` to the end of the input.
///
/// Non-face lines are skipped, so faces may be split up by comments, group
/// statements or blank lines. Indices come back 0-based. The normal index of
/// each corner is validated and dropped.
pub fn extract_faces<R, L>(
    cursor: &mut LineCursor<R>,
    before_faces: u64,
    count: usize,
    log: &L,
) -> Result<FaceIndexBuffers>
where
    R: BufRead + Seek,
    L: ConvertLog + ?Sized,
{
    cursor.seek(before_faces)?;
    let mut buffers = FaceIndexBuffers::with_faces(count);

    loop {
        let parsed = match cursor.next_line()? {
            Some(line) if BlockKind::Faces.matches(line) => {
                obj::parse_face(line).map(|(corners, tail)| (corners, !tail.is_empty()))
            }
            Some(_) => continue,
            None => break,
        };
        let number = cursor.line_number();

        let (corners, has_tail) = parsed.map_err(|reason| Error::FaceParse {
            line: number,
            reason,
        })?;
        if has_tail {
            log.debug(
                "extract_faces",
                &format!("line {}: only the first three corners are used", number),
            );
        }

        for corner in &corners {
            let (vertex, texture) = zero_based(corner).map_err(|reason| Error::FaceParse {
                line: number,
                reason,
            })?;
            buffers.push_corner(vertex, texture);
        }
    }

    if buffers.face_count() != count {
        return Err(Error::FaceCountMismatch {
            expected: count,
            found: buffers.face_count(),
        });
    }

    Ok(buffers)
}

fn zero_based(corner: &FaceCorner) -> std::result::Result<(u32, u32), String> {
    let shift = |index: u32, what: &str| {
        index
            .checked_sub(1)
            .ok_or_else(|| format!("{} index 0 is out of range, indices start at 1", what))
    };
    let vertex = shift(corner.vertex, "vertex")?;
    let texture = shift(corner.texture, "texture")?;
    shift(corner.normal, "normal")?;
    Ok((vertex, texture))
}
