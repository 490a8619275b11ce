//! Serialization of the converted model
//!
//! The output is plain text: a block of counts followed by titled sections,
//! each separated from the next by one blank line.

use std::io::Write;

use crate::error::Result;
use crate::geometry::{Counts, FaceIndexBuffers, Normal, TextureCoord, Vertex3D};
use crate::transform::Handedness;

pub const VERTICES_HEADER: &str = "Vertices Data:";
pub const TEXTURES_HEADER: &str = "Textures Data:";
pub const NORMALS_HEADER: &str = "Normals Data:";
pub const VERTEX_INDICES_HEADER: &str = "Vertex Indices Data:";
pub const TEXTURE_INDICES_HEADER: &str = "Texture Indices Data:";

/// Writes the sections of one converted model, in order
pub struct ModelWriter<W: Write> {
    out: W,
}

impl<W: Write> ModelWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Counts header. The normals count is only present when normals are
    /// emitted.
    pub fn write_counts(&mut self, counts: &Counts, with_normals: bool) -> Result<()> {
        writeln!(self.out, "Vertex Count: {}", counts.vertices)?;
        writeln!(self.out, "Indices Count: {}", counts.indices())?;
        writeln!(self.out, "Textures Count: {}", counts.textures)?;
        if with_normals {
            writeln!(self.out, "Normals Count: {}", counts.normals)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn begin_section(&mut self, header: &str) -> Result<()> {
        writeln!(self.out, "{}", header)?;
        Ok(())
    }

    pub fn end_section(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn vertex(&mut self, v: &Vertex3D) -> Result<()> {
        writeln!(self.out, "{:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
        Ok(())
    }

    pub fn texture(&mut self, t: &TextureCoord) -> Result<()> {
        writeln!(self.out, "{:.6} {:.6}", t.x, t.y)?;
        Ok(())
    }

    pub fn normal(&mut self, n: &Normal) -> Result<()> {
        writeln!(self.out, "{:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        Ok(())
    }

    /// Write both index sections, one face per line, each face's corners
    /// reversed.
    pub fn write_indices(&mut self, buffers: &FaceIndexBuffers) -> Result<()> {
        self.begin_section(VERTEX_INDICES_HEADER)?;
        self.index_lines(&buffers.vertex_indices)?;
        self.end_section()?;

        self.begin_section(TEXTURE_INDICES_HEADER)?;
        self.index_lines(&buffers.texture_indices)?;
        Ok(())
    }

    fn index_lines(&mut self, indices: &[u32]) -> Result<()> {
        for face in indices.chunks_exact(3) {
            let [a, b, c] = Handedness::winding(&[face[0], face[1], face[2]]);
            writeln!(self.out, "{} {} {}", a, b, c)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut ModelWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut writer = ModelWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_counts_header() {
        let counts = Counts {
            vertices: 8,
            textures: 14,
            normals: 6,
            faces: 12,
        };
        let text = written(|w| w.write_counts(&counts, false));
        assert_eq!(text, "Vertex Count: 8\nIndices Count: 36\nTextures Count: 14\n\n");

        let text = written(|w| w.write_counts(&counts, true));
        assert!(text.ends_with("Textures Count: 14\nNormals Count: 6\n\n"));
    }

    #[test]
    fn test_fixed_point_formatting() {
        let text = written(|w| w.vertex(&Vertex3D::new(1.0, 0.5, -3.25)));
        assert_eq!(text, "1.000000 0.500000 -3.250000\n");
    }

    #[test]
    fn test_indices_are_reversed_per_face() {
        let buffers = FaceIndexBuffers {
            vertex_indices: vec![0, 1, 2, 3, 4, 5],
            texture_indices: vec![6, 7, 8, 9, 10, 11],
        };
        let text = written(|w| w.write_indices(&buffers));
        assert_eq!(
            text,
            "Vertex Indices Data:\n2 1 0\n5 4 3\n\nTexture Indices Data:\n8 7 6\n11 10 9\n"
        );
    }

    #[test]
    fn test_no_faces_writes_headers_only() {
        let text = written(|w| w.write_indices(&FaceIndexBuffers::default()));
        assert_eq!(text, "Vertex Indices Data:\n\nTexture Indices Data:\n");
    }
}
