//! Geometry scratch values and per-conversion bookkeeping

use std::fmt;

use nalgebra::{Point2, Point3, Vector3};

/// A vertex position as read from a `v` line
pub type Vertex3D = Point3<f32>;

/// A texture coordinate as read from a `vt` line
pub type TextureCoord = Point2<f32>;

/// A vertex normal as read from a `vn` line
pub type Normal = Vector3<f32>;

/// The four kinds of data block an OBJ file is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Vertices,
    Textures,
    Normals,
    Faces,
}

impl BlockKind {
    /// Every line of this block starts with this prefix
    pub fn prefix(self) -> &'static str {
        match self {
            BlockKind::Vertices => "v ",
            BlockKind::Textures => "vt",
            BlockKind::Normals => "vn",
            BlockKind::Faces => "f ",
        }
    }

    /// Classify a line by its leading tag. Lines shorter than a tag never match.
    pub fn of_line(line: &str) -> Option<BlockKind> {
        [
            BlockKind::Vertices,
            BlockKind::Textures,
            BlockKind::Normals,
            BlockKind::Faces,
        ]
        .into_iter()
        .find(|kind| kind.matches(line))
    }

    pub fn matches(self, line: &str) -> bool {
        let prefix = self.prefix().as_bytes();
        let line = line.as_bytes();
        if line.len() < prefix.len() {
            return false;
        }
        // A tab separates the tag just as well as a space does
        match prefix {
            [tag, b' '] => line[0] == *tag && (line[1] == b' ' || line[1] == b'\t'),
            _ => line.starts_with(prefix),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Vertices => "vertex",
            BlockKind::Textures => "texture",
            BlockKind::Normals => "normal",
            BlockKind::Faces => "face",
        };
        f.write_str(name)
    }
}

/// Byte offsets of the first line of each data block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockBoundaries {
    pub before_vertices: u64,
    pub before_textures: u64,
    pub before_normals: u64,
    pub before_faces: u64,
}

/// Number of data lines in each block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub vertices: usize,
    pub textures: usize,
    pub normals: usize,
    pub faces: usize,
}

impl Counts {
    /// Each face is a triangle, so it contributes three indices
    pub fn indices(&self) -> usize {
        self.faces * 3
    }
}

/// Where each block starts and how long it is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockLayout {
    pub boundaries: BlockBoundaries,
    pub counts: Counts,
}

/// Flat 0-based vertex and texture indices, three per face
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceIndexBuffers {
    pub vertex_indices: Vec<u32>,
    pub texture_indices: Vec<u32>,
}

impl FaceIndexBuffers {
    pub fn with_faces(faces: usize) -> Self {
        Self {
            vertex_indices: Vec::with_capacity(faces * 3),
            texture_indices: Vec::with_capacity(faces * 3),
        }
    }

    pub fn push_corner(&mut self, vertex: u32, texture: u32) {
        self.vertex_indices.push(vertex);
        self.texture_indices.push(texture);
    }

    pub fn face_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }
}
