//! objconv Core Library - OBJ to indexed text model conversion
//!
//! This library turns a Wavefront OBJ file into the plain-text model format
//! the engine loads: counts, left-handed vertex and texture data, and
//! per-face index lists with reversed winding.

pub mod converter;
pub mod cursor;
pub mod error;
pub mod extract;
pub mod faces;
pub mod geometry;
pub mod locator;
pub mod log;
#[cfg(feature = "logging")]
pub mod logging;
pub mod obj;
pub mod transform;
pub mod writer;

// Re-export commonly used types
pub use converter::{convert, ConvertOptions, ObjConverter, Outcome};
pub use error::{Error, Result};
pub use geometry::{BlockBoundaries, BlockKind, BlockLayout, Counts, FaceIndexBuffers};
pub use log::{ConvertLog, TracingLog};
