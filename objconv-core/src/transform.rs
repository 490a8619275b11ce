//! Right-handed to left-handed coordinate conversion

use nalgebra::{Point2, Point3, Vector3};

use crate::geometry::{Normal, TextureCoord, Vertex3D};

/// Converts OBJ data, authored right-handed, into the left-handed convention
/// of the output format.
pub struct Handedness;

impl Handedness {
    /// Mirror a position across the XY plane
    pub fn vertex(v: &Vertex3D) -> Vertex3D {
        Point3::new(v.x, v.y, -v.z)
    }

    /// Normals mirror the same way positions do
    pub fn normal(n: &Normal) -> Normal {
        Vector3::new(n.x, n.y, -n.z)
    }

    /// Texture space flips vertically: the output's v axis points down
    pub fn texture(t: &TextureCoord) -> TextureCoord {
        Point2::new(t.x, 1.0 - t.y)
    }

    /// Corner order that keeps a face front-facing after the mirror
    pub fn winding<T: Copy>(corners: &[T; 3]) -> [T; 3] {
        [corners[2], corners[1], corners[0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_mirror() {
        let v = Handedness::vertex(&Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Point3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_normal_mirror() {
        let n = Handedness::normal(&Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(n, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_texture_flip() {
        let t = Handedness::texture(&Point2::new(0.25, 0.75));
        assert!((t.x - 0.25).abs() < 1e-6);
        assert!((t.y - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_winding_reversed() {
        assert_eq!(Handedness::winding(&[1, 2, 3]), [3, 2, 1]);
    }

    #[test]
    fn test_double_mirror_is_identity() {
        let v = Point3::new(0.5, -1.5, 2.5);
        assert_eq!(Handedness::vertex(&Handedness::vertex(&v)), v);
    }
}
