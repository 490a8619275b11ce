//! Line grammar for the OBJ records the converter understands

use nom::{
    bytes::complete::tag,
    character::complete::{char, space1, u32 as index},
    combinator::opt,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Normal, TextureCoord, Vertex3D};

/// One `v/vt/vn` reference of a face, still 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub vertex: u32,
    pub texture: u32,
    pub normal: u32,
}

/// Parse a `v x y z [w]` line. Returns the position and any unparsed tail.
pub fn parse_vertex(line: &str) -> Result<(Vertex3D, &str), String> {
    finish(line, vertex_record(line))
}

/// Parse a `vt u v [w]` line
pub fn parse_texture(line: &str) -> Result<(TextureCoord, &str), String> {
    finish(line, texture_record(line))
}

/// Parse a `vn x y z` line
pub fn parse_normal(line: &str) -> Result<(Normal, &str), String> {
    finish(line, normal_record(line))
}

/// Parse an `f a/ta/na b/tb/nb c/tc/nc` line
pub fn parse_face(line: &str) -> Result<([FaceCorner; 3], &str), String> {
    finish(line, face_record(line))
}

fn finish<'a, T>(line: &'a str, result: IResult<&'a str, T>) -> Result<(T, &'a str), String> {
    match result {
        Ok((rest, value)) => Ok((value, rest.trim())),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let column = line.len() - e.input.len() + 1;
            if e.input.is_empty() {
                Err(format!("unexpected end of line at column {}", column))
            } else {
                Err(format!("unexpected `{}` at column {}", excerpt(e.input), column))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err("incomplete record".to_string()),
    }
}

fn excerpt(input: &str) -> &str {
    let end = input
        .char_indices()
        .nth(12)
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    &input[..end]
}

fn vertex_record(input: &str) -> IResult<&str, Vertex3D> {
    let (input, _) = tag("v")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    let (input, _w) = opt(preceded(space1, float))(input)?;
    Ok((input, Vertex3D::new(x, y, z)))
}

fn texture_record(input: &str) -> IResult<&str, TextureCoord> {
    let (input, _) = tag("vt")(input)?;
    let (input, u) = preceded(space1, float)(input)?;
    let (input, v) = preceded(space1, float)(input)?;
    let (input, _w) = opt(preceded(space1, float))(input)?;
    Ok((input, TextureCoord::new(u, v)))
}

fn normal_record(input: &str) -> IResult<&str, Normal> {
    let (input, _) = tag("vn")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    Ok((input, Normal::new(x, y, z)))
}

fn face_record(input: &str) -> IResult<&str, [FaceCorner; 3]> {
    let (input, _) = tag("f")(input)?;
    let (input, a) = preceded(space1, face_corner)(input)?;
    let (input, b) = preceded(space1, face_corner)(input)?;
    let (input, c) = preceded(space1, face_corner)(input)?;
    Ok((input, [a, b, c]))
}

fn face_corner(input: &str) -> IResult<&str, FaceCorner> {
    let (input, vertex) = index(input)?;
    let (input, _) = char('/')(input)?;
    let (input, texture) = index(input)?;
    let (input, _) = char('/')(input)?;
    let (input, normal) = index(input)?;
    Ok((
        input,
        FaceCorner {
            vertex,
            texture,
            normal,
        },
    ))
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = space1(input)?;
    let (input, x) = float(input)?;
    let (input, _) = space1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = space1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertex() {
        let (v, rest) = parse_vertex("v 1.0 -2.5 3e1").unwrap();
        assert_eq!(v, Vertex3D::new(1.0, -2.5, 30.0));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_vertex_with_weight_and_tabs() {
        let (v, _) = parse_vertex("v\t1\t2\t3\t1.0").unwrap();
        assert_eq!(v, Vertex3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_texture_ignores_third_component() {
        let (t, rest) = parse_texture("vt 0.25 0.5 0.0").unwrap();
        assert_eq!(t, TextureCoord::new(0.25, 0.5));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_normal() {
        let (n, _) = parse_normal("vn 0.0 1.0 -0.0").unwrap();
        assert_eq!(n, Normal::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_face() {
        let (corners, rest) = parse_face("f 1/2/3 4/5/6 7/8/9").unwrap();
        assert_eq!(
            corners[2],
            FaceCorner {
                vertex: 7,
                texture: 8,
                normal: 9
            }
        );
        assert_eq!(corners[0].vertex, 1);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_face_keeps_tail() {
        let (_, rest) = parse_face("f 1/1/1 2/2/2 3/3/3 4/4/4").unwrap();
        assert_eq!(rest, "4/4/4");
    }

    #[test]
    fn test_parse_face_missing_texture_index() {
        let err = parse_face("f 1//1 2//2 3//3").unwrap_err();
        assert!(err.contains("column 5"), "{}", err);
    }

    #[test]
    fn test_parse_vertex_missing_component() {
        let err = parse_vertex("v 1.0 2.0").unwrap_err();
        assert!(err.contains("end of line"), "{}", err);
    }
}
