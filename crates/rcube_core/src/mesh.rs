//! Geometry of one sticker on one cubie.
//!
//! The mesh lies in the local frame of a facet, facing +Z, centered on the
//! cubie. A renderer draws it once per facet per cubie using
//! [`crate::Facet::object_matrix()`]. The four bevels are always drawn in
//! [`crate::Color::BODY`]; the face is drawn in the sticker color if the
//! cubie touches that facet.

use std::f32::consts::FRAC_1_SQRT_2;
use std::ops::Range;

/// Half the width of a cubie.
pub const SIZE_OUTER: f32 = 0.5;
/// Width of the bevel around each sticker.
pub const SIZE_BORDER: f32 = 0.07;
const SIZE_INNER: f32 = SIZE_OUTER - SIZE_BORDER;
const SIZE_FACET: f32 = SIZE_INNER + SIZE_BORDER * FRAC_1_SQRT_2;

const N_VERT: f32 = 0.577_350_26; // 1/sqrt(3)
const N_EDGE: f32 = FRAC_1_SQRT_2;

/// Vertex positions. Each group of four is one corner of the sticker: the
/// flat corner, then three points around the bevel.
#[rustfmt::skip]
pub const POSITIONS: [[f32; 3]; 16] = [
    [-SIZE_INNER, -SIZE_INNER, SIZE_OUTER],
    [-SIZE_INNER, -SIZE_FACET, SIZE_FACET],
    [-SIZE_FACET, -SIZE_FACET, SIZE_FACET],
    [-SIZE_FACET, -SIZE_INNER, SIZE_FACET],

    [-SIZE_INNER,  SIZE_INNER, SIZE_OUTER],
    [-SIZE_FACET,  SIZE_INNER, SIZE_FACET],
    [-SIZE_FACET,  SIZE_FACET, SIZE_FACET],
    [-SIZE_INNER,  SIZE_FACET, SIZE_FACET],

    [ SIZE_INNER,  SIZE_INNER, SIZE_OUTER],
    [ SIZE_INNER,  SIZE_FACET, SIZE_FACET],
    [ SIZE_FACET,  SIZE_FACET, SIZE_FACET],
    [ SIZE_FACET,  SIZE_INNER, SIZE_FACET],

    [ SIZE_INNER, -SIZE_INNER, SIZE_OUTER],
    [ SIZE_FACET, -SIZE_INNER, SIZE_FACET],
    [ SIZE_FACET, -SIZE_FACET, SIZE_FACET],
    [ SIZE_INNER, -SIZE_FACET, SIZE_FACET],
];

/// Vertex normals, matching [`POSITIONS`].
#[rustfmt::skip]
pub const NORMALS: [[f32; 3]; 16] = [
    [    0.0,     0.0,    1.0],
    [    0.0, -N_EDGE, N_EDGE],
    [-N_VERT, -N_VERT, N_VERT],
    [-N_EDGE,     0.0, N_EDGE],

    [    0.0,     0.0,    1.0],
    [-N_EDGE,     0.0, N_EDGE],
    [-N_VERT,  N_VERT, N_VERT],
    [    0.0,  N_EDGE, N_EDGE],

    [    0.0,     0.0,    1.0],
    [    0.0,  N_EDGE, N_EDGE],
    [ N_VERT,  N_VERT, N_VERT],
    [ N_EDGE,     0.0, N_EDGE],

    [    0.0,     0.0,    1.0],
    [ N_EDGE,     0.0, N_EDGE],
    [ N_VERT, -N_VERT, N_VERT],
    [    0.0, -N_EDGE, N_EDGE],
];

/// Element indices, drawn as triangle fans.
#[rustfmt::skip]
pub const ELEMENTS: [u8; 28] = [
     0,  1,  2,  3,  5,  4,
     4,  5,  6,  7,  9,  8,
     8,  9, 10, 11, 13, 12,
    12, 13, 14, 15,  1,  0,
     0,  4,  8, 12,
];

/// Ranges of [`ELEMENTS`] for the four bevel fans.
pub const BEVEL_FANS: [Range<usize>; 4] = [0..6, 6..12, 12..18, 18..24];
/// Range of [`ELEMENTS`] for the colored face fan.
pub const FACE_FAN: Range<usize> = 24..28;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normals_are_unit() {
        for n in NORMALS {
            let len2: f32 = n.iter().map(|x| x * x).sum();
            assert!((len2 - 1.0).abs() < 1e-5, "{n:?}");
        }
    }

    #[test]
    fn test_fans_cover_elements() {
        let mut covered = BEVEL_FANS.to_vec();
        covered.push(FACE_FAN);
        assert_eq!(covered.iter().map(|r| r.len()).sum::<usize>(), ELEMENTS.len());
        assert!(ELEMENTS.iter().all(|&i| (i as usize) < POSITIONS.len()));
    }

    #[test]
    fn test_mesh_fits_in_cubie() {
        for p in POSITIONS {
            assert!(p.iter().all(|x| x.abs() <= SIZE_OUTER));
        }
        // The face is a square at the outer surface.
        for &i in &ELEMENTS[FACE_FAN] {
            assert_eq!(POSITIONS[i as usize][2], SIZE_OUTER);
        }
    }
}
