//! Axes, sides, and faces of the cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use rcube_math::{Mat4, Vec3};
use strum::VariantArray;

/// Spatial axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, VariantArray)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the axis with the given index, wrapping around after Z.
    pub const fn from_index(i: usize) -> Self {
        match i % 3 {
            0 => Self::X,
            1 => Self::Y,
            _ => Self::Z,
        }
    }
    /// Returns the next axis in cyclic order (X -> Y -> Z -> X).
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
    /// Returns the unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::unit_x(),
            Self::Y => Vec3::unit_y(),
            Self::Z => Vec3::unit_z(),
        }
    }
}

/// One of the two outer layers along an axis.
///
/// The discriminant is the grid coordinate of the layer. The middle layer
/// (coordinate 1) cannot be turned on its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Layer at coordinate 0, on the negative end of the axis.
    Near = 0,
    /// Layer at coordinate 2, on the positive end of the axis.
    Far = 2,
}
impl Side {
    /// Returns the grid coordinate of this layer.
    pub const fn coord(self) -> u8 {
        self as u8
    }
    /// Returns 0 for [`Side::Near`] and 1 for [`Side::Far`].
    pub const fn index(self) -> usize {
        match self {
            Self::Near => 0,
            Self::Far => 1,
        }
    }
    /// Returns the sign of the outward normal along the axis.
    pub const fn sign(self) -> f32 {
        match self {
            Self::Near => -1.0,
            Self::Far => 1.0,
        }
    }
}

/// Face of the cube.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::IntoStaticStr,
    VariantArray,
)]
pub enum Face {
    /// Front face (+Z).
    #[strum(serialize = "F")]
    Front,
    /// Back face (-Z).
    #[strum(serialize = "B")]
    Back,
    /// Up face (+Y).
    #[strum(serialize = "U")]
    Up,
    /// Down face (-Y).
    #[strum(serialize = "D")]
    Down,
    /// Left face (-X).
    #[strum(serialize = "L")]
    Left,
    /// Right face (+X).
    #[strum(serialize = "R")]
    Right,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        f.write_str(s)
    }
}
impl Face {
    /// Returns an integer index for this face, in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Down | Self::Up => Axis::Y,
            Self::Back | Self::Front => Axis::Z,
        }
    }
    /// Returns which end of its axis this face is on.
    pub const fn side(self) -> Side {
        match self {
            Self::Back | Self::Down | Self::Left => Side::Near,
            Self::Front | Self::Up | Self::Right => Side::Far,
        }
    }
    /// Returns the two faces on an axis, near side first.
    pub const fn on_axis(axis: Axis) -> [Face; 2] {
        match axis {
            Axis::X => [Self::Left, Self::Right],
            Axis::Y => [Self::Down, Self::Up],
            Axis::Z => [Self::Back, Self::Front],
        }
    }
    /// Returns the face on the given axis and side.
    pub const fn from_axis_side(axis: Axis, side: Side) -> Self {
        Self::on_axis(axis)[side.index()]
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        let [near, far] = Self::on_axis(self.axis());
        match self.side() {
            Side::Near => far,
            Side::Far => near,
        }
    }
    /// Returns the unit vector pointing out of the cube through this face.
    pub fn outward_normal(self) -> Vec3 {
        self.axis().unit() * self.side().sign()
    }

    /// Returns the fixed rigid transform placing the face's local frame in
    /// cube space. The local +Z axis maps to [`Face::outward_normal()`].
    pub fn orientation(self) -> Mat4 {
        #[rustfmt::skip]
        let m = match self {
            Self::Front => Mat4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Self::Back => Mat4::new(
                1.0,  0.0,  0.0, 0.0,
                0.0, -1.0,  0.0, 0.0,
                0.0,  0.0, -1.0, 0.0,
                0.0,  0.0,  0.0, 1.0,
            ),
            Self::Up => Mat4::new(
                1.0, 0.0,  0.0, 0.0,
                0.0, 0.0, -1.0, 0.0,
                0.0, 1.0,  0.0, 0.0,
                0.0, 0.0,  0.0, 1.0,
            ),
            Self::Down => Mat4::new(
                1.0,  0.0, 0.0, 0.0,
                0.0,  0.0, 1.0, 0.0,
                0.0, -1.0, 0.0, 0.0,
                0.0,  0.0, 0.0, 1.0,
            ),
            Self::Left => Mat4::new(
                 0.0, 0.0, 1.0, 0.0,
                 0.0, 1.0, 0.0, 0.0,
                -1.0, 0.0, 0.0, 0.0,
                 0.0, 0.0, 0.0, 1.0,
            ),
            Self::Right => Mat4::new(
                0.0, 0.0, -1.0, 0.0,
                0.0, 1.0,  0.0, 0.0,
                1.0, 0.0,  0.0, 0.0,
                0.0, 0.0,  0.0, 1.0,
            ),
        };
        m
    }
}

/// Value for each face of the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PerFace<T>([T; 6]);
impl<T> PerFace<T> {
    /// Constructs a value for each face by calling `f` on each face in order.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Face::VARIANTS[i])))
    }
    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        std::iter::zip(Face::VARIANTS.iter().copied(), &self.0)
    }
    /// Returns an iterator over the values, in face order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
    /// Applies `f` to each value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerFace<U> {
        PerFace(self.0.map(f))
    }
}
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.index()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use rcube_math::cgmath::vec4;

    use super::*;

    #[test]
    fn test_face_axis_side_roundtrip() {
        for &face in Face::VARIANTS {
            assert_eq!(face, Face::from_axis_side(face.axis(), face.side()));
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn test_orientation_points_outward() {
        for &face in Face::VARIANTS {
            let n = face.orientation() * vec4(0.0, 0.0, 1.0, 0.0);
            assert_eq!(n.truncate(), face.outward_normal(), "{face}");
        }
    }

    #[test]
    fn test_face_letters() {
        let letters: String = Face::VARIANTS.iter().map(|f| f.to_string()).collect();
        assert_eq!(letters, "FBUDLR");
        assert_eq!("U".parse::<Face>(), Ok(Face::Up));
    }
}
