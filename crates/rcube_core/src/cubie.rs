//! Positions of the 27 unit cubes that make up the puzzle.

use itertools::iproduct;
use rcube_math::{Float, Vec3};

use crate::Axis;

/// Integer grid coordinates of a cubie, each in the range `0..3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cubie([u8; 3]);
impl Cubie {
    /// Cubie at the center of the puzzle, which is never visible.
    pub const CORE: Self = Self([1, 1, 1]);

    /// Returns the cubie at the given coordinates, or `None` if any
    /// coordinate is out of range.
    pub fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        [x, y, z].iter().all(|&c| c < 3).then_some(Self([x, y, z]))
    }
    /// Returns the coordinate of the cubie along `axis`.
    pub fn coord(self, axis: Axis) -> u8 {
        self.0[axis.index()]
    }
    /// Returns the X, Y, and Z coordinates of the cubie.
    pub fn coords(self) -> [u8; 3] {
        self.0
    }
    /// Returns whether the cubie has at least one coordinate on the outside
    /// of the puzzle. Every cubie except [`Cubie::CORE`] is a boundary cubie.
    pub fn is_boundary(self) -> bool {
        self.0.iter().any(|&c| c != 1)
    }
    /// Returns the position of the cubie's center in cube space, where the
    /// puzzle is centered on the origin and each cubie has size 1.
    pub fn translation(self) -> Vec3 {
        let [x, y, z] = self.0.map(|c| c as Float - 1.0);
        Vec3::new(x, y, z)
    }

    /// Returns an iterator over all 27 cubies, with Z varying fastest.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(0..3, 0..3, 0..3).map(|(x, y, z)| Self([x, y, z]))
    }
    /// Returns an iterator over the 26 visible cubies.
    pub fn boundary() -> impl Iterator<Item = Self> {
        Self::all().filter(|c| c.is_boundary())
    }
}
