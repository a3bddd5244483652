//! Face turns: which stickers move where, and how the turning layer rotates.

use std::fmt;

use lazy_static::lazy_static;
use rcube_math::{Float, Mat4};

use crate::{CubeState, Cubie, Face, PerFace, Side};

/// Location of a single sticker: a face and an index into its 3x3 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Face the sticker is on.
    pub face: Face,
    /// Row-major index into the face's grid.
    pub index: usize,
}
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.index)
    }
}
impl Slot {
    /// Returns the slot at row `d0` and column `d1` of `face`.
    pub const fn at(face: Face, d0: u8, d1: u8) -> Self {
        Self {
            face,
            index: d0 as usize * 3 + d1 as usize,
        }
    }
}

/// Four slots whose stickers rotate into each other during a quarter turn.
///
/// During a positive quarter turn, the sticker at `cycle[i]` moves to
/// `cycle[i + 1]`.
pub type Cycle = [Slot; 4];

lazy_static! {
    static ref MOVES: PerFace<Move> = PerFace::from_fn(Move::new);
}

/// Turn of one outer layer of the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    face: Face,
    /// Two rings on the turning face, then one cycle per layer depth across
    /// the four neighboring faces.
    cycles: [Cycle; 5],
}
impl Move {
    /// Returns the move that turns `face`.
    pub fn get(face: Face) -> &'static Move {
        &MOVES[face]
    }

    fn new(face: Face) -> Self {
        let axis = face.axis();
        let side = face.side();
        let layer = side.coord();

        // Walk the grid border of the turning face. Stepping four times from
        // a corner visits all four corners; from an edge, all four edges.
        let ring = |start: u8| -> Cycle {
            let (mut d0, mut d1) = (0, start);
            std::array::from_fn(|_| {
                let slot = Slot::at(face, d0, d1);
                (d0, d1) = match side {
                    Side::Near => (2 - d1, d0),
                    Side::Far => (d1, 2 - d0),
                };
                slot
            })
        };

        // Each neighboring sticker cycle alternates between the faces on the
        // two other axes. On faces of the next axis, the turning layer is the
        // column; on faces of the axis after that, it is the row.
        let neighbors = [Face::on_axis(axis.next()), Face::on_axis(axis.next().next())];
        let border = |depth: u8| -> Cycle {
            let (mut d, mut s) = (depth, 0);
            std::array::from_fn(|j| {
                let odd = j % 2 == 1;
                let neighbor = neighbors[j % 2][s];
                let slot = match odd {
                    false => Slot::at(neighbor, d, layer),
                    true => Slot::at(neighbor, layer, d),
                };
                if (side == Side::Near) != odd {
                    d = 2 - d;
                } else {
                    s = 1 - s;
                }
                slot
            })
        };

        let cycles = [ring(0), ring(1), border(0), border(1), border(2)];
        log::trace!("built cycles for {face}: {cycles:?}");
        Self { face, cycles }
    }

    /// Returns the face this move turns.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the sticker cycles for a positive quarter turn.
    pub fn cycles(&self) -> &[Cycle; 5] {
        &self.cycles
    }

    /// Returns every slot moved by this turn.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.cycles.iter().flatten().copied()
    }

    /// Returns whether `cubie` is in the turning layer.
    pub fn contains(&self, cubie: Cubie) -> bool {
        cubie.coord(self.face.axis()) == self.face.side().coord()
    }

    /// Returns the rotation of the turning layer after turning it by `angle`
    /// radians. Positive angles turn the face clockwise as seen from
    /// outside the cube, which is the same sense as a positive amount passed
    /// to [`Move::complete()`].
    pub fn rotation(&self, angle: Float) -> Mat4 {
        rcube_math::rotation_about_axis(self.face.outward_normal(), -angle)
    }

    /// Permutes the stickers of `state` by `amount` quarter turns. Negative
    /// amounts turn counterclockwise; any amount is taken modulo 4.
    pub fn complete(&self, state: &mut CubeState, amount: i32) {
        let shift = amount.rem_euclid(4) as usize;
        if shift == 0 {
            return;
        }
        for cycle in &self.cycles {
            // Read all four before writing any.
            let colors = cycle.map(|slot| state[slot]);
            for (i, color) in colors.into_iter().enumerate() {
                state[cycle[(i + shift) % 4]] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    use pretty_assertions::assert_eq;
    use rcube_math::{Vec3, assert_mat_approx_eq, cgmath::InnerSpace, cgmath::Transform};
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_front_rings() {
        let m = Move::get(Face::Front);
        let indices = |c: &Cycle| c.map(|s| s.index);
        assert_eq!(indices(&m.cycles()[0]), [0, 2, 8, 6]);
        assert_eq!(indices(&m.cycles()[1]), [1, 5, 7, 3]);
        assert!(m.cycles()[..2].iter().flatten().all(|s| s.face == Face::Front));
    }

    #[test]
    fn test_front_border_cycle() {
        // Looking at the front, the stickers on the left column move up to
        // the bottom row of Up, then around clockwise.
        let cycle = Move::get(Face::Front).cycles()[2];
        assert_eq!(
            cycle,
            [
                Slot::at(Face::Left, 0, 2),
                Slot::at(Face::Up, 2, 0),
                Slot::at(Face::Right, 2, 2),
                Slot::at(Face::Down, 2, 2),
            ],
        );
    }

    #[test]
    fn test_twenty_distinct_slots() {
        for &face in Face::VARIANTS {
            let m = Move::get(face);
            let slots = m.slots().collect::<HashSet<_>>();
            assert_eq!(slots.len(), 20, "{face}");
            assert!(slots.iter().all(|s| s.index != 4), "{face} moves a center");
            assert!(slots.iter().all(|s| s.face != face.opposite()));
            assert_eq!(slots.iter().filter(|s| s.face == face).count(), 8);
            for neighbor in Face::VARIANTS.iter().filter(|f| f.axis() != face.axis()) {
                assert_eq!(slots.iter().filter(|s| s.face == *neighbor).count(), 3);
            }
        }
    }

    #[test]
    fn test_border_slots_are_in_turning_layer() {
        for &face in Face::VARIANTS {
            let m = Move::get(face);
            for slot in m.slots() {
                let cubie = Cubie::all()
                    .find(|&c| slot.face.grid_index(c) == Some(slot.index))
                    .unwrap();
                assert!(m.contains(cubie), "{slot} is not in layer {face}");
            }
        }
    }

    #[test]
    fn test_positive_rotation_is_clockwise() {
        // A quarter turn of Up moves the front edge to the left edge.
        let r = Move::get(Face::Up).rotation(FRAC_PI_2);
        let front = Vec3::new(0.0, 1.0, 1.0);
        let moved = r.transform_vector(front);
        assert!((moved - Vec3::new(-1.0, 1.0, 0.0)).magnitude2() < 1e-8);

        let r = Move::get(Face::Back).rotation(FRAC_PI_2);
        assert_mat_approx_eq!(
            r,
            rcube_math::rotation_about_axis(Vec3::unit_z(), FRAC_PI_2),
        );
    }

    #[test]
    fn test_layer_membership() {
        let m = Move::get(Face::Left);
        assert_eq!(Cubie::all().filter(|&c| m.contains(c)).count(), 9);
        assert!(!m.contains(Cubie::CORE));
    }
}
