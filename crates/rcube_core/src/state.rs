use std::ops::{Index, IndexMut};

use crate::{Color, Face, Facet, Move, PerFace, Slot};

/// Colors of all 54 stickers on the cube.
///
/// This is the entire persistent state of the puzzle. It is only mutated by
/// completed moves.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    facets: PerFace<Facet>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::solved(&Color::solved_scheme())
    }
}
impl CubeState {
    /// Returns a solved cube with the given face colors.
    pub fn solved(scheme: &PerFace<Color>) -> Self {
        Self {
            facets: PerFace::from_fn(|face| Facet::uniform(face, scheme[face])),
        }
    }
    /// Constructs a cube by calling `f` for each slot.
    pub fn from_fn(mut f: impl FnMut(Slot) -> Color) -> Self {
        Self {
            facets: PerFace::from_fn(|face| {
                Facet::new(face, std::array::from_fn(|index| f(Slot { face, index })))
            }),
        }
    }

    /// Returns the facet for a face.
    pub fn facet(&self, face: Face) -> &Facet {
        &self.facets[face]
    }
    /// Returns all six facets, in face order.
    pub fn facets(&self) -> impl Iterator<Item = &Facet> {
        self.facets.values()
    }

    /// Turns `face` by `amount` quarter turns, clockwise when positive.
    pub fn turn(&mut self, face: Face, amount: i32) {
        Move::get(face).complete(self, amount);
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.facets().all(Facet::is_uniform)
    }
}

impl Index<Slot> for CubeState {
    type Output = Color;

    fn index(&self, slot: Slot) -> &Color {
        &self.facets[slot.face].colors[slot.index]
    }
}
impl IndexMut<Slot> for CubeState {
    fn index_mut(&mut self, slot: Slot) -> &mut Color {
        &mut self.facets[slot.face].colors[slot.index]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_solved() {
        let cube = CubeState::default();
        assert!(cube.is_solved());
        assert_eq!(cube[Slot::at(Face::Left, 1, 1)], Color::RED);
        assert_eq!(cube.facet(Face::Right).face(), Face::Right);
    }

    #[test]
    fn test_turn_amount_zero_is_noop() {
        let mut cube = CubeState::default();
        for &face in Face::VARIANTS {
            cube.turn(face, 0);
            cube.turn(face, 4);
            cube.turn(face, -8);
        }
        assert_eq!(cube, CubeState::default());
    }

    #[test]
    fn test_from_fn_distinct_colors() {
        let cube = CubeState::from_fn(|slot| {
            Color::rgb(slot.face.index() as f32, slot.index as f32, 0.0)
        });
        assert!(!cube.is_solved());
        assert_eq!(cube[Slot { face: Face::Up, index: 7 }], Color::rgb(2.0, 7.0, 0.0));
    }
}
