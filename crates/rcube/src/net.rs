//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```
//!
//! Each face is drawn as seen from outside the cube, with the front face
//! upright.

use itertools::Itertools;
use rcube_core::{Color, CubeState, Cubie, Face, PerFace};

/// Returns the cubie shown at row `r` and column `c` of `face` in the net.
fn cubie_at(face: Face, r: u8, c: u8) -> Option<Cubie> {
    let (x, y, z) = match face {
        Face::Front => (c, 2 - r, 2),
        Face::Back => (2 - c, 2 - r, 0),
        Face::Up => (c, 2, r),
        Face::Down => (c, 0, 2 - r),
        Face::Left => (0, 2 - r, c),
        Face::Right => (2, 2 - r, 2 - c),
    };
    Cubie::new(x, y, z)
}

/// Returns the letter of the face whose solved color is `color`.
fn letter(color: Color, scheme: &PerFace<Color>) -> char {
    scheme
        .iter()
        .find(|(_, c)| **c == color)
        .and_then(|(face, _)| face.to_string().chars().next())
        .unwrap_or('?')
}

fn row(cube: &CubeState, scheme: &PerFace<Color>, face: Face, r: u8) -> String {
    let facet = cube.facet(face);
    (0..3)
        .map(|c| {
            cubie_at(face, r, c)
                .and_then(|cubie| facet.get_color(cubie))
                .map_or('?', |color| letter(color, scheme))
        })
        .join(" ")
}

/// Renders `cube` as an unfolded net, labeling each sticker with the face
/// whose color it has in `scheme`.
pub fn render(cube: &CubeState, scheme: &PerFace<Color>) -> String {
    let pad = " ".repeat(6);
    let mut lines = vec![];
    for r in 0..3 {
        lines.push(format!("{pad}{}", row(cube, scheme, Face::Up, r)));
    }
    for r in 0..3 {
        let middle = [Face::Left, Face::Front, Face::Right, Face::Back];
        lines.push(middle.iter().map(|&f| row(cube, scheme, f, r)).join(" "));
    }
    for r in 0..3 {
        lines.push(format!("{pad}{}", row(cube, scheme, Face::Down, r)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_net_positions_are_on_face() {
        for &face in Face::VARIANTS {
            let mut indices = vec![];
            for r in 0..3 {
                for c in 0..3 {
                    let cubie = cubie_at(face, r, c).unwrap();
                    indices.push(face.grid_index(cubie).unwrap());
                }
            }
            indices.sort_unstable();
            assert_eq!(indices, (0..9).collect::<Vec<_>>(), "{face}");
        }
    }

    #[test]
    fn test_solved_net() {
        let scheme = Color::solved_scheme();
        let expected = "      U U U
      U U U
      U U U
L L L F F F R R R B B B
L L L F F F R R R B B B
L L L F F F R R R B B B
      D D D
      D D D
      D D D";
        assert_eq!(render(&CubeState::default(), &scheme), expected);
    }

    #[test]
    fn test_front_turn_net() {
        let scheme = Color::solved_scheme();
        let mut cube = CubeState::default();
        cube.turn(Face::Front, 1);
        let expected = "      U U U
      U U U
      L L L
L L D F F F U R R B B B
L L D F F F U R R B B B
L L D F F F U R R B B B
      R R R
      D D D
      D D D";
        assert_eq!(render(&cube, &scheme), expected);
    }
}
