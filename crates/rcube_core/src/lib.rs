//! Sticker model and move engine for a 3x3x3 Rubik's cube.
//!
//! The whole state of the puzzle is a [`CubeState`]: 54 sticker colors in six
//! [`Facet`]s. A [`Move`] turns one outer layer by permuting stickers in five
//! four-element cycles. Everything here is a total function of its inputs;
//! there are no domain errors except when parsing [`MoveCommand`]s.

mod axis;
mod color;
mod cubie;
mod facet;
pub mod mesh;
pub mod notation;
mod state;
mod turn;

pub use axis::{Axis, Face, PerFace, Side};
pub use color::Color;
pub use cubie::Cubie;
pub use facet::Facet;
pub use notation::{MoveCommand, ParseMoveError, TurnDirection, parse_sequence};
pub use state::CubeState;
pub use turn::{Cycle, Move, Slot};
