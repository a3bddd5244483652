use rcube_core::{Color, Face, PerFace};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorPreferences {
    pub front: Color,
    pub back: Color,
    pub up: Color,
    pub down: Color,
    pub left: Color,
    pub right: Color,
    /// Color of the cubie body and sticker bevels.
    pub body: Color,
}
impl Default for ColorPreferences {
    fn default() -> Self {
        let scheme = Color::solved_scheme();
        Self {
            front: scheme[Face::Front],
            back: scheme[Face::Back],
            up: scheme[Face::Up],
            down: scheme[Face::Down],
            left: scheme[Face::Left],
            right: scheme[Face::Right],
            body: Color::BODY,
        }
    }
}
impl ColorPreferences {
    /// Returns the solved color of each face.
    pub fn scheme(&self) -> PerFace<Color> {
        PerFace::from_fn(|face| match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Up => self.up,
            Face::Down => self.down,
            Face::Left => self.left,
            Face::Right => self.right,
        })
    }
}
