use serde::{Deserialize, Serialize};

use crate::{Face, PerFace};

/// RGBA color with components in the range 0.0 to 1.0.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(transparent)]
pub struct Color(pub [f32; 4]);
impl Color {
    /// Color of the solved front face.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Color of the solved back face.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Color of the solved up face.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Color of the solved down face.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Color of the solved left face.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Color of the solved right face.
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    /// Color of the plastic between stickers.
    pub const BODY: Self = Self::rgb(0.2, 0.2, 0.2);

    /// Constructs an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }
    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Returns the canonical solved color of each face.
    pub fn solved_scheme() -> PerFace<Self> {
        PerFace::from_fn(|face| match face {
            Face::Front => Self::WHITE,
            Face::Back => Self::YELLOW,
            Face::Up => Self::GREEN,
            Face::Down => Self::BLUE,
            Face::Left => Self::RED,
            Face::Right => Self::ORANGE,
        })
    }
}
