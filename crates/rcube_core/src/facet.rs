//! Colored 3x3 grids on each face of the cube.

use rcube_math::Mat4;

use crate::{Color, Cubie, Face};

impl Face {
    /// Returns the index in this face's 3x3 grid of the sticker on `cubie`,
    /// or `None` if the cubie does not touch this face.
    ///
    /// For a face on axis `a`, the row is the coordinate along the next axis
    /// and the column is the coordinate along the axis after that.
    pub fn grid_index(self, cubie: Cubie) -> Option<usize> {
        let axis = self.axis();
        (cubie.coord(axis) == self.side().coord()).then(|| {
            let d0 = cubie.coord(axis.next());
            let d1 = cubie.coord(axis.next().next());
            d0 as usize * 3 + d1 as usize
        })
    }
}

/// One face of the cube: nine sticker colors and a fixed orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    face: Face,
    /// Sticker colors in row-major grid order.
    pub colors: [Color; 9],
}
impl Facet {
    /// Constructs a facet from its sticker colors.
    pub fn new(face: Face, colors: [Color; 9]) -> Self {
        Self { face, colors }
    }
    /// Constructs a facet with every sticker the same color.
    pub fn uniform(face: Face, color: Color) -> Self {
        Self::new(face, [color; 9])
    }

    /// Returns which face this is.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the color of the sticker on `cubie`, or `None` if the cubie
    /// does not touch this face.
    pub fn get_color(&self, cubie: Cubie) -> Option<Color> {
        self.face.grid_index(cubie).map(|i| self.colors[i])
    }

    /// Returns the transform that draws this facet's sticker mesh on
    /// `cubie`: the face orientation, translated to the cubie's center.
    pub fn object_matrix(&self, cubie: Cubie) -> Mat4 {
        let mut m = self.face.orientation();
        m.w = cubie.translation().extend(1.0);
        m
    }

    /// Returns whether every sticker has the same color.
    pub fn is_uniform(&self) -> bool {
        self.colors.iter().all(|c| *c == self.colors[0])
    }
}
