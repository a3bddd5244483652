use rcube_math::Float;
use rcube_prefs::LightingPreferences;

/// Position and size of the canvas in the same coordinates as pointer
/// events.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CanvasRect {
    /// Left edge.
    pub x: Float,
    /// Top edge.
    pub y: Float,
    /// Width in pixels.
    pub width: Float,
    /// Height in pixels.
    pub height: Float,
}

/// Point light that follows the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    x: Float,
    y: Float,
    range: Float,
    depth: Float,
    power: Float,
}
impl Default for LightState {
    fn default() -> Self {
        Self::new(&LightingPreferences::default())
    }
}
impl LightState {
    /// Constructs a light at its initial position.
    pub fn new(prefs: &LightingPreferences) -> Self {
        Self {
            x: prefs.initial_x,
            y: prefs.initial_y,
            range: prefs.range,
            depth: prefs.depth,
            power: prefs.power,
        }
    }

    /// Moves the light to follow the pointer at `(x, y)`. The canvas maps
    /// linearly onto `-range..=range` on both axes, with Y pointing up.
    pub fn move_to(&mut self, x: Float, y: Float, canvas: CanvasRect) {
        if canvas.width <= 0.0 || canvas.height <= 0.0 {
            return;
        }
        self.x = ((x - canvas.x) * 2.0 / canvas.width - 1.0) * self.range;
        self.y = -((y - canvas.y) * 2.0 / canvas.height - 1.0) * self.range;
    }

    /// Returns the light position in world space.
    pub fn position(&self) -> [Float; 3] {
        [self.x, self.y, self.depth]
    }
    /// Returns the light power.
    pub fn power(&self) -> Float {
        self.power
    }
}
