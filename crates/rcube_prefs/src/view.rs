use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Vertical field of view, in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub z_near: f32,
    /// Far clipping plane.
    pub z_far: f32,
    /// Translation of the cube along the view axis before any zooming.
    pub initial_distance: f32,
    /// Length of a pointer drag that rotates the view by half a turn.
    pub drag_pixels_per_half_turn: f32,
    /// Change in distance per wheel event.
    pub zoom_step: f32,
}
impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            z_near: 1.0,
            z_far: 100.0,
            initial_distance: -10.0,
            drag_pixels_per_half_turn: 400.0,
            zoom_step: 1.0,
        }
    }
}
impl ViewPreferences {
    /// Returns the rotation per pixel of pointer drag.
    pub fn radians_per_pixel(&self) -> f32 {
        PI / self.drag_pixels_per_half_turn
    }

    /// Replaces values that would make the projection or drag rotation
    /// degenerate with their defaults, logging a warning for each.
    pub fn validate(&mut self) {
        let default = Self::default();

        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            log::warn!(
                "Invalid view.fov_degrees {}; using {}",
                self.fov_degrees,
                default.fov_degrees,
            );
            self.fov_degrees = default.fov_degrees;
        }
        if !(self.z_near > 0.0 && self.z_far > self.z_near && self.z_far.is_finite()) {
            log::warn!(
                "Invalid clipping planes view.z_near {} and view.z_far {}; using {} and {}",
                self.z_near,
                self.z_far,
                default.z_near,
                default.z_far,
            );
            self.z_near = default.z_near;
            self.z_far = default.z_far;
        }
        if !(self.drag_pixels_per_half_turn > 0.0 && self.drag_pixels_per_half_turn.is_finite()) {
            log::warn!(
                "Invalid view.drag_pixels_per_half_turn {}; using {}",
                self.drag_pixels_per_half_turn,
                default.drag_pixels_per_half_turn,
            );
            self.drag_pixels_per_half_turn = default.drag_pixels_per_half_turn;
        }
        if !self.initial_distance.is_finite() {
            log::warn!("Invalid view.initial_distance; using {}", default.initial_distance);
            self.initial_distance = default.initial_distance;
        }
        if !self.zoom_step.is_finite() {
            log::warn!("Invalid view.zoom_step; using {}", default.zoom_step);
            self.zoom_step = default.zoom_step;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightingPreferences {
    /// Light coordinates span `-range..=range` across the canvas.
    pub range: f32,
    /// Z coordinate of the light.
    pub depth: f32,
    pub power: f32,
    /// Light X coordinate before the pointer first moves.
    pub initial_x: f32,
    /// Light Y coordinate before the pointer first moves.
    pub initial_y: f32,
}
impl Default for LightingPreferences {
    fn default() -> Self {
        Self {
            range: 25.0,
            depth: -3.0,
            power: 20.0,
            initial_x: 1.0,
            initial_y: 1.0,
        }
    }
}
