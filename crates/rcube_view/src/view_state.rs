use rcube_math::{Float, Mat4};
use rcube_prefs::ViewPreferences;

/// Pointer position and view offset captured when a drag begins.
#[derive(Debug, Copy, Clone, PartialEq)]
struct DragCapture {
    pointer: [Float; 2],
    rotate: [Float; 2],
}

/// Camera orientation and distance, driven by pointer drags and the wheel.
///
/// This is independent of the cube state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Drag offset in pixels since the last committed drag.
    rotate: [Float; 2],
    capture: Option<DragCapture>,
    /// Rotation from all completed drags.
    rotate_mat0: Mat4,
    /// Translation along the view axis.
    distance: Float,
    aspect: Float,

    radians_per_pixel: Float,
    zoom_step: Float,
    fov_degrees: Float,
    z_near: Float,
    z_far: Float,
}
impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewPreferences::default())
    }
}
impl ViewState {
    /// Constructs a view with no rotation.
    pub fn new(prefs: &ViewPreferences) -> Self {
        Self {
            rotate: [0.0; 2],
            capture: None,
            rotate_mat0: rcube_math::ident(),
            distance: prefs.initial_distance,
            aspect: 1.0,

            radians_per_pixel: prefs.radians_per_pixel(),
            zoom_step: prefs.zoom_step,
            fov_degrees: prefs.fov_degrees,
            z_near: prefs.z_near,
            z_far: prefs.z_far,
        }
    }

    /// Starts a drag with the pointer at `(x, y)`.
    pub fn begin_drag(&mut self, x: Float, y: Float) {
        self.capture = Some(DragCapture {
            pointer: [x, y],
            rotate: self.rotate,
        });
    }
    /// Moves the pointer during a drag. Does nothing if no drag is active.
    pub fn update_drag(&mut self, x: Float, y: Float) {
        let Some(capture) = self.capture else {
            return;
        };
        self.rotate = [
            capture.rotate[0] + x - capture.pointer[0],
            capture.rotate[1] + y - capture.pointer[1],
        ];
    }
    /// Ends a drag, folding its rotation into the committed rotation.
    pub fn end_drag(&mut self) {
        self.capture = None;
        if let Some(r) = self.drag_rotation() {
            self.rotate_mat0 = r * self.rotate_mat0;
        }
        self.rotate = [0.0; 2];
    }
    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }
    /// Returns the drag offset in pixels that has not been committed yet.
    pub fn drag_offset(&self) -> [Float; 2] {
        self.rotate
    }

    /// Moves the camera one step closer if `delta` is negative, otherwise one
    /// step farther. The distance is unbounded.
    pub fn zoom(&mut self, delta: Float) {
        if delta < 0.0 {
            self.distance -= self.zoom_step;
        } else {
            self.distance += self.zoom_step;
        }
    }
    /// Returns the translation along the view axis.
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Sets the aspect ratio of the canvas.
    pub fn resize(&mut self, width: Float, height: Float) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        } else {
            log::warn!("ignoring degenerate canvas size {width}x{height}");
        }
    }

    fn drag_rotation(&self) -> Option<Mat4> {
        let [x, y] = self.rotate;
        rcube_math::drag_rotation(x, y, self.radians_per_pixel)
    }

    /// Returns the rotation from all completed drags.
    pub fn committed_rotation(&self) -> Mat4 {
        self.rotate_mat0
    }
    /// Returns the camera rotation, including any drag in progress.
    pub fn camera_rotation(&self) -> Mat4 {
        match self.drag_rotation() {
            Some(r) => r * self.rotate_mat0,
            None => self.rotate_mat0,
        }
    }
    /// Returns the model-view transform that places the cube in front of
    /// the camera.
    pub fn model_view(&self) -> Mat4 {
        rcube_math::translation(0.0, 0.0, self.distance)
    }
    /// Returns the projection matrix.
    pub fn projection(&self) -> Mat4 {
        rcube_math::perspective(self.fov_degrees, self.aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use rcube_math::{Vec3, assert_mat_approx_eq};

    use super::*;

    #[test]
    fn test_drag_is_pure_delta() {
        let mut view = ViewState::default();
        view.begin_drag(100.0, 50.0);
        view.update_drag(130.0, 10.0);
        assert_eq!(view.drag_offset(), [30.0, -40.0]);
        view.update_drag(90.0, 50.0);
        assert_eq!(view.drag_offset(), [-10.0, 0.0]);
        assert_eq!(view.committed_rotation(), rcube_math::ident());
    }

    #[test]
    fn test_update_without_drag_is_ignored() {
        let mut view = ViewState::default();
        view.update_drag(500.0, 500.0);
        assert_eq!(view.drag_offset(), [0.0, 0.0]);
        assert_eq!(view.camera_rotation(), rcube_math::ident());
    }

    #[test]
    fn test_end_drag_commits() {
        let mut view = ViewState::default();
        view.begin_drag(0.0, 0.0);
        view.update_drag(0.0, 200.0);
        let live = view.camera_rotation();
        view.end_drag();
        assert!(!view.is_dragging());
        assert_eq!(view.drag_offset(), [0.0, 0.0]);
        assert_mat_approx_eq!(view.committed_rotation(), live);
        assert_mat_approx_eq!(
            live,
            rcube_math::rotation_about_axis(Vec3::unit_x(), FRAC_PI_2),
        );
    }

    #[test]
    fn test_zoom_steps() {
        let mut view = ViewState::default();
        assert_eq!(view.distance(), -10.0);
        view.zoom(-3.0);
        view.zoom(0.0);
        assert_eq!(view.distance(), -10.0);
        view.zoom(120.0);
        assert_eq!(view.distance(), -9.0);
        assert_eq!(rcube_math::to_column_major(&view.model_view())[14], -9.0);
    }
}
