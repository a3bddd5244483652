//! Fixed-size matrix math for the cube viewer.
//!
//! This is a thin layer over [`cgmath`] that gives names to the handful of
//! transforms the viewer needs, so that nothing else has to do index
//! arithmetic on flat buffers. All matrices are 4x4 and stored in
//! **column-major** order, which is also the order GPU uniforms expect.

pub use cgmath;
use cgmath::{Deg, Rad, SquareMatrix};

/// Floating-point type used for all geometry.
pub type Float = f32;
/// 4x4 homogeneous transform.
pub type Mat4 = cgmath::Matrix4<Float>;
/// 3D vector.
pub type Vec3 = cgmath::Vector3<Float>;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.00001;

/// Asserts that two matrices are approximately equal.
#[macro_export]
macro_rules! assert_mat_approx_eq {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::approx_eq(a, b),
            "matrices are not approximately equal\n  left: {a:?}\n right: {b:?}",
        );
    }};
}

/// Returns the identity matrix.
pub fn ident() -> Mat4 {
    Mat4::identity()
}

/// Returns the matrix rotating by `angle` radians about the unit vector
/// `axis`, counterclockwise when looking down the axis toward the origin.
pub fn rotation_about_axis(axis: Vec3, angle: Float) -> Mat4 {
    Mat4::from_axis_angle(axis, Rad(angle))
}

/// Returns the rotation produced by dragging the pointer by `(rotate_x,
/// rotate_y)` pixels, or `None` if the drag has zero length.
///
/// The axis is perpendicular to the drag in the screen plane and the angle
/// grows linearly with the drag length.
pub fn drag_rotation(rotate_x: Float, rotate_y: Float, radians_per_pixel: Float) -> Option<Mat4> {
    let len = rotate_x.hypot(rotate_y);
    if len == 0.0 {
        return None;
    }
    let axis = Vec3::new(rotate_y / len, rotate_x / len, 0.0);
    Some(rotation_about_axis(axis, len * radians_per_pixel))
}

/// Returns an OpenGL-convention perspective projection.
///
/// # Panics
///
/// Panics if `fov_y_degrees`, `aspect`, `near`, or `far` is not positive, or
/// if `far <= near`.
pub fn perspective(fov_y_degrees: Float, aspect: Float, near: Float, far: Float) -> Mat4 {
    cgmath::perspective(Deg(fov_y_degrees), aspect, near, far)
}

/// Returns a translation matrix.
pub fn translation(x: Float, y: Float, z: Float) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

/// Returns the 16 elements of a matrix in column-major order.
pub fn to_column_major(m: &Mat4) -> [Float; 16] {
    let cols: [[Float; 4]; 4] = (*m).into();
    let mut ret = [0.0; 16];
    for (i, col) in cols.iter().enumerate() {
        ret[i * 4..i * 4 + 4].copy_from_slice(col);
    }
    ret
}

/// Compares two matrices elementwise, considering them equal if every pair
/// of elements is separated by less than [`EPSILON`] (scaled by magnitude).
pub fn approx_eq(a: &Mat4, b: &Mat4) -> bool {
    std::iter::zip(to_column_major(a), to_column_major(b)).all(|(x, y)| {
        let scale = Float::max(1.0, Float::max(x.abs(), y.abs()));
        (x - y).abs() <= EPSILON * scale
    })
}
