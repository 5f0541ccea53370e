//! Tangent frames around a surface normal.

use crate::Vec3;

/// `1 / sqrt(3)`: a unit vector always has at least one component whose
/// magnitude is at or below this.
pub const SQRT_OF_ONE_THIRD: f32 = 0.577_350_26;

/// Build two tangents that complete `normal` to an orthonormal frame.
///
/// The helper axis is the first of X, Y, Z whose component along `normal`
/// is below `1/sqrt(3)`, so it is never close to parallel with the normal.
///
/// * `normal` - must be normalized
pub fn orthonormal_basis(normal: Vec3) -> (Vec3, Vec3) {
    let axis = if normal.x.abs() < SQRT_OF_ONE_THIRD {
        Vec3::X
    } else if normal.y.abs() < SQRT_OF_ONE_THIRD {
        Vec3::Y
    } else {
        Vec3::Z
    };

    let tangent = axis.cross(normal).normalize();
    let bitangent = normal.cross(tangent).normalize();
    (tangent, bitangent)
}
