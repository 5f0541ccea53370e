//! Reflection, refraction and ray spawning helpers.

use crate::{Ray, Vec3};

/// Distance a spawned ray's origin is pushed off the surface it leaves.
pub const RAY_EPSILON: f32 = 1e-4;

/// Reflect `v` about the normal `n`.
///
/// `v` points toward the surface, the result points away from it.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n`.
///
/// `eta` is the incident-side index over the transmitted-side index. `v` and
/// `n` must be normalized and face each other. Returns `None` on total
/// internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let n_dot_v = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - n_dot_v * n_dot_v);
    if k < 0.0 {
        None
    } else {
        Some(eta * v - (eta * n_dot_v + k.sqrt()) * n)
    }
}

/// Spawn a ray leaving `point` in `direction`.
///
/// The origin moves `RAY_EPSILON` along `normal` onto the side the ray
/// travels into, so it cannot immediately hit the surface it started on.
#[inline]
pub fn offset_ray(point: Vec3, normal: Vec3, direction: Vec3) -> Ray {
    let side = if direction.dot(normal) >= 0.0 { 1.0 } else { -1.0 };
    Ray::new(point + normal * (side * RAY_EPSILON), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(-Vec3::Y, Vec3::Y);
        assert!((r - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_reflect_preserves_angle() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::Y;
        let r = reflect(v, n);

        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        assert!(((-v).dot(n) - r.dot(n)).abs() < 1e-6);
    }

    #[test]
    fn test_refract_matched_index_passes_straight() {
        let v = Vec3::new(0.6, -0.8, 0.0);
        let t = refract(v, Vec3::Y, 1.0).unwrap();
        assert!((t - v).length() < 1e-6);
    }

    #[test]
    fn test_refract_snell_law() {
        let eta = 1.0 / 1.5;
        let v = Vec3::new(0.5, -(0.75f32).sqrt(), 0.0);
        let t = refract(v, Vec3::Y, eta).unwrap().normalize();

        let sin_i = v.x.abs();
        let sin_t = t.x.abs();
        assert!((sin_i * eta - sin_t).abs() < 1e-5, "sin_t={}", sin_t);
        assert!(t.y < 0.0, "refracted ray should continue below the surface");
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Grazing ray leaving glass for air
        let v = Vec3::new(0.9, -(0.19f32).sqrt(), 0.0);
        assert!(refract(v, Vec3::Y, 1.5).is_none());
    }

    #[test]
    fn test_offset_ray_outgoing_side() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let up = offset_ray(p, Vec3::Y, Vec3::new(0.0, 1.0, 0.0));
        assert!((up.origin - (p + Vec3::Y * RAY_EPSILON)).length() < 1e-7);

        let down = offset_ray(p, Vec3::Y, Vec3::new(0.0, -1.0, 0.0));
        assert!((down.origin - (p - Vec3::Y * RAY_EPSILON)).length() < 1e-7);
        assert_eq!(down.direction, -Vec3::Y);
    }
}
