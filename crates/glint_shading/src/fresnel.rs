//! Dielectric Fresnel reflectance.

/// Unpolarized reflectance of a smooth dielectric interface.
///
/// Uses the full Fresnel equations, not Schlick's approximation.
///
/// - `cos_theta_i`: cosine between the incident direction and the normal on
///   the incident side; must be positive
/// - `relative_ior`: incident-side index over transmitted-side index
///
/// Returns 1.0 under total internal reflection.
pub fn fresnel(cos_theta_i: f32, relative_ior: f32) -> f32 {
    if relative_ior == 1.0 {
        return 0.0;
    }

    let sin_theta_t_sqr = relative_ior * relative_ior * (1.0 - cos_theta_i * cos_theta_i);
    if sin_theta_t_sqr > 1.0 {
        return 1.0;
    }

    let cos_theta_t = (1.0 - sin_theta_t_sqr).sqrt();
    let rs = (relative_ior * cos_theta_i - cos_theta_t) / (relative_ior * cos_theta_i + cos_theta_t);
    let rp = (cos_theta_i - relative_ior * cos_theta_t) / (cos_theta_i + relative_ior * cos_theta_t);
    (rs * rs + rp * rp) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresnel_matched_index_is_zero() {
        for i in 1..=20 {
            let cos = i as f32 / 20.0;
            assert_eq!(fresnel(cos, 1.0), 0.0);
        }
    }

    #[test]
    fn test_fresnel_normal_incidence_glass() {
        // ((n1 - n2) / (n1 + n2))^2 = 0.04 for air/glass, either direction
        let into_glass = fresnel(1.0, 1.0 / 1.5);
        let out_of_glass = fresnel(1.0, 1.5);
        assert!((into_glass - 0.04).abs() < 1e-5, "into_glass={}", into_glass);
        assert!((out_of_glass - 0.04).abs() < 1e-5, "out_of_glass={}", out_of_glass);
    }

    #[test]
    fn test_fresnel_total_internal_reflection() {
        // 1.5^2 * (1 - 0.5^2) = 1.6875 > 1
        assert_eq!(fresnel(0.5, 1.5), 1.0);
        // Just past the critical angle of glass (~41.8 degrees from normal)
        let cos = (45.0f32).to_radians().cos();
        assert_eq!(fresnel(cos, 1.5), 1.0);
    }

    #[test]
    fn test_fresnel_bounds() {
        let iors = [0.1, 0.5, 1.0 / 1.5, 0.99, 1.01, 1.33, 1.5, 2.4, 10.0];
        for &ior in &iors {
            for i in 1..=100 {
                let cos = i as f32 / 100.0;
                let r = fresnel(cos, ior);
                assert!(
                    (0.0..=1.0).contains(&r),
                    "fresnel({}, {}) = {} out of range",
                    cos,
                    ior,
                    r
                );
            }
        }
    }

    #[test]
    fn test_fresnel_oblique_uses_exact_equations() {
        // 60 degrees into glass, checked against the angle form of the
        // Fresnel equations
        let eta = 1.0 / 1.5;
        let theta_i = 0.5f32.acos();
        let theta_t = (theta_i.sin() * eta).asin();
        let rs = -(theta_i - theta_t).sin() / (theta_i + theta_t).sin();
        let rp = (theta_i - theta_t).tan() / (theta_i + theta_t).tan();
        let expected = (rs * rs + rp * rp) / 2.0;

        let r = fresnel(0.5, eta);
        assert!((r - expected).abs() < 1e-5, "fresnel={} expected={}", r, expected);
        assert!((r - 0.0892).abs() < 1e-3, "fresnel={}", r);

        // Schlick's approximation lands near 0.07 here
        let schlick = 0.04 + 0.96 * 0.5f32.powi(5);
        assert!((r - schlick).abs() > 1e-2, "fresnel={} matches schlick={}", r, schlick);
    }

    #[test]
    fn test_fresnel_grows_toward_grazing() {
        let ior = 1.0 / 1.5;
        let near_normal = fresnel(0.95, ior);
        let grazing = fresnel(0.05, ior);
        assert!(grazing > near_normal, "grazing={} near_normal={}", grazing, near_normal);
        assert!(grazing > 0.5);
    }
}
