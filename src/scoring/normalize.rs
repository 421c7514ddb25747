pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Maps `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
/// A zero-width input range yields `out_min`.
pub fn rescale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    let t = (value - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

pub fn band(magnitude: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    rescale(clamp(magnitude, 0.0, in_max), 0.0, in_max, out_min, out_max).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_degenerate_range_returns_out_min() {
        for value in [-50.0, 0.0, 3.0, 1e9] {
            assert_eq!(rescale(value, 4.0, 4.0, 45.0, 90.0), 45.0);
            assert_eq!(rescale(value, 0.0, 0.0, -3.0, 8.0), -3.0);
        }
    }

    #[test]
    fn rescale_maps_endpoints_and_midpoint() {
        assert_eq!(rescale(0.0, 0.0, 4.0, 45.0, 90.0), 45.0);
        assert_eq!(rescale(4.0, 0.0, 4.0, 45.0, 90.0), 90.0);
        assert_eq!(rescale(2.0, 0.0, 4.0, 45.0, 90.0), 67.5);
    }

    #[test]
    fn clamp_stays_within_bounds() {
        let samples = [-1e12, -400.0, -0.5, 0.0, 39.99, 40.0, 67.0, 96.0, 96.01, 1e12];
        for value in samples {
            let bounded = clamp(value, 40.0, 96.0);
            assert!((40.0..=96.0).contains(&bounded), "{value} -> {bounded}");
        }
        assert_eq!(clamp(-3.0, 0.0, 4.0), 0.0);
        assert_eq!(clamp(4.5, 0.0, 4.0), 4.0);
        assert_eq!(clamp(2.5, 0.0, 4.0), 2.5);
    }

    #[test]
    fn band_clamps_input_before_rescaling() {
        assert_eq!(band(0.0, 400.0, 45.0, 92.0), 45.0);
        assert_eq!(band(400.0, 400.0, 45.0, 92.0), 92.0);
        assert_eq!(band(10_000.0, 400.0, 45.0, 92.0), 92.0);
        assert_eq!(band(250.0, 500.0, 45.0, 92.0), 69.0);
    }
}
