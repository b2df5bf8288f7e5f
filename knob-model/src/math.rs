//! Small numeric helpers shared by fields and sliders.

/// Clamp `value` into `[min, max]`.
pub fn limit(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamp `value` into the input range, then map it linearly onto the output
/// range. A degenerate input range maps to `out_min`.
pub fn scale_limit(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    let (low, high) = if span > 0.0 {
        (in_min, in_max)
    } else {
        (in_max, in_min)
    };
    let value = limit(value, low, high);
    out_min + (value - in_min) / span * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::{limit, scale_limit};

    #[test]
    fn given_value_outside_range_when_limited_then_snaps_to_edge() {
        assert_eq!(limit(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(limit(3.0, 0.0, 1.0), 1.0);
        assert_eq!(limit(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn given_range_when_scaling_then_maps_and_clamps() {
        assert_eq!(scale_limit(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(scale_limit(-5.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(scale_limit(50.0, 0.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn given_degenerate_range_when_scaling_then_returns_output_minimum() {
        assert_eq!(scale_limit(3.0, 2.0, 2.0, 0.0, 100.0), 0.0);
    }
}
