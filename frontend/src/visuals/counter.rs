pub const COUNTER_DURATION_MS: f64 = 2_000.0;

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by an animated counter `elapsed_ms` after it started.
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = (elapsed_ms / duration_ms).max(0.0);
    (f64::from(target) * ease_out_cubic(t)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(counter_value(308, 0.0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(308, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 308);
        assert_eq!(counter_value(308, 10_000.0, COUNTER_DURATION_MS), 308);
    }

    #[test]
    fn eases_out() {
        let halfway = counter_value(100, 1_000.0, COUNTER_DURATION_MS);
        assert_eq!(halfway, 88);
        let mut last = 0;
        for ms in (0..=2_000).step_by(100) {
            let v = counter_value(90, f64::from(ms), COUNTER_DURATION_MS);
            assert!(v >= last);
            last = v;
        }
    }
}
