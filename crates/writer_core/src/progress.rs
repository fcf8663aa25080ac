//! Goal progress derived from a word count and the word limit.

/// Hue at 0% of the goal, on a `[0, 1]` hue wheel.
pub const GREEN_HUE: f64 = 1.0 / 3.0;
/// Hue at 70% of the goal.
pub const YELLOW_HUE: f64 = 1.0 / 6.0;
/// Hue at 100% of the goal.
pub const ORANGE_HUE: f64 = 1.0 / 12.0;

const YELLOW_AT: f64 = 0.7;

/// Colour signal for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tint {
    /// Normalized hue for a count within the limit.
    Hue(f64),
    /// Count exceeds the limit; the renderer uses its fixed error colour.
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub count: usize,
    pub limit: u32,
    pub remaining: usize,
    pub over_by: usize,
    /// `count / limit`, capped at 1.0.
    pub fraction: f64,
    pub is_over_limit: bool,
    pub tint: Tint,
}

impl Progress {
    pub fn evaluate(count: usize, limit: u32) -> Self {
        let limit_words = limit as usize;
        let is_over_limit = count > limit_words;
        let fraction = if limit > 0 {
            (count as f64 / f64::from(limit)).min(1.0)
        } else {
            0.0
        };
        let tint = if is_over_limit {
            Tint::Alert
        } else {
            Tint::Hue(hue_for_fraction(fraction))
        };

        Self {
            count,
            limit,
            remaining: limit_words.saturating_sub(count),
            over_by: count.saturating_sub(limit_words),
            fraction,
            is_over_limit,
            tint,
        }
    }
}

/// Green at 0, yellow at 0.7, orange at 1.0, linear in between.
pub fn hue_for_fraction(fraction: f64) -> f64 {
    let p = fraction.clamp(0.0, 1.0);
    if p <= YELLOW_AT {
        lerp(GREEN_HUE, YELLOW_HUE, p / YELLOW_AT)
    } else {
        lerp(YELLOW_HUE, ORANGE_HUE, (p - YELLOW_AT) / (1.0 - YELLOW_AT))
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn under_limit_reports_remaining() {
        let progress = Progress::evaluate(120, 500);
        assert_eq!(progress.remaining, 380);
        assert_eq!(progress.over_by, 0);
        assert!(!progress.is_over_limit);
        assert!(approx(progress.fraction, 0.24));
    }

    #[test]
    fn over_limit_reports_overflow_and_alerts() {
        let progress = Progress::evaluate(520, 500);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.over_by, 20);
        assert!(progress.is_over_limit);
        assert_eq!(progress.fraction, 1.0);
        assert_eq!(progress.tint, Tint::Alert);
    }

    #[test]
    fn exactly_at_limit_is_not_over() {
        let progress = Progress::evaluate(500, 500);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.over_by, 0);
        assert!(!progress.is_over_limit);
        assert_eq!(progress.fraction, 1.0);
        assert!(matches!(progress.tint, Tint::Hue(h) if approx(h, ORANGE_HUE)));
    }

    #[test]
    fn zero_limit_does_not_divide() {
        let progress = Progress::evaluate(3, 0);
        assert_eq!(progress.fraction, 0.0);
        assert_eq!(progress.over_by, 3);
    }

    #[test]
    fn remaining_and_over_by_partition_the_gap() {
        for limit in [1u32, 7, 500, 10_000] {
            for count in [0usize, 1, 6, 7, 8, 499, 500, 501, 20_000] {
                let p = Progress::evaluate(count, limit);
                let gap = (limit as i64 - count as i64).unsigned_abs() as usize;
                assert_eq!(p.remaining + p.over_by, gap);
                assert!(p.remaining == 0 || p.over_by == 0);
            }
        }
    }

    #[test]
    fn fraction_is_monotonic_and_capped() {
        let mut previous = 0.0;
        for count in 0..1_200 {
            let fraction = Progress::evaluate(count, 1_000).fraction;
            assert!(fraction >= previous);
            assert!(fraction <= 1.0);
            previous = fraction;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn hue_hits_anchor_points() {
        assert!(approx(hue_for_fraction(0.0), GREEN_HUE));
        assert!(approx(hue_for_fraction(0.7), YELLOW_HUE));
        assert!(approx(hue_for_fraction(1.0), ORANGE_HUE));
        assert!(approx(hue_for_fraction(0.35), (GREEN_HUE + YELLOW_HUE) / 2.0));
        assert!(approx(hue_for_fraction(0.85), (YELLOW_HUE + ORANGE_HUE) / 2.0));
    }
}
