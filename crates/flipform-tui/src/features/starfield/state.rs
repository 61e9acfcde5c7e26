//! Starfield state: the cached point set and twinkle timing.

use std::time::Duration;

use flipform_core::{DecorativePoint, generate_points};

/// Glyph ramp from dim to bright.
const RAMP: [Twinkle; 3] = [Twinkle::Dim, Twinkle::Mid, Twinkle::Bright];

/// Brightness step of one star at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twinkle {
    Dim,
    Mid,
    Bright,
}

/// Background point set, generated once per mount.
#[derive(Debug, Clone)]
pub struct StarfieldState {
    points: Vec<DecorativePoint>,
    period: Duration,
}

impl StarfieldState {
    pub fn new(count: usize, period: Duration) -> Self {
        Self {
            points: generate_points(count),
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn points(&self) -> &[DecorativePoint] {
        &self.points
    }

    /// Brightness of `point` at `clock`.
    ///
    /// Each star loops dim → bright → dim once per period, shifted by its
    /// animation delay.
    pub fn twinkle(&self, point: &DecorativePoint, clock: Duration) -> Twinkle {
        let period = self.period.as_secs_f64();
        let shifted = clock.as_secs_f64() + f64::from(point.delay_secs);
        let phase = (shifted % period) / period;
        // 0 at the loop edges, 1 mid-loop.
        let level = 0.5 - 0.5 * (phase * std::f64::consts::TAU).cos();
        let idx = ((level * RAMP.len() as f64) as usize).min(RAMP.len() - 1);
        RAMP[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_points_generated_once_from_count() {
        let stars = StarfieldState::new(50, ms(3000));
        assert_eq!(stars.points().len(), 50);
        assert_eq!(stars.points(), generate_points(50).as_slice());
        assert!(StarfieldState::new(0, ms(3000)).points().is_empty());
    }

    #[test]
    fn test_twinkle_loops_with_period() {
        let stars = StarfieldState::new(1, ms(3000));
        let point = stars.points()[0];
        assert_eq!(stars.twinkle(&point, ms(0)), Twinkle::Dim);
        assert_eq!(stars.twinkle(&point, ms(1500)), Twinkle::Bright);
        assert_eq!(stars.twinkle(&point, ms(3000)), Twinkle::Dim);
        assert_eq!(stars.twinkle(&point, ms(4500)), Twinkle::Bright);
    }

    #[test]
    fn test_delay_shifts_the_loop() {
        let stars = StarfieldState::new(2, ms(2000));
        // Point 1 has a 2s delay: a full period, so it lines up with point 0.
        let (a, b) = (stars.points()[0], stars.points()[1]);
        assert_eq!(b.delay_secs, 2);
        assert_eq!(stars.twinkle(&a, ms(500)), stars.twinkle(&b, ms(500)));

        let stars = StarfieldState::new(3, ms(4000));
        let c = stars.points()[2];
        assert_eq!(c.delay_secs, 1);
        // At t=1s point 2 is at its peak (1s + 1s = half the 4s period).
        assert_eq!(stars.twinkle(&c, ms(1000)), Twinkle::Bright);
        assert_eq!(stars.twinkle(&a, ms(1000)), Twinkle::Mid);
    }
}
