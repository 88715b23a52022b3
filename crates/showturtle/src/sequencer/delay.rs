// src/sequencer/delay.rs
use std::time::Duration;

/// Exponentielle Verkürzung der Anzeigedauer pro Schritt.
///
/// `elapsed = min(index * ms_per_step, ramp_ms)`, `progress = elapsed / ramp_ms`,
/// `delay = start - (start - end) * (1 - e^(-steepness * progress))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayCurve {
    pub start_ms: f64,
    pub end_ms: f64,
    pub ramp_ms: f64,
    pub ms_per_step: f64,
    pub steepness: f64,
}

impl Default for DelayCurve {
    fn default() -> Self {
        Self {
            start_ms: 700.0,
            end_ms: 0.5,
            ramp_ms: 3000.0,
            ms_per_step: 25.0,
            steepness: 6.0,
        }
    }
}

impl DelayCurve {
    pub fn delay_ms(&self, index: usize) -> f64 {
        let elapsed = (index as f64 * self.ms_per_step).min(self.ramp_ms);
        let progress = elapsed / self.ramp_ms;
        let exponential_progress = 1.0 - (-self.steepness * progress).exp();
        self.start_ms - (self.start_ms - self.end_ms) * exponential_progress
    }

    pub fn delay(&self, index: usize) -> Duration {
        Duration::from_nanos((self.delay_ms(index).max(0.0) * 1_000_000.0).round() as u64)
    }

    /// Ab diesem Index bleibt die Verzögerung konstant.
    pub fn saturation_index(&self) -> usize {
        (self.ramp_ms / self.ms_per_step).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_ms() -> f64 {
        700.0 - 699.5 * (1.0 - (-6.0f64).exp())
    }

    #[test]
    fn starts_at_start_delay() {
        assert_eq!(DelayCurve::default().delay_ms(0), 700.0);
    }

    #[test]
    fn strictly_decreasing_until_saturation() {
        let curve = DelayCurve::default();
        assert_eq!(curve.saturation_index(), 120);
        for index in 0..119 {
            assert!(
                curve.delay_ms(index + 1) < curve.delay_ms(index),
                "index {index}"
            );
        }
    }

    #[test]
    fn constant_after_saturation() {
        let curve = DelayCurve::default();
        let floor = floor_ms();
        for index in [120, 121, 200, 10_000] {
            assert_eq!(curve.delay_ms(index), floor);
        }
        assert!(floor > 0.5 && floor < 3.0);
    }

    #[test]
    fn known_values() {
        let curve = DelayCurve::default();
        // index 1 -> progress 25/3000
        let expected = 700.0 - 699.5 * (1.0 - (-6.0 * (25.0f64 / 3000.0)).exp());
        assert_eq!(curve.delay_ms(1), expected);
        assert_eq!(curve.delay(0), Duration::from_millis(700));
        let floor = Duration::from_nanos((floor_ms() * 1e6).round() as u64);
        assert_eq!(curve.delay(10_000), floor);
    }
}
