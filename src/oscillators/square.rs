//! Square wave with adjustable duty cycle.

use super::{cycle_position, period};

/// Duty cycle used when none is given.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.5;

/// Square wave value at `index`.
///
/// High (`1.0`) while the position within the cycle is below
/// `period * duty_cycle`, low (`-1.0`) for the rest of the cycle.
#[inline]
pub fn square(index: u64, sample_rate: u32, frequency: f64, duty_cycle: f64) -> f64 {
    let period = period(sample_rate, frequency);
    if cycle_position(index, period) < period * duty_cycle {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_hertz_at_one_hundred() {
        let samples: Vec<f64> = (0..100).map(|i| square(i, 100, 2.0, 0.5)).collect();
        assert!(samples[0..25].iter().all(|&s| s == 1.0));
        assert!(samples[25..50].iter().all(|&s| s == -1.0));
        assert!(samples[50..75].iter().all(|&s| s == 1.0));
        assert!(samples[75..100].iter().all(|&s| s == -1.0));
    }

    #[test]
    fn test_symmetric_duty_cycle() {
        let samples_per_period = 44100 / 100;
        let mut high_count: u32 = 0;
        let mut low_count: u32 = 0;
        for index in 0..samples_per_period {
            if square(index, 44100, 100.0, DEFAULT_DUTY_CYCLE) == 1.0 {
                high_count += 1;
            } else {
                low_count += 1;
            }
        }
        assert!(high_count.abs_diff(low_count) <= 1);
    }

    #[test]
    fn test_narrow_duty_cycle() {
        // 10 samples per cycle, 20% high
        let high = (0..10).filter(|&i| square(i, 100, 10.0, 0.2) == 1.0).count();
        assert_eq!(high, 2);
    }

    #[test]
    fn test_full_duty_cycle_is_always_high() {
        for index in 0..1000 {
            assert_eq!(square(index, 44100, 440.0, 1.0), 1.0);
        }
    }

    #[test]
    fn test_only_two_levels() {
        for index in 0..1000 {
            let sample = square(index, 44100, 440.0, 0.37);
            assert!(sample == 1.0 || sample == -1.0);
        }
    }
}
