//! Exponential interval table.
//!
//! With `r` reviews to reach the plateau and a maximum delay of `h` hours,
//! the delay after `n` consecutive recalls is
//!
//! ```text
//! interval[n] = (exp(n * ln(h + 1) / r) - 1) hours,   n = 0..=r
//! ```
//!
//! so `interval[0]` is zero and `interval[r]` is exactly `h` hours.

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};

const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;

/// Precomputed delays, in seconds, for every trial rung.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable {
    intervals: Vec<f64>,
}

impl IntervalTable {
    pub fn new(reviews_param: u32, hours_param: f64) -> Result<Self> {
        if reviews_param == 0 {
            return Err(SchedulerError::InvalidReviewsParam(reviews_param));
        }
        // The plateau delay must fit in whole i64 seconds.
        if !hours_param.is_finite()
            || hours_param <= 0.0
            || hours_param * SECONDS_PER_HOUR >= i64::MAX as f64
        {
            return Err(SchedulerError::InvalidHoursParam(hours_param));
        }

        let c = (hours_param + 1.0).ln() / f64::from(reviews_param);
        let intervals = (0..=reviews_param)
            .map(|n| ((f64::from(n) * c).exp() - 1.0) * SECONDS_PER_HOUR)
            .collect();

        Ok(Self { intervals })
    }

    pub fn from_config(config: &SchedulerConfig) -> Result<Self> {
        Self::new(config.reviews_param, config.hours_param)
    }

    /// Highest trial rung; its delay is the configured maximum.
    pub fn plateau(&self) -> u32 {
        (self.intervals.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn get(&self, trial: u32) -> Option<f64> {
        self.intervals.get(trial as usize).copied()
    }

    /// Delay for `trial`, clamped to the plateau rung.
    pub fn delay(&self, trial: u32) -> f64 {
        self.intervals[trial.min(self.plateau()) as usize]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[(u32, f64)] = &[(1, 0.5), (1, 24.0), (3, 1.0), (20, 2160.0), (50, 10_000.0)];

    #[test]
    fn default_parameters_reach_ninety_days() {
        let table = IntervalTable::new(20, 2160.0).unwrap();
        assert_eq!(table.len(), 21);
        assert_eq!(table.get(0), Some(0.0));
        assert!((table.delay(20) - 7_776_000.0).abs() < 1e-3);
    }

    #[test]
    fn first_and_last_rungs() {
        for &(r, h) in PARAMS {
            let table = IntervalTable::new(r, h).unwrap();
            assert_eq!(table.plateau(), r);
            assert_eq!(table.delay(0), 0.0);
            let expected = h * 3600.0;
            assert!(
                (table.delay(r) - expected).abs() <= expected * 1e-9,
                "r={r} h={h}: {} != {expected}",
                table.delay(r)
            );
        }
    }

    #[test]
    fn strictly_increasing_and_convex() {
        for &(r, h) in PARAMS {
            let table = IntervalTable::new(r, h).unwrap();
            let steps: Vec<f64> = table.as_slice().windows(2).map(|w| w[1] - w[0]).collect();
            assert!(steps.iter().all(|&step| step > 0.0));
            assert!(steps.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn delay_clamps_past_plateau() {
        let table = IntervalTable::new(4, 10.0).unwrap();
        assert_eq!(table.get(7), None);
        assert_eq!(table.delay(7), table.delay(4));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            IntervalTable::new(0, 10.0),
            Err(SchedulerError::InvalidReviewsParam(0))
        );
        assert_eq!(
            IntervalTable::new(5, 0.0),
            Err(SchedulerError::InvalidHoursParam(0.0))
        );
        assert!(IntervalTable::new(5, f64::NAN).is_err());
        assert!(IntervalTable::new(5, -3.0).is_err());
    }

    #[test]
    fn rejects_hours_beyond_representable_seconds() {
        assert_eq!(
            IntervalTable::new(1, 1e300),
            Err(SchedulerError::InvalidHoursParam(1e300))
        );
        assert_eq!(
            IntervalTable::new(20, 2.6e15),
            Err(SchedulerError::InvalidHoursParam(2.6e15))
        );
        let table = IntervalTable::new(20, 2.5e15).unwrap();
        assert!(table.delay(20) < i64::MAX as f64);
    }

    #[test]
    fn builds_from_config() {
        let table = IntervalTable::from_config(&SchedulerConfig::default()).unwrap();
        assert_eq!(table.plateau(), 20);
    }
}
