//! Spacing algorithm: the interval table and the trial transitions.
//!
//! A recall moves a card one rung up the ladder, capped at the plateau.
//! Forgetting halves the rung instead of resetting it.

pub mod intervals;

pub use intervals::IntervalTable;

use crate::types::{Item, Outcome};
use chrono::{DateTime, Utc};

/// New scheduling state of a card after a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub trial: u32,
    /// Unix seconds.
    pub next_review_time: i64,
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fixed instant is a clock that never advances.
impl Clock for DateTime<Utc> {
    fn now(&self) -> DateTime<Utc> {
        *self
    }
}

/// `trial` may come from a table with a higher plateau; it is clamped first.
pub fn on_success(trial: u32, table: &IntervalTable, now: DateTime<Utc>) -> Schedule {
    let trial = trial.min(table.plateau());
    reschedule(table.plateau().min(trial.saturating_add(1)), table, now)
}

pub fn on_forgot(trial: u32, table: &IntervalTable, now: DateTime<Utc>) -> Schedule {
    let trial = trial.min(table.plateau());
    reschedule(trial / 2, table, now)
}

/// Apply the transition matching `outcome`.
pub fn schedule(
    trial: u32,
    outcome: Outcome,
    table: &IntervalTable,
    now: DateTime<Utc>,
) -> Schedule {
    match outcome {
        Outcome::Recalled => on_success(trial, table, now),
        Outcome::Forgot => on_forgot(trial, table, now),
    }
}

fn reschedule(trial: u32, table: &IntervalTable, now: DateTime<Utc>) -> Schedule {
    Schedule {
        trial,
        next_review_time: now.timestamp().saturating_add(table.delay(trial) as i64),
    }
}

impl Item {
    /// Copy of this item carrying `schedule`.
    pub fn rescheduled(self, schedule: Schedule) -> Item {
        Item {
            trial: schedule.trial,
            next_review_time: schedule.next_review_time,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn table() -> IntervalTable {
        IntervalTable::new(20, 2160.0).unwrap()
    }

    #[test]
    fn success_advances_one_rung() {
        let table = table();
        let result = on_success(5, &table, now());
        assert_eq!(result.trial, 6);
        assert_eq!(
            result.next_review_time,
            now().timestamp() + table.delay(6) as i64
        );
    }

    #[test]
    fn forgetting_halves_trial() {
        let table = table();
        let result = on_forgot(5, &table, now());
        assert_eq!(result.trial, 2);
        assert_eq!(
            result.next_review_time,
            now().timestamp() + table.delay(2) as i64
        );
    }

    #[test]
    fn forgetting_low_trials_returns_to_zero() {
        let table = table();
        for trial in [0, 1] {
            let result = on_forgot(trial, &table, now());
            assert_eq!(result.trial, 0);
            assert_eq!(result.next_review_time, now().timestamp());
        }
    }

    #[test]
    fn transitions_match_formulas_for_every_rung() {
        let table = table();
        for trial in 0..=table.plateau() {
            assert_eq!(
                schedule(trial, Outcome::Recalled, &table, now()).trial,
                (trial + 1).min(20)
            );
            assert_eq!(
                schedule(trial, Outcome::Forgot, &table, now()).trial,
                trial / 2
            );
        }
    }

    #[test]
    fn repeated_success_reaches_plateau_in_r_steps() {
        let table = IntervalTable::new(7, 100.0).unwrap();
        let mut trial = 0;
        for step in 1..=7 {
            trial = on_success(trial, &table, now()).trial;
            assert_eq!(trial, step);
        }
        for _ in 0..3 {
            let result = on_success(trial, &table, now());
            assert_eq!(result.trial, 7);
            assert_eq!(
                result.next_review_time,
                now().timestamp() + table.delay(7) as i64
            );
            assert!((table.delay(7) - 100.0 * 3600.0).abs() < 1e-6);
            trial = result.trial;
        }
    }

    #[test]
    fn trial_above_plateau_is_clamped_first() {
        let table = IntervalTable::new(4, 10.0).unwrap();
        let forgot = on_forgot(20, &table, now());
        assert_eq!(forgot.trial, 2);
        assert_eq!(
            forgot.next_review_time,
            now().timestamp() + table.delay(2) as i64
        );
        assert_eq!(on_success(20, &table, now()).trial, 4);
        assert_eq!(on_success(u32::MAX, &table, now()).trial, 4);
    }

    #[test]
    fn largest_accepted_delay_does_not_overflow() {
        let table = IntervalTable::new(1, 2.5e15).unwrap();
        let result = on_success(0, &table, now());
        assert_eq!(result.trial, 1);
        assert!(result.next_review_time > now().timestamp());

        let latest = DateTime::<Utc>::MAX_UTC;
        let result = on_success(0, &table, latest);
        assert!(result.next_review_time > latest.timestamp());
    }

    #[test]
    fn rescheduled_item_keeps_identity() {
        let item = Item {
            id: 42,
            next_review_time: 0,
            trial: 5,
        };
        let updated = item.rescheduled(on_forgot(item.trial, &table(), now()));
        assert_eq!(updated.id, 42);
        assert_eq!(updated.trial, 2);
    }
}
