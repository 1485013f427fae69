//! Scheduler configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REVIEWS_PARAM: u32 = 20;
pub const DEFAULT_HOURS_PARAM: f64 = 24.0 * 90.0;

/// Parameters of the spacing algorithm and the decks to review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Consecutive recalls after which the delay reaches `hours_param`.
    pub reviews_param: u32,
    /// Maximum delay between two reviews of the same card, in hours.
    pub hours_param: f64,
    /// Decks to load; empty means every deck.
    #[serde(default)]
    pub decks: Vec<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reviews_param: DEFAULT_REVIEWS_PARAM,
            hours_param: DEFAULT_HOURS_PARAM,
            decks: Vec::new(),
        }
    }
}

impl SchedulerConfig {
    /// Split a comma-separated deck list, dropping blank entries.
    pub fn parse_decks(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|deck| !deck.is_empty())
            .map(String::from)
            .collect()
    }
}
