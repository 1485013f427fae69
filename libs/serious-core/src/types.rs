//! Core types for the review scheduler.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Deck assigned to cards imported without an explicit deck.
pub const DEFAULT_DECK: &str = "default";

/// Number of history markers shown next to a question.
pub const HISTORY_DISPLAY_LEN: usize = 5;

/// Result of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Recalled,
    Forgot,
}

impl Outcome {
    /// Marker appended to a card's history.
    pub fn marker(self) -> char {
        match self {
            Self::Recalled => 'o',
            Self::Forgot => 'x',
        }
    }
}

/// Reply to a presented question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionReply {
    Reveal,
    Quit,
}

/// Persisted card with its scheduling state and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub deck: String,
    pub recalled_count: u32,
    pub forgot_count: u32,
    /// Outcome markers, oldest first.
    pub history: String,
    pub trial: u32,
    /// Unix seconds.
    pub next_review_time: i64,
}

impl CardRecord {
    /// Scheduling projection of this record.
    pub fn item(&self) -> Item {
        Item {
            id: self.id,
            next_review_time: self.next_review_time,
            trial: self.trial,
        }
    }
}

/// Scheduling unit held in the due queue.
///
/// Ordered by `next_review_time`; the remaining fields only keep the
/// ordering total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub next_review_time: i64,
    pub trial: u32,
}

impl Item {
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review_time <= now
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.next_review_time
            .cmp(&other.next_review_time)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.trial.cmp(&other.trial))
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Card content materialized at the moment it is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCard {
    pub item: Item,
    pub recalled_count: u32,
    pub forgot_count: u32,
    pub question: String,
    pub answer: String,
    pub history: String,
}

impl ReviewCard {
    /// Most recent history markers, newest first, padded with `-`.
    pub fn recent_history(&self) -> String {
        let mut recent: String = self
            .history
            .chars()
            .rev()
            .take(HISTORY_DISPLAY_LEN)
            .collect();
        while recent.chars().count() < HISTORY_DISPLAY_LEN {
            recent.push('-');
        }
        recent
    }

    /// Status line shown above the question, e.g. `3/4 oxoo-`.
    pub fn status_line(&self) -> String {
        format!(
            "{}/{} {}",
            self.recalled_count,
            self.recalled_count + self.forgot_count,
            self.recent_history()
        )
    }
}

/// Question/answer pair waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub question: String,
    pub answer: String,
}

impl NewCard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
