//! Storage contract used by the review session.

use crate::types::{Item, Outcome, ReviewCard};

/// Durable card storage.
///
/// Implementations must apply `update_card` atomically: the counter, the
/// history marker, the trial and the review time change together or not
/// at all.
pub trait CardStore {
    type Error: std::error::Error + 'static;

    /// Scheduling projections of every card in `decks`, or of all cards
    /// when `decks` is empty.
    fn load_items(&self, decks: &[String]) -> Result<Vec<Item>, Self::Error>;

    fn fetch_card_content(&self, id: i64) -> Result<ReviewCard, Self::Error>;

    /// Record a review: store the new schedule, bump the counter matching
    /// `outcome` and append its marker to the history.
    fn update_card(
        &self,
        id: i64,
        next_review_time: i64,
        trial: u32,
        outcome: Outcome,
    ) -> Result<(), Self::Error>;
}
