//! Priority queue of cards ordered by next review time.

use crate::store::CardStore;
use crate::types::Item;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap of [`Item`]s keyed by `next_review_time`.
#[derive(Debug, Clone, Default)]
pub struct DueQueue {
    heap: BinaryHeap<Reverse<Item>>,
}

impl DueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the queue from every card of `decks` (all decks if empty).
    pub fn load<S: CardStore>(store: &S, decks: &[String]) -> Result<Self, S::Error> {
        Ok(Self::from_items(store.load_items(decks)?))
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            heap: items.into_iter().map(Reverse).collect(),
        }
    }

    pub fn peek_earliest(&self) -> Option<&Item> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    pub fn pop_earliest(&mut self) -> Option<Item> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    pub fn reinsert(&mut self, item: Item) {
        self.heap.push(Reverse(item));
    }

    /// Review time of the earliest item, if any.
    pub fn next_review_time(&self) -> Option<i64> {
        self.peek_earliest().map(|item| item.next_review_time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
