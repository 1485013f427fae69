//! Scheduling engine for the `serious` spaced-repetition reviewer.
//!
//! Provides:
//! - The exponential interval table and trial transitions
//! - A due-card priority queue
//! - The review session state machine
//! - Storage and prompt traits implemented by the application

pub mod algorithm;
pub mod config;
pub mod error;
pub mod queue;
pub mod session;
pub mod store;
pub mod types;

pub use algorithm::{Clock, IntervalTable, Schedule, SystemClock};
pub use config::SchedulerConfig;
pub use error::{Result, SchedulerError, SessionError};
pub use queue::DueQueue;
pub use session::{Prompter, ReviewSession, SessionEnd, SessionSummary, Step};
pub use store::CardStore;
pub use types::{CardRecord, Item, NewCard, Outcome, QuestionReply, ReviewCard, DEFAULT_DECK};
