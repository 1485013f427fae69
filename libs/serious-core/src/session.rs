//! Review session state machine.
//!
//! Each step pops the earliest due card, materializes its content, asks the
//! user to reveal the answer (or quit), collects the recall judgment and
//! writes the new schedule back before reinserting the card:
//!
//! ```text
//! Idle -> Presenting -> AwaitingReveal -> AwaitingRecallJudgment -> Rescheduled -> Idle
//!                                      \-> Stopped
//! ```
//!
//! The session ends when the queue is empty, when the earliest card is not
//! yet due, or when the user quits. A card popped before quitting is dropped
//! from the queue without being touched in storage, so it stays due.

use crate::algorithm::{self, Clock, IntervalTable, SystemClock};
use crate::error::SessionError;
use crate::queue::DueQueue;
use crate::store::CardStore;
use crate::types::{Item, Outcome, QuestionReply, ReviewCard};
use std::io;

/// User interaction boundary.
///
/// Implementations keep re-prompting on unrecognized input; only a valid
/// reply or an I/O failure is returned.
pub trait Prompter {
    fn present_question(&mut self, card: &ReviewCard) -> io::Result<QuestionReply>;

    /// Blocks until the user judges their recall.
    fn present_answer(&mut self, card: &ReviewCard) -> io::Result<Outcome>;
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every loaded card was reviewed.
    QueueEmpty,
    /// The earliest remaining card is scheduled in the future.
    NothingDue,
    /// The user asked to stop.
    Quit,
}

/// Result of a single [`ReviewSession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Rescheduled { item: Item, outcome: Outcome },
    Stopped,
    Finished(SessionEnd),
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub recalled: usize,
    pub forgot: usize,
    pub end: SessionEnd,
}

pub struct ReviewSession<C = SystemClock> {
    queue: DueQueue,
    table: IntervalTable,
    clock: C,
}

impl ReviewSession<SystemClock> {
    pub fn new(queue: DueQueue, table: IntervalTable) -> Self {
        Self::with_clock(queue, table, SystemClock)
    }
}

impl<C: Clock> ReviewSession<C> {
    pub fn with_clock(queue: DueQueue, table: IntervalTable, clock: C) -> Self {
        Self {
            queue,
            table,
            clock,
        }
    }

    pub fn queue(&self) -> &DueQueue {
        &self.queue
    }

    /// Earliest review time still queued, for "next review" feedback.
    pub fn next_review_time(&self) -> Option<i64> {
        self.queue.next_review_time()
    }

    /// Review due cards until the session ends.
    pub fn run<S, P>(
        &mut self,
        store: &S,
        prompter: &mut P,
    ) -> Result<SessionSummary, SessionError<S::Error>>
    where
        S: CardStore,
        P: Prompter,
    {
        let mut reviewed = 0;
        let mut recalled = 0;
        let mut forgot = 0;

        let end = loop {
            match self.step(store, prompter)? {
                Step::Rescheduled { outcome, .. } => {
                    reviewed += 1;
                    match outcome {
                        Outcome::Recalled => recalled += 1,
                        Outcome::Forgot => forgot += 1,
                    }
                }
                Step::Stopped => break SessionEnd::Quit,
                Step::Finished(end) => break end,
            }
        };

        Ok(SessionSummary {
            reviewed,
            recalled,
            forgot,
            end,
        })
    }

    /// Present at most one due card.
    pub fn step<S, P>(&mut self, store: &S, prompter: &mut P) -> Result<Step, SessionError<S::Error>>
    where
        S: CardStore,
        P: Prompter,
    {
        let now = self.clock.now();

        let Some(earliest) = self.queue.peek_earliest().copied() else {
            return Ok(Step::Finished(SessionEnd::QueueEmpty));
        };
        if !earliest.is_due(now.timestamp()) {
            return Ok(Step::Finished(SessionEnd::NothingDue));
        }
        self.queue.pop_earliest();

        let card = store
            .fetch_card_content(earliest.id)
            .map_err(SessionError::Store)?;

        if prompter.present_question(&card)? == QuestionReply::Quit {
            return Ok(Step::Stopped);
        }
        let outcome = prompter.present_answer(&card)?;

        let schedule = algorithm::schedule(earliest.trial, outcome, &self.table, self.clock.now());
        store
            .update_card(
                earliest.id,
                schedule.next_review_time,
                schedule.trial,
                outcome,
            )
            .map_err(SessionError::Store)?;

        let item = earliest.rescheduled(schedule);
        self.queue.reinsert(item);
        Ok(Step::Rescheduled { item, outcome })
    }
}
