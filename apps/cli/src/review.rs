//! Review command: load due cards and run a session over them.

use crate::db::SqliteRepository;
use anyhow::Context;
use serious_core::{
    Clock, DueQueue, IntervalTable, Prompter, ReviewSession, SchedulerConfig, SessionSummary,
};

/// What a review run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewReport {
    /// No card matched the deck filter.
    NoCards,
    Finished {
        summary: SessionSummary,
        /// Earliest review time among the loaded cards after the session.
        next_review_time: Option<i64>,
    },
}

pub fn run_review<P, C>(
    repo: &SqliteRepository,
    scheduler: &SchedulerConfig,
    prompter: &mut P,
    clock: C,
) -> anyhow::Result<ReviewReport>
where
    P: Prompter,
    C: Clock,
{
    let table = IntervalTable::from_config(scheduler).context("invalid scheduler parameters")?;
    let queue = DueQueue::load(repo, &scheduler.decks).context("failed to load cards")?;
    if queue.is_empty() {
        return Ok(ReviewReport::NoCards);
    }

    tracing::debug!(cards = queue.len(), "starting review session");
    let mut session = ReviewSession::with_clock(queue, table, clock);
    let summary = session
        .run(repo, prompter)
        .context("review session aborted")?;
    tracing::debug!(?summary, queued = session.queue().len(), "review session finished");

    Ok(ReviewReport::Finished {
        summary,
        next_review_time: session.next_review_time(),
    })
}
