//! Repository pattern for database access.

use crate::db::error::DbError;
use crate::db::schema::{INSERT_BATCH_SIZE, SCHEMA};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serious_core::{CardRecord, CardStore, Item, NewCard, Outcome, ReviewCard};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// SQLite implementation of the card store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.create_schema_if_absent()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.create_schema_if_absent()?;
        Ok(repo)
    }

    pub fn create_schema_if_absent(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert new cards into `deck`, one transaction per batch.
    ///
    /// A question that already exists aborts the import with
    /// [`DbError::DuplicateQuestion`]; the offending batch is rolled back
    /// while earlier batches stay committed.
    pub fn insert_cards(&self, deck: &str, cards: &[NewCard]) -> Result<usize> {
        let mut inserted = 0;

        for batch in cards.chunks(INSERT_BATCH_SIZE) {
            let tx = self.conn.unchecked_transaction()?;
            {
                let mut stmt =
                    tx.prepare("INSERT INTO cards (question, answer, deck) VALUES (?1, ?2, ?3)")?;
                for card in batch {
                    stmt.execute(params![card.question, card.answer, deck])
                        .map_err(DbError::from_insert)?;
                }
            }
            tx.commit()?;
            inserted += batch.len();
        }

        tracing::debug!(deck, inserted, "inserted cards");
        Ok(inserted)
    }

    /// Full record of a card.
    pub fn get_card(&self, id: i64) -> Result<Option<CardRecord>> {
        self.conn
            .query_row(
                "SELECT id, question, answer, deck, recalled, forgot, history, trial, review_time FROM cards WHERE id = ?1",
                params![id],
                |row| {
                    Ok(CardRecord {
                        id: row.get(0)?,
                        question: row.get(1)?,
                        answer: row.get(2)?,
                        deck: row.get(3)?,
                        recalled_count: row.get(4)?,
                        forgot_count: row.get(5)?,
                        history: row.get(6)?,
                        trial: row.get(7)?,
                        next_review_time: row.get(8)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Id of the card asking `question`.
    #[cfg(test)]
    pub(crate) fn find_by_question(&self, question: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(
                "SELECT id FROM cards WHERE question = ?1",
                params![question],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Number of cards across all decks.
    pub fn count_cards(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl CardStore for SqliteRepository {
    type Error = DbError;

    fn load_items(&self, decks: &[String]) -> Result<Vec<Item>> {
        let mut sql = String::from("SELECT id, review_time, trial FROM cards");
        if !decks.is_empty() {
            let placeholders = vec!["?"; decks.len()].join(", ");
            sql.push_str(&format!(" WHERE deck IN ({placeholders})"));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let items = stmt
            .query_map(params_from_iter(decks), |row| {
                Ok(Item {
                    id: row.get(0)?,
                    next_review_time: row.get(1)?,
                    trial: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = items.len(), ?decks, "loaded items");
        Ok(items)
    }

    fn fetch_card_content(&self, id: i64) -> Result<ReviewCard> {
        self.conn
            .query_row(
                "SELECT review_time, trial, recalled, forgot, question, answer, history FROM cards WHERE id = ?1",
                params![id],
                |row| {
                    Ok(ReviewCard {
                        item: Item {
                            id,
                            next_review_time: row.get(0)?,
                            trial: row.get(1)?,
                        },
                        recalled_count: row.get(2)?,
                        forgot_count: row.get(3)?,
                        question: row.get(4)?,
                        answer: row.get(5)?,
                        history: row.get(6)?,
                    })
                },
            )
            .optional()?
            .ok_or(DbError::CardNotFound(id))
    }

    fn update_card(
        &self,
        id: i64,
        next_review_time: i64,
        trial: u32,
        outcome: Outcome,
    ) -> Result<()> {
        let sql = match outcome {
            Outcome::Recalled => {
                "UPDATE cards SET review_time = ?1, trial = ?2, recalled = recalled + 1, history = history || 'o' WHERE id = ?3"
            }
            Outcome::Forgot => {
                "UPDATE cards SET review_time = ?1, trial = ?2, forgot = forgot + 1, history = history || 'x' WHERE id = ?3"
            }
        };

        let changed = self.conn.execute(sql, params![next_review_time, trial, id])?;
        if changed == 0 {
            return Err(DbError::CardNotFound(id));
        }

        tracing::debug!(id, trial, next_review_time, ?outcome, "updated card");
        Ok(())
    }
}
