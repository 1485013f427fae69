//! SQLite schema definitions.

/// Complete schema for the card database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    id INTEGER PRIMARY KEY,
    recalled INTEGER NOT NULL DEFAULT 0,
    forgot INTEGER NOT NULL DEFAULT 0,
    review_time INTEGER NOT NULL DEFAULT 0,
    trial INTEGER NOT NULL DEFAULT 0,
    question TEXT NOT NULL UNIQUE,
    answer TEXT NOT NULL,
    history TEXT NOT NULL DEFAULT '',
    deck TEXT NOT NULL DEFAULT 'default'
);

CREATE INDEX IF NOT EXISTS idx_cards_deck ON cards(deck);
"#;

/// Rows inserted per transaction during import.
pub const INSERT_BATCH_SIZE: usize = 1000;
