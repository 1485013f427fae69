//! CSV import of new cards.
//!
//! Each record holds the question in its first field and the answer in its
//! second; any further fields are ignored. Files are imported independently
//! so a duplicate question only fails the file that contains it.

use crate::db::{DbError, SqliteRepository};
use serious_core::NewCard;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing answer at line {line}")]
    MissingAnswer { line: u64 },

    #[error("duplicate question")]
    DuplicateQuestion,

    #[error("database error: {0}")]
    Db(DbError),
}

impl From<DbError> for ImportError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateQuestion => Self::DuplicateQuestion,
            other => Self::Db(other),
        }
    }
}

/// Outcome of importing several files.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub failures: Vec<(PathBuf, ImportError)>,
}

/// Parse question/answer records.
pub fn read_cards<R: Read>(reader: R, delimiter: u8) -> Result<Vec<NewCard>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => cards.push(NewCard::new(question, answer)),
            _ => return Err(ImportError::MissingAnswer { line }),
        }
    }

    Ok(cards)
}

/// Import one CSV file into `deck`.
pub fn import_file(
    repo: &SqliteRepository,
    path: &Path,
    deck: &str,
    delimiter: u8,
) -> Result<usize, ImportError> {
    let file = File::open(path)?;
    let cards = read_cards(BufReader::new(file), delimiter)?;
    let inserted = repo.insert_cards(deck, &cards)?;
    tracing::info!(path = %path.display(), deck, inserted, "imported file");
    Ok(inserted)
}

/// Import every file, collecting per-file failures instead of stopping.
pub fn import_files<P: AsRef<Path>>(
    repo: &SqliteRepository,
    paths: &[P],
    deck: &str,
    delimiter: u8,
) -> ImportReport {
    let mut report = ImportReport::default();

    for path in paths {
        let path = path.as_ref();
        match import_file(repo, path, deck, delimiter) {
            Ok(inserted) => report.imported += inserted,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "import failed");
                report.failures.push((path.to_path_buf(), e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_question_and_answer() {
        let cards = read_cards("hola,hello\n\"uno, dos\",one two\n".as_bytes(), b',').unwrap();
        assert_eq!(
            cards,
            vec![NewCard::new("hola", "hello"), NewCard::new("uno, dos", "one two")]
        );
    }

    #[test]
    fn custom_delimiter_and_extra_fields() {
        let cards = read_cards("水\twater\tnoun\n".as_bytes(), b'\t').unwrap();
        assert_eq!(cards, vec![NewCard::new("水", "water")]);
    }

    #[test]
    fn missing_answer_reports_line() {
        let result = read_cards("a,b\nlonely\n".as_bytes(), b',');
        assert!(matches!(result, Err(ImportError::MissingAnswer { line: 2 })));
    }

    #[test]
    fn empty_input_has_no_cards() {
        assert!(read_cards("".as_bytes(), b',').unwrap().is_empty());
    }

    #[test]
    fn duplicate_db_error_maps_to_duplicate_question() {
        let error: ImportError = DbError::DuplicateQuestion.into();
        assert!(matches!(error, ImportError::DuplicateQuestion));
        assert_eq!(error.to_string(), "duplicate question");
    }

    #[test]
    fn missing_file_is_a_per_file_failure() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let report = import_files(&repo, &["does/not/exist.csv"], "default", b',');
        assert_eq!(report.imported, 0);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].1, ImportError::Io(_)));
    }
}
