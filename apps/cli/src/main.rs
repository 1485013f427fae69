use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serious_cli::config::{default_db_path, Config};
use serious_cli::console::{format_review_time, ConsolePrompter, Speaker};
use serious_cli::db::SqliteRepository;
use serious_cli::import::{import_files, ImportError};
use serious_cli::review::{run_review, ReviewReport};
use serious_core::config::{DEFAULT_HOURS_PARAM, DEFAULT_REVIEWS_PARAM};
use serious_core::{IntervalTable, SchedulerConfig, SystemClock, DEFAULT_DECK};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serious is a spaced repetition program.
///
/// Use the `add` subcommand to add new cards from csv files. Afterwards, call
/// the program without a subcommand to review due cards.
///
/// Each card is reviewed after `t = exp(min(n, r) * ln(h + 1) / r) - 1` hours,
/// where `n` is the number of consecutive successful recalls of the card,
/// `h` is `--hours-param` and `r` is `--reviews-param`. Forgetting a card
/// halves `n` using integer division.
#[derive(Parser)]
#[command(name = "serious", version)]
struct Cli {
    /// Path to the card database [default: <config dir>/serious/serious.db]
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Comma-separated list of decks to review (default: all decks)
    #[arg(long, default_value = "")]
    decks: String,

    /// Print the review intervals, in seconds, and exit
    #[arg(long)]
    show_intervals: bool,

    /// Consecutive recalls after which a card is reviewed every `--hours-param` hours
    #[arg(long, default_value_t = DEFAULT_REVIEWS_PARAM)]
    reviews_param: u32,

    /// Maximum number of hours between reviews of the same card
    #[arg(long, default_value_t = DEFAULT_HOURS_PARAM)]
    hours_param: f64,

    /// Text-to-speech program; questions and answers are piped to its stdin
    #[arg(long, env = "SERIOUS_TTS")]
    tts: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add cards from csv files (question in the first field, answer in the second)
    Add {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Deck receiving all added cards
        #[arg(long, default_value = DEFAULT_DECK)]
        deck: String,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            db_path: self.db_path.clone().unwrap_or_else(default_db_path),
            tts_program: self
                .tts
                .clone()
                .filter(|program| !program.trim().is_empty()),
            scheduler: SchedulerConfig {
                reviews_param: self.reviews_param,
                hours_param: self.hours_param,
                decks: SchedulerConfig::parse_decks(&self.decks),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let repo = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;

    if cli.show_intervals {
        let table = IntervalTable::from_config(&config.scheduler)?;
        println!("{}", serde_json::to_string(table.as_slice())?);
        return Ok(());
    }

    match cli.command {
        Some(Command::Add {
            files,
            deck,
            delimiter,
        }) => add(&repo, &files, &deck, delimiter),
        None => review(&repo, &config),
    }
}

fn add(repo: &SqliteRepository, files: &[PathBuf], deck: &str, delimiter: char) -> anyhow::Result<()> {
    let Ok(delimiter) = u8::try_from(delimiter) else {
        bail!("delimiter must be a single-byte character, got {delimiter:?}");
    };

    let report = import_files(repo, files, deck, delimiter);
    for (path, error) in &report.failures {
        match error {
            ImportError::DuplicateQuestion => {
                println!("Duplicate question in file `{}`", path.display())
            }
            other => println!("Could not import `{}`: {other}", path.display()),
        }
    }
    let total = repo.count_cards()?;
    tracing::info!(
        imported = report.imported,
        failed = report.failures.len(),
        total,
        "import finished"
    );
    Ok(())
}

fn review(repo: &SqliteRepository, config: &Config) -> anyhow::Result<()> {
    let speaker = config.tts_program.clone().map(Speaker::new);
    let mut prompter = ConsolePrompter::stdio(speaker);

    match run_review(repo, &config.scheduler, &mut prompter, SystemClock)? {
        ReviewReport::NoCards => {
            println!("No cards scheduled for review.  Use the `add` sub-command to add some.")
        }
        ReviewReport::Finished {
            next_review_time, ..
        } => {
            if let Some(next) = next_review_time {
                println!("Next review scheduled for {}.", format_review_time(next));
            }
        }
    }
    Ok(())
}
