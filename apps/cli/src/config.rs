//! Runtime configuration, resolved once at startup.

use serious_core::SchedulerConfig;
use std::path::PathBuf;

const APP_DIR: &str = "serious";
const DB_FILE: &str = "serious.db";

/// Everything a run needs, passed explicitly to the components.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    /// Program that receives prompt text on stdin.
    pub tts_program: Option<String>,
    pub scheduler: SchedulerConfig,
}

/// `<config dir>/serious/serious.db`, or `./serious.db` without a config dir.
pub fn default_db_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(DB_FILE))
        .unwrap_or_else(|| PathBuf::from(DB_FILE))
}
