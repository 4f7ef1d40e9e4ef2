/// Score tracking and best-score persistence.
///
/// The best score lives in a one-line dot-file under `$HOME`.  A missing
/// or corrupt file reads as zero; writes are best-effort so a read-only
/// home directory never interrupts play.

use std::fs;
use std::path::{Path, PathBuf};

pub struct HighScoreManager {
    path: PathBuf,
    /// Highest score seen in the current session (monotonic).
    current: u32,
    /// Highest score ever seen, mirrored on disk.
    best: u32,
}

impl HighScoreManager {
    /// Load the persisted best score, treating a missing or unparsable
    /// file as zero.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        HighScoreManager { path, current: 0, best }
    }

    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".starfall_score")
    }

    /// Begin a fresh session: the session score resets, the best survives.
    pub fn start_session(&mut self) {
        self.current = 0;
    }

    /// Record a score observation.  The session score only ever rises;
    /// when it beats the stored best, the new best is persisted.
    pub fn record(&mut self, score: u32) {
        if score > self.current {
            self.current = score;
        }
        if self.current > self.best {
            self.best = self.current;
            let _ = fs::write(&self.path, self.best.to_string());
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}
