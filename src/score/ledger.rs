//! Persistent score ledger.
//!
//! An append-only delimited text file: one `Nombre,Puntaje` header line,
//! then one `name,score` line per finished match. Single writer; no
//! concurrent matches are in scope.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header line written when the store is created.
const HEADER: &str = "Nombre,Puntaje";

/// Errors raised by ledger storage.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A finalized (name, score) record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

/// Append-only score store backed by a delimited text file.
#[derive(Clone, Debug)]
pub struct ScoreLedger {
    path: PathBuf,
}

impl ScoreLedger {
    /// Ledger over the given store path. The file is created lazily on the
    /// first [`record`](Self::record).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a finalized record, creating the store with its header first
    /// if absent.
    ///
    /// Name validation happens before this call (see [`validate_name`]);
    /// the ledger itself accepts what it is given.
    ///
    /// [`validate_name`]: super::name::validate_name
    pub fn record(&self, name: &str, score: i64) -> Result<(), LedgerError> {
        let is_new = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if is_new {
            writeln!(file, "{HEADER}")?;
        }
        writeln!(file, "{name},{score}")?;

        Ok(())
    }

    /// Load every record in store order.
    ///
    /// The header line is skipped; blank lines are ignored; a score field
    /// that is not all ASCII digits parses as 0 rather than failing.
    pub fn load(&self) -> Result<Vec<ScoreEntry>, LedgerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line == HEADER {
                continue;
            }

            let (name, score_field) = line.split_once(',').unwrap_or((line, ""));
            entries.push(ScoreEntry {
                name: name.trim().to_string(),
                score: parse_score(score_field.trim()),
            });
        }

        Ok(entries)
    }

    /// The top `n` records by score, descending.
    ///
    /// The sort is stable: equal scores keep their store (insertion) order.
    pub fn top_n(&self, n: usize) -> Result<Vec<ScoreEntry>, LedgerError> {
        let mut entries = self.load()?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(n);
        Ok(entries)
    }
}

/// Scores must be plain digit runs; anything else counts as 0.
fn parse_score(field: &str) -> i64 {
    if !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().unwrap_or(0)
    } else {
        0
    }
}
