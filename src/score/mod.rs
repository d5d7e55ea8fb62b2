//! Score persistence and the ranked top-N view.

pub mod ledger;
pub mod name;

pub use ledger::{LedgerError, ScoreEntry, ScoreLedger};
pub use name::{validate_name, InvalidNameError};
