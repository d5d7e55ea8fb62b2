//! Player name validation.
//!
//! Enforced by the host before a score is recorded; the ledger itself does
//! not re-validate.

use thiserror::Error;

/// Why a player-entered name was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidNameError {
    /// Empty, or nothing but whitespace.
    #[error("name is empty")]
    Empty,

    /// Contains a character that is neither a letter nor a space.
    #[error("name contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Validate a player name: trimmed, non-empty, letters and spaces only.
///
/// Rejection is recoverable - the host re-prompts; no state is touched.
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidNameError::Empty);
    }

    for c in name.chars() {
        if !c.is_alphabetic() && c != ' ' {
            return Err(InvalidNameError::InvalidCharacter(c));
        }
    }

    Ok(())
}
