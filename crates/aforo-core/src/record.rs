//! Parsing of raw register lines (`identifier;TOKEN`).

use thiserror::Error;

use crate::event_kind::{EventKind, UnknownEventKind};
use crate::types::UserId;

/// Field separator in register lines. Only its first occurrence splits.
pub const DELIMITER: char = ';';

/// A register line that was well-formed enough to become an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub user: UserId,
    pub kind: EventKind,
}

/// Why a register line produced no event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line is empty or whitespace only.
    #[error("blank line")]
    Blank,

    /// The line has no `;` separator.
    #[error("missing ';' separator")]
    MissingDelimiter,

    /// Nothing but whitespace before the separator.
    #[error("empty user identifier")]
    EmptyIdentifier,

    /// The token after the separator is neither `ENTRADA` nor `SALIDA`.
    #[error(transparent)]
    UnknownEvent(#[from] UnknownEventKind),
}

/// Parses one register line.
///
/// Identifier and token are trimmed. Anything after a second `;` stays part of
/// the token, so `ana;ENTRADA;x` is rejected as an unknown token.
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(RecordError::Blank);
    }

    let (id, token) = line
        .split_once(DELIMITER)
        .ok_or(RecordError::MissingDelimiter)?;

    let user = UserId::new(id.trim()).map_err(|_| RecordError::EmptyIdentifier)?;
    let kind = token.trim().parse()?;

    Ok(Record { user, kind })
}
