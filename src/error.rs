//! Encoder and resource error implementation

use crate::tables::NameKind;

use std::io;
use thiserror::Error;

/// Fatal failures while assembling a Hall of Fame image.
///
/// Trial aborts are not errors; the interpreter reports them through
/// [`crate::interpreter::StepState`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Species or move name missing from its table.
    #[error("unknown {0} name: {1}")]
    UnknownName(NameKind, String),
    /// Character without an entry in the character table.
    #[error("no character mapping for {0:?}")]
    UnknownCharacter(char),
    /// A resolved value does not fit the width its field encodes.
    #[error("{field} value {value:#x} exceeds the encoded field width")]
    FieldOverflow {
        /// The field being encoded.
        field: &'static str,
        /// The oversized value.
        value: u64,
    },
    /// More party members than the six slots of a record.
    #[error("party of {0} exceeds the slots of a record")]
    PartyOverflow(usize),
    /// More records than the thirty slots of the ring.
    #[error("{0} records exceed the slots of the ring")]
    RecordOverflow(usize),
    /// A write would cross the end of its buffer.
    #[error("write of {len} bytes at {offset:#x} overflows a buffer of {capacity} bytes")]
    OutOfBounds {
        /// Write position.
        offset: usize,
        /// Write length.
        len: usize,
        /// Buffer capacity.
        capacity: usize,
    },
}

/// Failures while loading the static resource tables.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// I/O and OS related errors.
    #[error("unrecoverable error: {0}")]
    Io(#[from] io::Error),
    /// The resource is not well-formed JSON of the expected shape.
    #[error("malformed resource: {0}")]
    Json(#[from] serde_json::Error),
    /// A command id that does not parse as 16-bit hex.
    #[error("invalid command id: {0}")]
    InvalidCommandId(String),
    /// A character code that does not parse as 16-bit hex.
    #[error("invalid code for character {character:?}: {code}")]
    InvalidCharacterCode {
        /// The mapped character.
        character: char,
        /// The offending code entry.
        code: String,
    },
}
