//! Error types.
//!
//! None of these cross the engine boundary. The registry logs them and skips
//! the offending command.

use thiserror::Error;

/// Failure reading a payload out of engine memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("read of {len} bytes at offset {offset} exceeds engine memory of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("payload of {count} items at offset {offset} overflows the address space")]
    Overflow { offset: usize, count: usize },
}

/// Failure decoding an engine import call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("unknown import `{0}`")]
    UnknownImport(String),

    #[error("`{name}` takes {expected} arguments, got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}
