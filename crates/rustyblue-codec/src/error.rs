//! Error types for the rustyblue-codec library
//!
//! Every decode and parse operation in this crate reports failure through
//! [`CodecError`]. Buffers ultimately come from an untrusted radio link, so
//! malformed input is always a recoverable result and never a panic.

use thiserror::Error;

/// Errors that can occur when decoding or parsing Bluetooth wire data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Buffer too short: need at least {expected} bytes, got {actual}")]
    InsufficientLength { expected: usize, actual: usize },

    #[error("Invalid length for fixed-size value: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Opcode mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    OpcodeMismatch { expected: u8, actual: u8 },

    #[error("Unsupported ATT opcode: 0x{0:02X}")]
    UnsupportedOpcode(u8),

    #[error("Malformed string: {0:?}")]
    MalformedString(String),

    #[error("Invalid byte length: {0}")]
    InvalidByteLength(usize),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

impl CodecError {
    /// Checks that `data` holds at least `expected` bytes
    pub(crate) fn check_min_len(data: &[u8], expected: usize) -> CodecResult<()> {
        if data.len() < expected {
            Err(CodecError::InsufficientLength {
                expected,
                actual: data.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Checks that `data` holds exactly `expected` bytes
    pub(crate) fn check_exact_len(data: &[u8], expected: usize) -> CodecResult<()> {
        if data.len() != expected {
            Err(CodecError::LengthMismatch {
                expected,
                actual: data.len(),
            })
        } else {
            Ok(())
        }
    }
}
