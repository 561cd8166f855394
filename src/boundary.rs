//! Argument guard shared by every host binding.
//!
//! The core converters only ever see `&str`. Deciding whether a host value
//! *is* a string, and reporting when it is not, happens here.

use tracing::debug;

/// Diagnostic reported for a non-string argument. Hosts match on it
/// byte-for-byte, so it is the same for both operations.
pub const ARGUMENT_TYPE_MESSAGE: &str = "[MeCab] Error! Argument of 'parse' must be String.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Kana2Romaji,
    Kana2Voca,
}

impl Operation {
    /// Name the operation is exported under.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Kana2Romaji => "kana2romaji",
            Operation::Kana2Voca => "kana2voca",
        }
    }

    pub fn run(self, text: &str) -> String {
        match self {
            Operation::Kana2Romaji => kana_core::kana2romaji(text),
            Operation::Kana2Voca => kana_core::kana2voca(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("[MeCab] Error! Argument of 'parse' must be String.")]
pub struct ArgumentTypeError {
    pub operation: Operation,
}

/// Accept `arg` only if it is present and valid UTF-8.
pub fn check_argument(
    operation: Operation,
    arg: Option<&[u8]>,
) -> Result<&str, ArgumentTypeError> {
    arg.and_then(|bytes| std::str::from_utf8(bytes).ok())
        .ok_or(ArgumentTypeError { operation })
}

/// Guard the argument, then run the operation.
pub fn invoke(operation: Operation, arg: Option<&[u8]>) -> Result<String, ArgumentTypeError> {
    let text = check_argument(operation, arg).inspect_err(|_| {
        debug!(operation = operation.name(), "rejected non-string argument");
    })?;
    Ok(operation.run(text))
}
