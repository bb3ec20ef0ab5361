//! # Error Types
//!
//! Errors surfaced by symbol readers.
//!
//! The scanner itself never fails: unrecognized input becomes the `illegal`
//! sentinel and exhausted input becomes the `eof` sentinel. The only fallible
//! surface is the [`SymbolReader`](crate::scanner::SymbolReader) contract,
//! and the scanner treats every read error as end-of-input for the current
//! token attempt.
//!
//! When the `diagnostics` feature is enabled, errors integrate with
//! [`miette`] for rich reporting.

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Error returned by [`SymbolReader`](crate::scanner::SymbolReader)
/// operations.
#[derive(Debug, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ReadError {
    /// The input has no more symbols to read.
    #[error("end of input")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scandium::read::end_of_input)))]
    EndOfInput,

    /// `unread_symbol` was called with no previously read symbol to push back.
    #[error("no symbol available to unread")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scandium::read::nothing_to_unread)))]
    NothingToUnread,

    /// The underlying input source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Whether this error marks the ordinary end of the input rather than a
    /// failure of the source.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
