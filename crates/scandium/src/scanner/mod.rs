//! # Scanner
//!
//! Longest-match, priority-ordered tokenization over a pull-based symbol
//! stream.
//!
//! ## Overview
//!
//! A [`ScannerBuilder`] collects `(pattern, value)` pairs; [`build`]
//! compiles them into one NFA, converts it to a DFA, and wraps the result
//! in a [`Scanner`]. [`Scanner::next_token`] then drives the DFA against a
//! [`SymbolReader`], committing to the longest accepting prefix and
//! pushing over-read symbols back.
//!
//! Two sentinel values configure the scanner at build time: `illegal`,
//! returned for input no pattern matches (consuming exactly one symbol so
//! scanning always progresses), and `eof`, returned once the input is
//! exhausted.
//!
//! [`build`]: ScannerBuilder::build
//!
//! ## Usage
//!
//! ```rust
//! use scandium::{CharReader, Pattern, ScannerBuilder};
//!
//! let scanner = ScannerBuilder::new()
//!     .pattern(Pattern::literal("let".chars()), "KW_LET")
//!     .pattern(Pattern::literal(['=']), "ASSIGN")
//!     .pattern(Pattern::repeat_at_least(1, Pattern::literal([' '])), "SPACE")
//!     .build("ILLEGAL", "EOF");
//!
//! let mut reader = CharReader::from_text("let =");
//! assert_eq!(scanner.next_token(&mut reader), "KW_LET");
//! assert_eq!(scanner.next_token(&mut reader), "SPACE");
//! assert_eq!(scanner.next_token(&mut reader), "ASSIGN");
//! assert_eq!(scanner.next_token(&mut reader), "EOF");
//! ```

pub mod builder;
pub mod driver;
pub mod reader;

pub use builder::ScannerBuilder;
pub use driver::Scanner;
pub use reader::{CharReader, IterReader, SliceReader, SymbolReader};
