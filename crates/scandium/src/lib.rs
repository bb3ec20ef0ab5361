//! # Scandium
//!
//! A generic lexical-analysis engine built from composable
//! regular-expression fragments.
//!
//! ## Overview
//!
//! Patterns are assembled from combinators ([`Pattern`]), compiled into a
//! non-deterministic finite automaton, converted to a deterministic one by
//! subset construction, and driven as a longest-match, priority-ordered
//! tokenizer over a pull-based symbol stream:
//!
//! - **Symbol-agnostic**: the engine is generic over any `S: Clone + Eq +
//!   Hash`: bytes, characters, or the tokens of a lower layer.
//! - **Value-agnostic**: each pattern carries an arbitrary verdict `V`
//!   returned on a match, such as a token-kind enum or an integer code.
//! - **Longest match, earliest pattern**: the scanner commits to the
//!   longest accepting prefix; ties between patterns go to the one added
//!   first.
//! - **Total scanning**: unrecognized input yields an `illegal` sentinel
//!   (consuming one symbol, so scanning always progresses) and exhausted
//!   input yields an `eof` sentinel. Scanning itself never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use scandium::{CharReader, Pattern, ScannerBuilder};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Tok {
//!     Equal,
//!     Arrow,
//!     Spaces,
//!     Illegal,
//!     Eof,
//! }
//!
//! let scanner = ScannerBuilder::new()
//!     .pattern(Pattern::literal(['=', '=']), Tok::Equal)
//!     .pattern(Pattern::literal(['-', '>']), Tok::Arrow)
//!     .pattern(Pattern::repeat_at_least(1, Pattern::literal([' '])), Tok::Spaces)
//!     .build(Tok::Illegal, Tok::Eof);
//!
//! let mut reader = CharReader::from_text("== -> ");
//! assert_eq!(scanner.next_token(&mut reader), Tok::Equal);
//! assert_eq!(scanner.next_token(&mut reader), Tok::Spaces);
//! assert_eq!(scanner.next_token(&mut reader), Tok::Arrow);
//! assert_eq!(scanner.next_token(&mut reader), Tok::Spaces);
//! assert_eq!(scanner.next_token(&mut reader), Tok::Eof);
//! ```
//!
//! ## Modules
//!
//! - [`pattern`] - Regular-expression fragment combinators
//! - [`automata`] - NFA builder, subset construction, DFA
//! - [`scanner`] - Scanner builder, driver, and symbol readers
//! - [`position`] - Line/column tracking
//! - [`error`] - Reader error types
//! - [`collections`] - Small supporting containers

pub mod automata;
pub mod collections;
pub mod error;
pub mod pattern;
pub mod position;
pub mod scanner;

// Re-export commonly used types
pub use automata::{Dfa, DfaState, Nfa, NfaState, StateId};
pub use error::ReadError;
pub use pattern::Pattern;
pub use position::Position;
pub use scanner::{CharReader, IterReader, Scanner, ScannerBuilder, SliceReader, SymbolReader};
