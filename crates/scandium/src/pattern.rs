//! # Pattern Combinators
//!
//! Regular-expression building blocks that compile into NFA sub-graphs.
//!
//! ## Overview
//!
//! A [`Pattern`] describes the shape of one token. Compiling a pattern
//! appends states to an [`Nfa`] between a caller-supplied entry state and
//! a returned exit state. Acceptance is never attached here: the scanner
//! builder links every pattern's exit to a fresh accepting state, which is
//! how insertion order becomes match priority.
//!
//! ## Usage
//!
//! ```rust
//! use scandium::Pattern;
//!
//! // `==`
//! let equal = Pattern::literal(['=', '=']);
//!
//! // one or more spaces
//! let spaces = Pattern::repeat_at_least(1, Pattern::literal([' ']));
//!
//! // `public` in any of three spellings
//! let keyword = Pattern::any_of([
//!     Pattern::literal("public".chars()),
//!     Pattern::literal("Public".chars()),
//!     Pattern::literal("PUBLIC".chars()),
//! ]);
//! # let _ = (equal, spaces, keyword);
//! ```
//!
//! ## Preconditions
//!
//! Malformed patterns are caller bugs and panic at construction or
//! compilation time, never during scanning: a [`literal`](Pattern::literal)
//! needs at least one symbol, an [`any_of`](Pattern::any_of) at least two
//! branches, and a [`repeat_between`](Pattern::repeat_between) a `min` no
//! greater than its `max`.

use core::hash::Hash;

use crate::automata::{Nfa, StateId};

/// A regular-expression fragment over symbols of type `S`.
///
/// Variants are public so patterns can be assembled directly; the
/// constructor functions additionally enforce the preconditions above and
/// are the usual way to build them.
#[derive(Debug, Clone)]
pub enum Pattern<S> {
    /// Match a fixed run of symbols, one after another.
    Literal(Vec<S>),
    /// Match every sub-pattern in order.
    Sequence(Vec<Pattern<S>>),
    /// Match exactly one of the branches. At least two are required.
    AnyOf(Vec<Pattern<S>>),
    /// Match the sub-pattern `min` or more times.
    RepeatAtLeast {
        /// The number of mandatory repetitions.
        min: usize,
        /// The repeated fragment.
        pattern: Box<Pattern<S>>,
    },
    /// Match the sub-pattern between `min` and `max` times, inclusive.
    /// `min == max` matches an exact count; `min == max == 0` matches the
    /// empty string.
    RepeatBetween {
        /// The number of mandatory repetitions.
        min: usize,
        /// The largest permitted number of repetitions.
        max: usize,
        /// The repeated fragment.
        pattern: Box<Pattern<S>>,
    },
}

impl<S: Clone + Eq + Hash> Pattern<S> {
    /// A fixed run of symbols.
    ///
    /// # Panics
    ///
    /// Panics when `symbols` is empty.
    #[must_use]
    pub fn literal(symbols: impl IntoIterator<Item = S>) -> Self {
        let symbols: Vec<S> = symbols.into_iter().collect();
        assert!(!symbols.is_empty(), "a literal needs at least one symbol");
        Self::Literal(symbols)
    }

    /// The concatenation of `parts`, matched in order. An empty sequence
    /// matches the empty string.
    #[must_use]
    pub fn sequence(parts: impl IntoIterator<Item = Pattern<S>>) -> Self {
        Self::Sequence(parts.into_iter().collect())
    }

    /// Exactly one of `branches`.
    ///
    /// # Panics
    ///
    /// Panics when fewer than two branches are given.
    #[must_use]
    pub fn any_of(branches: impl IntoIterator<Item = Pattern<S>>) -> Self {
        let branches: Vec<Pattern<S>> = branches.into_iter().collect();
        assert!(
            branches.len() >= 2,
            "an alternation needs at least two branches"
        );
        Self::AnyOf(branches)
    }

    /// `pattern` repeated `min` or more times.
    #[must_use]
    pub fn repeat_at_least(min: usize, pattern: Pattern<S>) -> Self {
        Self::RepeatAtLeast {
            min,
            pattern: Box::new(pattern),
        }
    }

    /// `pattern` repeated between `min` and `max` times, inclusive.
    ///
    /// # Panics
    ///
    /// Panics when `min > max`.
    #[must_use]
    pub fn repeat_between(min: usize, max: usize, pattern: Pattern<S>) -> Self {
        assert!(
            min <= max,
            "a bounded repetition needs min <= max (got {min} > {max})"
        );
        Self::RepeatBetween {
            min,
            max,
            pattern: Box::new(pattern),
        }
    }

    /// Append this pattern's structure to `nfa` starting at `entry` and
    /// return the exit state. No acceptance is attached.
    ///
    /// # Panics
    ///
    /// Panics when a directly-constructed variant violates the
    /// preconditions documented on the constructors.
    pub fn compile<V>(&self, nfa: &mut Nfa<S, V>, entry: StateId) -> StateId {
        match self {
            Self::Literal(symbols) => {
                assert!(!symbols.is_empty(), "a literal needs at least one symbol");
                let mut current = entry;
                for symbol in symbols {
                    current = nfa.add(current, symbol.clone());
                }
                current
            }

            Self::Sequence(parts) => {
                let mut current = entry;
                for part in parts {
                    current = part.compile(nfa, current);
                }
                current
            }

            Self::AnyOf(branches) => {
                assert!(
                    branches.len() >= 2,
                    "an alternation needs at least two branches"
                );
                // Every branch gets its own epsilon head off the entry and
                // rejoins a single shared state, so branches with shared
                // prefixes or acceptance cannot interfere.
                let mut join: Option<StateId> = None;
                for branch in branches {
                    let head = nfa.add_epsilon(entry);
                    let exit = branch.compile(nfa, head);
                    match join {
                        None => join = Some(nfa.add_epsilon(exit)),
                        Some(join) => nfa.connect_epsilon(exit, join),
                    }
                }
                join.expect("alternation has at least two branches")
            }

            Self::RepeatAtLeast { min, pattern } => {
                if *min == 0 {
                    // One optional instance that may loop, plus an empty
                    // bypass straight to the exit.
                    let head = nfa.add_epsilon(entry);
                    let body_exit = pattern.compile(nfa, head);
                    nfa.connect_epsilon(body_exit, head);
                    let exit = nfa.add_epsilon(entry);
                    nfa.connect_epsilon(body_exit, exit);
                    return exit;
                }

                // Mandatory instances each start at a fresh epsilon head;
                // the final instance's head is the loop-back target.
                let mut tail_head = entry;
                let mut current = entry;
                for _ in 0..*min {
                    tail_head = nfa.add_epsilon(current);
                    current = pattern.compile(nfa, tail_head);
                }
                nfa.connect_epsilon(current, tail_head);
                nfa.add_epsilon(current)
            }

            Self::RepeatBetween { min, max, pattern } => {
                assert!(
                    min <= max,
                    "a bounded repetition needs min <= max (got {min} > {max})"
                );
                let mut current = entry;
                for _ in 0..*min {
                    current = pattern.compile(nfa, current);
                }
                if min == max {
                    return current;
                }

                // Optional instances may each bail out to the shared exit.
                let exit = nfa.add_epsilon(current);
                for _ in 0..(max - min) {
                    current = pattern.compile(nfa, current);
                    nfa.connect_epsilon(current, exit);
                }
                exit
            }
        }
    }
}
