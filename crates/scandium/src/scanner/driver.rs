//! The scanner driver: longest-match tokenization with rollback.

use core::hash::Hash;

use crate::automata::Dfa;
use crate::position::Position;
use crate::scanner::reader::SymbolReader;

/// A compiled tokenizer.
///
/// Built by a [`ScannerBuilder`](crate::scanner::ScannerBuilder); holds the
/// DFA, the `illegal` and `eof` sentinel values, and an informational
/// [`Position`]. The scanner is immutable once built, so any number of
/// drivers may share one scanner concurrently, each with its own reader.
#[derive(Debug, Clone)]
pub struct Scanner<S, V> {
    dfa: Dfa<S, V>,
    illegal: V,
    eof: V,
    position: Position,
}

impl<S: Clone + Eq + Hash, V: Clone> Scanner<S, V> {
    pub(crate) fn new(dfa: Dfa<S, V>, illegal: V, eof: V) -> Self {
        Self {
            dfa,
            illegal,
            eof,
            position: Position::new(),
        }
    }

    /// Read from `reader` and return the value of the next matched
    /// pattern.
    ///
    /// The scanner keeps consuming while the DFA has a transition and
    /// commits to the longest prefix that reached an accepting state,
    /// pushing every over-read symbol back. When no accepting state was
    /// ever reached, exactly one symbol is kept and the `illegal` sentinel
    /// is returned, so repeated calls always make progress through garbage.
    /// When the input is already exhausted the `eof` sentinel is returned.
    ///
    /// Read errors of any kind end the current attempt as if the input had
    /// ended; unread errors are ignored.
    pub fn next_token(&self, reader: &mut dyn SymbolReader<S>) -> V {
        let mut current = self.dfa.start();
        let mut consumed: usize = 0;
        let mut last_accept: Option<(usize, V)> = None;

        loop {
            let Ok(symbol) = reader.read_symbol() else {
                break;
            };
            consumed += 1;

            let Some(next) = self.dfa.state(current).outgoing_for(&symbol) else {
                break;
            };
            current = next;

            let state = self.dfa.state(current);
            if let Some(value) = state.accept_value() {
                last_accept = Some((consumed, value.clone()));
            }
        }

        if consumed == 0 {
            return self.eof.clone();
        }

        match last_accept {
            Some((matched, value)) => {
                for _ in matched..consumed {
                    let _ = reader.unread_symbol();
                }
                value
            }
            None => {
                for _ in 1..consumed {
                    let _ = reader.unread_symbol();
                }
                self.illegal.clone()
            }
        }
    }

    /// The value returned for an unmatchable symbol.
    #[must_use]
    pub fn illegal(&self) -> &V {
        &self.illegal
    }

    /// The value returned once the input is exhausted.
    #[must_use]
    pub fn eof(&self) -> &V {
        &self.eof
    }

    /// The compiled automaton driving this scanner.
    #[must_use]
    pub fn dfa(&self) -> &Dfa<S, V> {
        &self.dfa
    }

    /// The scanner's position tracker, fresh at line 1, column 1.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Mutable access to the position tracker, for callers that advance it
    /// as they interpret committed symbols.
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}
