//! Scanner construction from (pattern, value) pairs.

use core::hash::Hash;

use smallvec::SmallVec;
use tracing::debug;

use crate::automata::{Dfa, Nfa};
use crate::pattern::Pattern;
use crate::scanner::driver::Scanner;

/// One registered pattern and the value it yields on a match.
#[derive(Debug, Clone)]
struct Rule<S, V> {
    pattern: Pattern<S>,
    value: V,
}

/// Builds a [`Scanner`] from patterns added in priority order.
///
/// Insertion order matters: when two patterns match the same input, the
/// one added first wins. Longest match still applies first; priority only
/// breaks ties between equal-length matches.
#[derive(Debug, Clone)]
pub struct ScannerBuilder<S, V> {
    rules: SmallVec<[Rule<S, V>; 8]>,
}

impl<S: Clone + Eq + Hash, V: Clone> ScannerBuilder<S, V> {
    /// Create a builder with no patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: SmallVec::new(),
        }
    }

    /// Register `pattern`, returning `value` when it matches.
    #[must_use]
    pub fn pattern(mut self, pattern: Pattern<S>, value: V) -> Self {
        self.rules.push(Rule { pattern, value });
        self
    }

    /// Compile every registered pattern into one automaton and wrap it in
    /// a scanner.
    ///
    /// `illegal` is returned for input no pattern matches; `eof` once the
    /// input is exhausted. Each pattern is compiled from the shared start
    /// state and closed with a fresh accepting epsilon transition, so
    /// accept priorities mirror the order the patterns were added in.
    #[must_use]
    pub fn build(self, illegal: V, eof: V) -> Scanner<S, V> {
        let rule_count = self.rules.len();
        let mut nfa: Nfa<S, V> = Nfa::new();
        let start = nfa.start();

        for rule in self.rules {
            let exit = rule.pattern.compile(&mut nfa, start);
            nfa.add_accepting_epsilon(exit, rule.value);
        }

        let dfa = Dfa::from_nfa(&nfa);
        debug!(
            patterns = rule_count,
            nfa_states = nfa.state_count(),
            dfa_states = dfa.state_count(),
            "scanner compiled"
        );

        Scanner::new(dfa, illegal, eof)
    }
}

impl<S: Clone + Eq + Hash, V: Clone> Default for ScannerBuilder<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_no_patterns_yields_a_bare_scanner() {
        let scanner: Scanner<char, &str> = ScannerBuilder::new().build("ILLEGAL", "EOF");
        assert_eq!(scanner.dfa().state_count(), 1);
        assert!(!scanner.dfa().state(scanner.dfa().start()).is_accepting());
    }

    #[test]
    fn test_build_assigns_priorities_in_insertion_order() {
        let scanner = ScannerBuilder::new()
            .pattern(Pattern::literal(['a']), "first")
            .pattern(Pattern::literal(['b']), "second")
            .build("ILLEGAL", "EOF");

        let dfa = scanner.dfa();
        let start = dfa.state(dfa.start());
        let after_a = dfa.state(start.outgoing_for(&'a').unwrap());
        let after_b = dfa.state(start.outgoing_for(&'b').unwrap());

        assert_eq!(after_a.accept_index(), Some(0));
        assert_eq!(after_a.accept_value(), Some(&"first"));
        assert_eq!(after_b.accept_index(), Some(1));
        assert_eq!(after_b.accept_value(), Some(&"second"));
    }

    #[test]
    fn test_sentinels_are_stored() {
        let scanner: Scanner<char, i32> = ScannerBuilder::new().build(-1, 0);
        assert_eq!(scanner.illegal(), &-1);
        assert_eq!(scanner.eof(), &0);
    }

    #[test]
    fn test_scanner_position_starts_at_one_one() {
        let scanner: Scanner<char, &str> = ScannerBuilder::new().build("ILLEGAL", "EOF");
        assert_eq!(scanner.position().to_string(), "1:1");
    }
}
