//! Property-based tests for the scanner pipeline.
//!
//! These generate random inputs over a small alphabet and verify the
//! scanner-wide guarantees: termination with progress, idempotence across
//! fresh readers, read/unread accounting, and DFA determinism.

use proptest::prelude::*;
use scandium::{
    CharReader, Dfa, Nfa, Pattern, ReadError, Scanner, ScannerBuilder, SymbolReader,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    Word,
    Spaces,
    Dots,
    Illegal,
    Eof,
}

/// A scanner whose patterns exercise chains, alternation, and repetition.
fn build_scanner() -> Scanner<char, Tok> {
    ScannerBuilder::new()
        .pattern(
            Pattern::any_of([
                Pattern::literal("ab".chars()),
                Pattern::literal("ba".chars()),
                Pattern::literal(['a']),
            ]),
            Tok::Word,
        )
        .pattern(
            Pattern::repeat_at_least(1, Pattern::literal([' '])),
            Tok::Spaces,
        )
        .pattern(
            Pattern::repeat_between(1, 3, Pattern::literal(['.'])),
            Tok::Dots,
        )
        .build(Tok::Illegal, Tok::Eof)
}

/// Scan `input` to completion, panicking if the scanner fails to reach
/// EOF within the hard progress bound of one token per symbol.
fn scan_all(scanner: &Scanner<char, Tok>, input: &str) -> Vec<Tok> {
    let mut reader = CharReader::from_text(input);
    let mut tokens = Vec::new();

    for _ in 0..=input.chars().count() {
        let token = scanner.next_token(&mut reader);
        if token == Tok::Eof {
            return tokens;
        }
        tokens.push(token);
    }

    panic!("scanner failed to reach EOF for input {input:?}");
}

/// A reader wrapper that tracks net consumption (reads minus unreads).
struct CountingReader<'a> {
    inner: CharReader<'a>,
    net_consumed: isize,
}

impl<'a> CountingReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: CharReader::from_text(input),
            net_consumed: 0,
        }
    }
}

impl SymbolReader<char> for CountingReader<'_> {
    fn read_symbol(&mut self) -> Result<char, ReadError> {
        let symbol = self.inner.read_symbol()?;
        self.net_consumed += 1;
        Ok(symbol)
    }

    fn unread_symbol(&mut self) -> Result<(), ReadError> {
        self.inner.unread_symbol()?;
        self.net_consumed -= 1;
        Ok(())
    }
}

fn input_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('b'),
            Just(' '),
            Just('.'),
            Just('?'), // never matches any pattern
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_scanning_terminates_with_progress(input in input_strategy()) {
        // scan_all panics internally if more than len + 1 calls are needed,
        // which is exactly the progress guarantee.
        let scanner = build_scanner();
        let tokens = scan_all(&scanner, &input);
        prop_assert!(tokens.len() <= input.chars().count());
    }

    #[test]
    fn prop_scanning_is_idempotent(input in input_strategy()) {
        let scanner = build_scanner();
        let first = scan_all(&scanner, &input);
        let second = scan_all(&scanner, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_two_scanners_from_the_same_patterns_agree(input in input_strategy()) {
        let first = scan_all(&build_scanner(), &input);
        let second = scan_all(&build_scanner(), &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_committed_symbols_account_for_the_whole_input(input in input_strategy()) {
        // Across a full scan every read symbol is either committed to a
        // token or pushed back and re-read later; once EOF is reached the
        // net consumption must equal the input length exactly.
        let scanner = build_scanner();
        let mut reader = CountingReader::new(&input);

        let limit = input.chars().count() + 1;
        for _ in 0..limit {
            if scanner.next_token(&mut reader) == Tok::Eof {
                break;
            }
        }

        prop_assert_eq!(reader.net_consumed, input.chars().count() as isize);
    }

    #[test]
    fn prop_every_non_eof_token_consumes_at_least_one_symbol(input in input_strategy()) {
        let scanner = build_scanner();
        let mut reader = CountingReader::new(&input);

        loop {
            let before = reader.net_consumed;
            let token = scanner.next_token(&mut reader);
            if token == Tok::Eof {
                prop_assert_eq!(reader.net_consumed, before);
                break;
            }
            prop_assert!(reader.net_consumed > before);
        }
    }

    #[test]
    fn prop_dfa_transitions_are_deterministic(input in input_strategy()) {
        let scanner = build_scanner();
        let dfa = scanner.dfa();

        // Walk the DFA along the input; repeated lookups of the same
        // (state, symbol) pair must agree, and every target must be a
        // state the automaton owns.
        let mut state = dfa.start();
        for symbol in input.chars() {
            let first = dfa.state(state).outgoing_for(&symbol);
            let second = dfa.state(state).outgoing_for(&symbol);
            prop_assert_eq!(first, second);

            match first {
                Some(next) => {
                    prop_assert!((next as usize) < dfa.state_count());
                    state = next;
                }
                None => state = dfa.start(),
            }
        }
    }

    #[test]
    fn prop_subset_acceptance_is_the_minimum_index(
        depth in 1usize..6,
        branches in 2usize..5,
    ) {
        // Build NFAs with several same-shaped accepting branches; the DFA
        // state reached by the shared string must carry the acceptance of
        // the branch added first.
        let mut nfa: Nfa<char, usize> = Nfa::new();
        for branch in 0..branches {
            let mut current = nfa.start();
            for _ in 0..depth - 1 {
                current = nfa.add(current, 'x');
            }
            nfa.add_accepting(current, 'x', branch);
        }
        let dfa = Dfa::from_nfa(&nfa);

        let mut state = dfa.start();
        for _ in 0..depth {
            state = dfa.state(state).outgoing_for(&'x').expect("chain transition");
        }
        prop_assert!(dfa.state(state).is_accepting());
        prop_assert_eq!(dfa.state(state).accept_index(), Some(0));
        prop_assert_eq!(dfa.state(state).accept_value(), Some(&0));
    }
}
