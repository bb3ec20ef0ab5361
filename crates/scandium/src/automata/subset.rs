//! Subset construction: NFA → DFA conversion.
//!
//! The classical powerset algorithm with priority-aware acceptance:
//! 1. The epsilon-closure of the NFA start becomes the DFA start.
//! 2. For each discovered subset and each symbol it can consume, the
//!    closure of the move set becomes (or reuses) a DFA state.
//! 3. A DFA state accepts iff its subset holds an accepting NFA state,
//!    inheriting the acceptance with the lowest index.
//!
//! Subsets are canonicalized as sorted, deduplicated id vectors before
//! being used as cache keys, so hash iteration order never leaks into the
//! resulting automaton's shape.

use core::hash::Hash;
use std::collections::VecDeque;

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use tracing::debug;

use super::{Accept, Dfa, Nfa, StateId};

pub(super) fn construct<S, V>(nfa: &Nfa<S, V>) -> Dfa<S, V>
where
    S: Clone + Eq + Hash,
    V: Clone,
{
    let mut dfa = Dfa::empty();
    let mut subsets: HashMap<Vec<StateId>, StateId, RandomState> =
        HashMap::with_hasher(RandomState::new());
    let mut worklist: VecDeque<(Vec<StateId>, StateId)> = VecDeque::new();

    let start_subset = epsilon_closure(nfa, &[nfa.start()]);
    let start = dfa.add_state(resolve_accept(nfa, &start_subset));
    subsets.insert(start_subset.clone(), start);
    worklist.push_back((start_subset, start));

    while let Some((subset, dfa_id)) = worklist.pop_front() {
        for symbol in move_alphabet(nfa, &subset) {
            let mut moved: Vec<StateId> = Vec::new();
            for &nfa_id in &subset {
                if let Some(targets) = nfa.state(nfa_id).outgoing_for(&symbol) {
                    moved.extend_from_slice(targets);
                }
            }

            let target_subset = epsilon_closure(nfa, &moved);
            let target = match subsets.get(&target_subset) {
                Some(&existing) => existing,
                None => {
                    let created = dfa.add_state(resolve_accept(nfa, &target_subset));
                    subsets.insert(target_subset.clone(), created);
                    worklist.push_back((target_subset, created));
                    created
                }
            };

            dfa.set_transition(dfa_id, symbol, target);
        }
    }

    debug!(
        nfa_states = nfa.state_count(),
        dfa_states = dfa.state_count(),
        "subset construction complete"
    );

    dfa
}

/// All states reachable from `seeds` by following only epsilon
/// transitions, as a sorted, deduplicated id vector.
pub(super) fn epsilon_closure<S, V>(nfa: &Nfa<S, V>, seeds: &[StateId]) -> Vec<StateId>
where
    S: Clone + Eq + Hash,
{
    let mut closure: Vec<StateId> = seeds.to_vec();
    let mut stack: Vec<StateId> = seeds.to_vec();
    let mut visited = vec![false; nfa.state_count()];

    for &seed in seeds {
        visited[seed as usize] = true;
    }

    while let Some(id) = stack.pop() {
        if let Some(targets) = nfa.state(id).epsilon() {
            for &target in targets {
                if !visited[target as usize] {
                    visited[target as usize] = true;
                    closure.push(target);
                    stack.push(target);
                }
            }
        }
    }

    closure.sort_unstable();
    closure.dedup();
    closure
}

/// The union of labelled outgoing symbols across a subset, each symbol
/// exactly once.
fn move_alphabet<S, V>(nfa: &Nfa<S, V>, subset: &[StateId]) -> Vec<S>
where
    S: Clone + Eq + Hash,
{
    let mut seen: HashSet<S, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut alphabet: Vec<S> = Vec::new();

    for &nfa_id in subset {
        for symbol in nfa.state(nfa_id).outgoing_symbols() {
            if seen.insert(symbol.clone()) {
                alphabet.push(symbol);
            }
        }
    }

    alphabet
}

/// The acceptance for a subset: the member with the lowest accept index
/// wins. Indices are unique, so there are no ties to break.
fn resolve_accept<S, V>(nfa: &Nfa<S, V>, subset: &[StateId]) -> Option<Accept<V>>
where
    S: Clone + Eq + Hash,
    V: Clone,
{
    subset
        .iter()
        .filter_map(|&nfa_id| nfa.state(nfa_id).acceptance())
        .min_by_key(|accept| accept.index)
        .cloned()
}
