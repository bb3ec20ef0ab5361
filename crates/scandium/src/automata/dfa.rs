//! Deterministic finite automaton.
//!
//! A [`Dfa`] is produced from an [`Nfa`](super::Nfa) by subset
//! construction and is immutable afterwards. Every `(state, symbol)` pair
//! has at most one successor, which is what lets the scanner run without
//! backtracking inside the automaton; rollback happens at the reader.

use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashMap;

use super::{subset, Accept, Nfa, StateId};

/// A node in a [`Dfa`].
#[derive(Debug, Clone)]
pub struct DfaState<S, V> {
    id: StateId,
    transitions: HashMap<S, StateId, RandomState>,
    accept: Option<Accept<V>>,
}

impl<S: Clone + Eq + Hash, V> DfaState<S, V> {
    pub(super) fn new(id: StateId, accept: Option<Accept<V>>) -> Self {
        Self {
            id,
            transitions: HashMap::with_hasher(RandomState::new()),
            accept,
        }
    }

    /// The unique identifier assigned during construction (the start state
    /// has id 0).
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// All symbols with an outgoing transition. The order is undefined,
    /// and the returned vector is the caller's to mutate.
    #[must_use]
    pub fn outgoing_symbols(&self) -> Vec<S> {
        self.transitions.keys().cloned().collect()
    }

    /// The single state reachable by consuming `symbol`, or `None` when
    /// the state has no transition on that symbol.
    #[must_use]
    pub fn outgoing_for(&self, symbol: &S) -> Option<StateId> {
        self.transitions.get(symbol).copied()
    }

    /// The acceptance index inherited from the highest-priority accepting
    /// NFA state in this state's subset, or `None` when none of them
    /// accepts.
    #[must_use]
    pub fn accept_index(&self) -> Option<u32> {
        self.accept.as_ref().map(|accept| accept.index)
    }

    /// Whether this state is accepting.
    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.accept.is_some()
    }

    /// The accepting value, or `None` for a non-accepting state.
    #[must_use]
    pub fn accept_value(&self) -> Option<&V> {
        self.accept.as_ref().map(|accept| &accept.value)
    }

    pub(super) fn set_transition(&mut self, symbol: S, target: StateId) {
        self.transitions.insert(symbol, target);
    }
}

/// A deterministic finite automaton over symbols of type `S` with
/// acceptance metadata of type `V`.
#[derive(Debug, Clone)]
pub struct Dfa<S, V> {
    states: Vec<DfaState<S, V>>,
}

impl<S: Clone + Eq + Hash, V: Clone> Dfa<S, V> {
    /// Convert `nfa` into an equivalent DFA using subset construction.
    #[must_use]
    pub fn from_nfa(nfa: &Nfa<S, V>) -> Self {
        subset::construct(nfa)
    }

    /// The start state's id (always 0). Its subset is the epsilon-closure
    /// of the NFA's start state, so an NFA that accepts the empty string
    /// yields an accepting DFA start.
    #[must_use]
    pub fn start(&self) -> StateId {
        0
    }

    /// Borrow a state by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this automaton.
    #[must_use]
    pub fn state(&self, id: StateId) -> &DfaState<S, V> {
        &self.states[id as usize]
    }

    /// The number of states in the automaton.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub(super) fn empty() -> Self {
        Self { states: Vec::new() }
    }

    pub(super) fn add_state(&mut self, accept: Option<Accept<V>>) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(DfaState::new(id, accept));
        id
    }

    pub(super) fn set_transition(&mut self, from: StateId, symbol: S, to: StateId) {
        self.states[from as usize].set_transition(symbol, to);
    }
}
