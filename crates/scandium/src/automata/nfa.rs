//! Non-deterministic finite automaton builder.
//!
//! The NFA accumulates states, symbol-labelled transitions, epsilon
//! transitions, and acceptance metadata. Building never fails; every
//! operation that creates a state returns its [`StateId`].
//!
//! Accept indices come from a single monotonic counter on the automaton,
//! so across all patterns the indices reflect insertion order, and that order
//! is the pattern-priority order the DFA later preserves.

use core::hash::Hash;
use core::slice;

use smallvec::SmallVec;

use super::{Accept, StateId};
use crate::collections::MultiMap;

/// Labelled-transition storage for one state.
///
/// States on a linear chain have exactly one outgoing edge, and allocating
/// a map for each of them is wasted work. The single edge is kept inline;
/// the second insertion promotes the storage to a [`MultiMap`].
#[derive(Debug, Clone)]
enum Transitions<S> {
    None,
    Single(S, StateId),
    Multi(MultiMap<S, StateId>),
}

/// A node in an [`Nfa`].
#[derive(Debug, Clone)]
pub struct NfaState<S, V> {
    id: StateId,
    transitions: Transitions<S>,
    epsilon: SmallVec<[StateId; 2]>,
    accept: Option<Accept<V>>,
}

impl<S: Clone + Eq + Hash, V> NfaState<S, V> {
    fn new(id: StateId) -> Self {
        Self {
            id,
            transitions: Transitions::None,
            epsilon: SmallVec::new(),
            accept: None,
        }
    }

    /// The unique, builder-assigned identifier (the start state has id 0).
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// All symbols with at least one outgoing transition from this state.
    ///
    /// Each symbol appears exactly once no matter how many successors share
    /// it. The order is undefined, and the returned vector is the caller's
    /// to mutate.
    #[must_use]
    pub fn outgoing_symbols(&self) -> Vec<S> {
        match &self.transitions {
            Transitions::None => Vec::new(),
            Transitions::Single(symbol, _) => vec![symbol.clone()],
            Transitions::Multi(map) => map.keys().cloned().collect(),
        }
    }

    /// The states reachable by consuming `symbol`, in insertion order, or
    /// `None` when the state has no transition on that symbol.
    #[must_use]
    pub fn outgoing_for(&self, symbol: &S) -> Option<&[StateId]> {
        match &self.transitions {
            Transitions::None => None,
            Transitions::Single(stored, target) => {
                (stored == symbol).then(|| slice::from_ref(target))
            }
            Transitions::Multi(map) => map.get(symbol),
        }
    }

    /// The states reachable from this state without consuming a symbol, or
    /// `None` when there are no epsilon transitions.
    #[must_use]
    pub fn epsilon(&self) -> Option<&[StateId]> {
        if self.epsilon.is_empty() {
            None
        } else {
            Some(&self.epsilon)
        }
    }

    /// The acceptance index, or `None` for a non-accepting state. Lower
    /// index means higher priority.
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

    pub(crate) fn acceptance(&self) -> Option<&Accept<V>> {
        self.accept.as_ref()
    }

    /// Record a transition on `symbol` to `target`, promoting the inline
    /// edge to map storage on the second insertion.
    fn put(&mut self, symbol: S, target: StateId) {
        match &mut self.transitions {
            slot @ Transitions::None => *slot = Transitions::Single(symbol, target),
            slot @ Transitions::Single(..) => {
                let Transitions::Single(first_symbol, first_target) =
                    core::mem::replace(slot, Transitions::None)
                else {
                    unreachable!()
                };
                let mut map = MultiMap::new();
                map.put(first_symbol, first_target);
                map.put(symbol, target);
                *slot = Transitions::Multi(map);
            }
            Transitions::Multi(map) => map.put(symbol, target),
        }
    }
}

/// A non-deterministic finite automaton over symbols of type `S` with
/// acceptance metadata of type `V`.
#[derive(Debug, Clone)]
pub struct Nfa<S, V> {
    states: Vec<NfaState<S, V>>,
    next_accept_index: u32,
}

impl<S: Clone + Eq + Hash, V> Nfa<S, V> {
    /// Create an automaton holding only a non-accepting start state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: vec![NfaState::new(0)],
            next_accept_index: 0,
        }
    }

    /// The start state's id (always 0).
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
    pub fn state(&self, id: StateId) -> &NfaState<S, V> {
        &self.states[id as usize]
    }

    /// The number of states in the automaton.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Create a fresh non-accepting state and a transition to it from
    /// `from` on `symbol`. Returns the new state.
    pub fn add(&mut self, from: StateId, symbol: S) -> StateId {
        let state = self.new_state();
        self.states[from as usize].put(symbol, state);
        state
    }

    /// Like [`add`](Self::add), but the new state accepts with `value` and
    /// the next available accept index.
    pub fn add_accepting(&mut self, from: StateId, symbol: S, value: V) -> StateId {
        let state = self.new_state();
        self.mark_accepting(state, value);
        self.states[from as usize].put(symbol, state);
        state
    }

    /// Create a fresh non-accepting state reached from `from` by an
    /// epsilon transition. Returns the new state.
    pub fn add_epsilon(&mut self, from: StateId) -> StateId {
        let state = self.new_state();
        self.states[from as usize].epsilon.push(state);
        state
    }

    /// Like [`add_epsilon`](Self::add_epsilon), but the new state accepts
    /// with `value` and the next available accept index.
    pub fn add_accepting_epsilon(&mut self, from: StateId, value: V) -> StateId {
        let state = self.new_state();
        self.mark_accepting(state, value);
        self.states[from as usize].epsilon.push(state);
        state
    }

    /// Add a transition on `symbol` between two existing states. Used to
    /// form cycles or rejoin earlier structure; no state is created.
    pub fn connect(&mut self, from: StateId, symbol: S, to: StateId) {
        self.states[from as usize].put(symbol, to);
    }

    /// Add an epsilon transition between two existing states.
    pub fn connect_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from as usize].epsilon.push(to);
    }

    fn new_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::new(id));
        id
    }

    fn mark_accepting(&mut self, id: StateId, value: V) {
        let index = self.next_accept_index;
        self.next_accept_index += 1;
        self.states[id as usize].accept = Some(Accept { index, value });
    }
}

impl<S: Clone + Eq + Hash, V> Default for Nfa<S, V> {
    fn default() -> Self {
        Self::new()
    }
}
