//! Small supporting containers for the automata.

pub mod multi_map;

pub use multi_map::MultiMap;
