use std::collections::HashMap;

use crate::common::{Action, ValidationError};
use crate::transition::Transition;

/// The indexed transition function of a single-tape machine, keyed on
/// (state, read symbol). Insertion rejects a second entry for the same key,
/// so the table is a partial function by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonoTransitionTable {
    transitions: HashMap<String, HashMap<char, Action>>,
}

impl MonoTransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transition: &Transition) -> Result<(), ValidationError> {
        let per_state = self
            .transitions
            .entry(transition.from_state().to_string())
            .or_insert_with(HashMap::new);
        if per_state.contains_key(&transition.read_symbol()) {
            return Err(ValidationError::DuplicateTransition(format!(
                "({}, {:?})",
                transition.from_state(),
                transition.read_symbol()
            )));
        }
        per_state.insert(transition.read_symbol(), transition.to_action());
        Ok(())
    }

    pub fn lookup(&self, state: &str, read: char) -> Option<&Action> {
        self.transitions
            .get(state)
            .and_then(|entries| entries.get(&read))
    }

    /// Every entry as (from state, read symbol, payload), in no fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&str, char, &Action)> {
        self.transitions.iter().flat_map(|(state, entries)| {
            entries
                .iter()
                .map(move |(read, action)| (state.as_str(), *read, action))
        })
    }

    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
