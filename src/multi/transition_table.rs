use std::collections::HashMap;

use crate::common::{Action, ValidationError};
use crate::transition::MultiTransition;

/// The indexed transition function of a k-tape machine, keyed on
/// (state, read tuple). The table is built for a fixed arity and rejects
/// entries of any other shape, as well as duplicate keys.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTransitionTable {
    arity: usize,
    transitions: HashMap<String, HashMap<Vec<char>, Action>>,
}

impl MultiTransitionTable {
    pub fn new(arity: usize) -> Self {
        MultiTransitionTable {
            arity,
            transitions: HashMap::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn insert(&mut self, transition: &MultiTransition) -> Result<(), ValidationError> {
        if transition.arity() != self.arity {
            return Err(ValidationError::ArityMismatch {
                expected: self.arity,
                found: transition.arity(),
            });
        }
        let per_state = self
            .transitions
            .entry(transition.from_state().to_string())
            .or_insert_with(HashMap::new);
        if per_state.contains_key(transition.read_symbols()) {
            return Err(ValidationError::DuplicateTransition(format!(
                "({}, {:?})",
                transition.from_state(),
                transition.read_symbols()
            )));
        }
        per_state.insert(transition.read_symbols().to_vec(), transition.to_action());
        Ok(())
    }

    /// The unique entry for (`state`, `reads`); `None` when `reads` has the
    /// wrong length for this table
    pub fn lookup(&self, state: &str, reads: &[char]) -> Option<&Action> {
        if reads.len() != self.arity {
            return None;
        }
        self.transitions
            .get(state)
            .and_then(|entries| entries.get(reads))
    }

    /// Every entry as (from state, read tuple, payload), in no fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[char], &Action)> {
        self.transitions.iter().flat_map(|(state, entries)| {
            entries
                .iter()
                .map(move |(reads, action)| (state.as_str(), reads.as_slice(), action))
        })
    }

    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
