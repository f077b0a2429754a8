//! The single-tape machine definition and its transition table.

pub mod transition_table;

use std::collections::HashSet;

use crate::common::{Action, ValidationError};
use crate::transition::Transition;
use crate::TuringMachine;
use transition_table::MonoTransitionTable;

/// A validated single-tape machine: states, input and tape alphabets,
/// initial and accept states, blank symbol and the indexed transition
/// function. Mutating methods enforce what they can eagerly;
/// [`validate`](#method.validate) performs the full closure check.
///
/// The single-tape discipline is strict about states: a transition may only
/// reference states that have already been declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonoMachine {
    states: HashSet<String>,
    input_alphabet: HashSet<char>,
    tape_alphabet: HashSet<char>,
    initial_state: Option<String>,
    accept_states: HashSet<String>,
    blank: char,
    table: MonoTransitionTable,
}

impl MonoMachine {
    pub fn new(blank: char) -> Self {
        MonoMachine {
            blank,
            ..Default::default()
        }
    }

    pub fn add_state(&mut self, state: &str) {
        self.states.insert(state.to_string());
    }

    /// Declare an input symbol. The blank can never be one.
    pub fn add_input_symbol(&mut self, symbol: char) -> Result<(), ValidationError> {
        if symbol == self.blank {
            return Err(ValidationError::BlankInInputAlphabet(symbol));
        }
        self.input_alphabet.insert(symbol);
        Ok(())
    }

    pub fn add_tape_symbol(&mut self, symbol: char) {
        self.tape_alphabet.insert(symbol);
    }

    /// Set the initial state, declaring it if it was not yet
    pub fn set_initial_state(&mut self, state: &str) {
        self.states.insert(state.to_string());
        self.initial_state = Some(state.to_string());
    }

    /// Add an accept state, declaring it if it was not yet
    pub fn add_accept_state(&mut self, state: &str) {
        self.states.insert(state.to_string());
        self.accept_states.insert(state.to_string());
    }

    /// Change the blank symbol. Rejected once any transition exists, since
    /// recorded transitions were normalized against the old blank.
    pub fn set_blank(&mut self, blank: char) -> Result<(), ValidationError> {
        if !self.table.is_empty() {
            return Err(ValidationError::BlankRedefinition);
        }
        self.blank = blank;
        Ok(())
    }

    /// Record a transition. Both endpoint states must be declared already;
    /// the read and write symbols join the tape alphabet.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), ValidationError> {
        if !self.states.contains(transition.from_state()) {
            return Err(ValidationError::UndeclaredState(
                transition.from_state().to_string(),
            ));
        }
        if !self.states.contains(transition.to_state()) {
            return Err(ValidationError::UndeclaredState(
                transition.to_state().to_string(),
            ));
        }
        self.tape_alphabet.insert(transition.read_symbol());
        self.tape_alphabet.insert(transition.write_symbol());
        self.table.insert(&transition)
    }

    pub fn states(&self) -> &HashSet<String> {
        &self.states
    }

    pub fn input_alphabet(&self) -> &HashSet<char> {
        &self.input_alphabet
    }

    pub fn tape_alphabet(&self) -> &HashSet<char> {
        &self.tape_alphabet
    }

    pub fn accept_states(&self) -> &HashSet<String> {
        &self.accept_states
    }

    pub fn table(&self) -> &MonoTransitionTable {
        &self.table
    }
}

impl TuringMachine for MonoMachine {
    fn tape_count(&self) -> usize {
        1
    }

    fn blank(&self) -> char {
        self.blank
    }

    fn initial_state(&self) -> &str {
        self.initial_state.as_ref().map(String::as_str).unwrap_or("")
    }

    fn is_accepting(&self, state: &str) -> bool {
        self.accept_states.contains(state)
    }

    fn is_input_symbol(&self, symbol: char) -> bool {
        self.input_alphabet.contains(&symbol)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.tape_alphabet.contains(&self.blank) {
            return Err(ValidationError::BlankNotInTapeAlphabet(self.blank));
        }
        if self.input_alphabet.contains(&self.blank) {
            return Err(ValidationError::BlankInInputAlphabet(self.blank));
        }
        if let Some(&c) = self
            .input_alphabet
            .iter()
            .find(|c| !self.tape_alphabet.contains(*c))
        {
            return Err(ValidationError::InputSymbolNotInTapeAlphabet(c));
        }

        let initial = self
            .initial_state
            .as_ref()
            .ok_or(ValidationError::InitialStateNotSet)?;
        if !self.states.contains(initial) {
            return Err(ValidationError::UndeclaredState(initial.clone()));
        }
        if let Some(state) = self
            .accept_states
            .iter()
            .find(|s| !self.states.contains(*s))
        {
            return Err(ValidationError::UndeclaredState(state.clone()));
        }

        for (from, read, action) in self.table.iter() {
            if !self.states.contains(from) {
                return Err(ValidationError::UndeclaredState(from.to_string()));
            }
            if !self.states.contains(action.next_state()) {
                return Err(ValidationError::UndeclaredState(
                    action.next_state().to_string(),
                ));
            }
            if !self.tape_alphabet.contains(&read) {
                return Err(ValidationError::SymbolNotInTapeAlphabet(read));
            }
            if let Some(&c) = action
                .writes()
                .iter()
                .find(|c| !self.tape_alphabet.contains(*c))
            {
                return Err(ValidationError::SymbolNotInTapeAlphabet(c));
            }
            if action.arity() != 1 {
                return Err(ValidationError::ArityMismatch {
                    expected: 1,
                    found: action.arity(),
                });
            }
        }
        Ok(())
    }

    fn action(&self, state: &str, reads: &[char]) -> Option<&Action> {
        if reads.len() != 1 {
            return None;
        }
        self.table.lookup(state, reads[0])
    }
}
