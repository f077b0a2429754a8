//! The k-tape machine definition and its transition table.

pub mod transition_table;

use std::collections::HashSet;

use crate::common::{Action, ValidationError};
use crate::transition::MultiTransition;
use crate::TuringMachine;
use transition_table::MultiTransitionTable;

/// A validated k-tape machine. Structurally the same 7-tuple as
/// [`MonoMachine`](../mono/struct.MonoMachine.html) plus the tape count, with
/// a table keyed on read tuples instead of single symbols.
///
/// Unlike the single-tape discipline, transitions auto-declare the states
/// they mention; the k-tape format's lines are long enough without forcing a
/// declaration pass first. `validate` applies the same closure checks in the
/// end either way.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMachine {
    tapes: usize,
    states: HashSet<String>,
    input_alphabet: HashSet<char>,
    tape_alphabet: HashSet<char>,
    initial_state: Option<String>,
    accept_states: HashSet<String>,
    blank: char,
    table: MultiTransitionTable,
}

impl MultiMachine {
    /// A machine over `tapes` tapes; `tapes` must be at least 1
    pub fn new(tapes: usize, blank: char) -> Self {
        MultiMachine {
            tapes,
            states: HashSet::new(),
            input_alphabet: HashSet::new(),
            tape_alphabet: HashSet::new(),
            initial_state: None,
            accept_states: HashSet::new(),
            blank,
            table: MultiTransitionTable::new(tapes),
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

    /// Change the blank symbol. Rejected once any transition exists.
    pub fn set_blank(&mut self, blank: char) -> Result<(), ValidationError> {
        if !self.table.is_empty() {
            return Err(ValidationError::BlankRedefinition);
        }
        self.blank = blank;
        Ok(())
    }

    /// Record a transition. Its endpoint states are declared on the fly and
    /// its read and write symbols join the tape alphabet.
    pub fn add_transition(&mut self, transition: MultiTransition) -> Result<(), ValidationError> {
        if transition.arity() != self.tapes {
            return Err(ValidationError::ArityMismatch {
                expected: self.tapes,
                found: transition.arity(),
            });
        }
        self.states.insert(transition.from_state().to_string());
        self.states.insert(transition.to_state().to_string());
        for &symbol in transition
            .read_symbols()
            .iter()
            .chain(transition.write_symbols())
        {
            self.tape_alphabet.insert(symbol);
        }
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

    pub fn table(&self) -> &MultiTransitionTable {
        &self.table
    }
}

impl TuringMachine for MultiMachine {
    fn tape_count(&self) -> usize {
        self.tapes
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
        if self.tapes == 0 {
            return Err(ValidationError::ArityMismatch {
                expected: 1,
                found: 0,
            });
        }
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

        for (from, reads, action) in self.table.iter() {
            if !self.states.contains(from) {
                return Err(ValidationError::UndeclaredState(from.to_string()));
            }
            if !self.states.contains(action.next_state()) {
                return Err(ValidationError::UndeclaredState(
                    action.next_state().to_string(),
                ));
            }
            if reads.len() != self.tapes || action.arity() != self.tapes {
                return Err(ValidationError::ArityMismatch {
                    expected: self.tapes,
                    found: reads.len().min(action.arity()),
                });
            }
            if let Some(&c) = reads
                .iter()
                .chain(action.writes())
                .find(|c| !self.tape_alphabet.contains(*c))
            {
                return Err(ValidationError::SymbolNotInTapeAlphabet(c));
            }
        }
        Ok(())
    }

    fn action(&self, state: &str, reads: &[char]) -> Option<&Action> {
        self.table.lookup(state, reads)
    }
}
