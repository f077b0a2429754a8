pub mod common;
pub mod configuration;
pub mod engine;
pub mod machine_parser;
pub mod mono;
pub mod multi;
pub mod tape;
pub mod transition;

use crate::common::{Action, ValidationError};

/// A trait encapsulating what the execution engine needs from a validated
/// machine definition. Both [`MonoMachine`](mono/struct.MonoMachine.html) and
/// [`MultiMachine`](multi/struct.MultiMachine.html) implement it, so a single
/// generic engine drives either kind.
pub trait TuringMachine {
    /// How many tapes a configuration of this machine carries; 1 for mono
    fn tape_count(&self) -> usize;

    /// The symbol filling every never-written tape cell
    fn blank(&self) -> char;

    /// The state every run starts in. Empty until one has been set;
    /// `validate` rejects such a definition.
    fn initial_state(&self) -> &str;

    /// Is `state` one of the accept states?
    fn is_accepting(&self, state: &str) -> bool;

    /// Does `symbol` belong to the input alphabet?
    fn is_input_symbol(&self, symbol: char) -> bool;

    /// Full structural check of the definition (alphabet closure, state
    /// closure, determinism, tuple shape)
    fn validate(&self) -> Result<(), ValidationError>;

    /// Boolean form of [`validate`](#tymethod.validate), the check loaders
    /// run before handing the machine to an engine
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The unique table entry for (`state`, `reads`), if one is defined.
    /// Returns `None` when `reads` has the wrong length for this machine.
    fn action(&self, state: &str, reads: &[char]) -> Option<&Action>;
}
