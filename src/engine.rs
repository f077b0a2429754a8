//! The simulation loop: drives a [`Configuration`] through a machine's
//! transition function until a terminal condition holds, and classifies the
//! outcome.
//!
//! Per iteration the checks run in a fixed order: step budget, accept,
//! halt-reject, step application, loop detection. The budget comes first so a
//! machine cannot dodge the INFINITE classification by reaching an accept
//! state exactly at the cap; accept comes before the table lookup so an
//! accept state with no outgoing edges still accepts.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::common::ValidationError;
use crate::configuration::Configuration;
use crate::TuringMachine;

/// The step budget used when none is configured. A budget of 0 means
/// unbounded, leaving loop detection as the only halting oracle.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Terminal classification of one simulated word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationResult {
    Accepted,
    Rejected,
    Infinite,
    Error,
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            SimulationResult::Accepted => "ACCEPT",
            SimulationResult::Rejected => "REJECT",
            SimulationResult::Infinite => "INFINITE",
            SimulationResult::Error => "ERROR",
        };
        write!(f, "{}", token)
    }
}

/// What went wrong when a run classifies as [`SimulationResult::Error`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The machine failed its structural check
    InvalidMachine(ValidationError),
    /// The input word contains a symbol outside the input alphabet
    SymbolOutsideInputAlphabet(char),
    /// An unexpected fault during step application
    Runtime(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidMachine(e) => write!(f, "invalid machine: {}", e),
            EngineError::SymbolOutsideInputAlphabet(c) => {
                write!(f, "input symbol {:?} is not in the input alphabet", c)
            }
            EngineError::Runtime(msg) => write!(f, "runtime fault: {}", msg),
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::InvalidMachine(err)
    }
}

/// Lifecycle of an engine: constructed, inside `simulate`, or holding a
/// produced result until the next `simulate` re-arms it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Running,
    Terminated,
}

/// Drives one machine over a batch of words, one at a time. The engine owns
/// the configuration, the trace buffer and the visited-fingerprint set; the
/// machine itself is borrowed read-only and can back several engines.
pub struct Engine<'a, M>
where
    M: TuringMachine,
{
    machine: &'a M,
    configuration: Configuration,
    trace: Vec<Configuration>,
    visited: HashSet<String>,
    max_steps: usize,
    loop_detected: bool,
    last_error: Option<EngineError>,
    phase: EngineState,
}

impl<'a, M> Engine<'a, M>
where
    M: TuringMachine,
{
    /// An engine with the default step budget
    pub fn new(machine: &'a M) -> Self {
        Self::with_max_steps(machine, DEFAULT_MAX_STEPS)
    }

    /// An engine with an explicit step budget; 0 means unbounded
    pub fn with_max_steps(machine: &'a M, max_steps: usize) -> Self {
        Engine {
            machine,
            configuration: Configuration::new(machine.tape_count(), machine.blank()),
            trace: Vec::new(),
            visited: HashSet::new(),
            max_steps,
            loop_detected: false,
            last_error: None,
            phase: EngineState::Ready,
        }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
    }

    /// The configuration the last run ended in
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Steps taken by the last run
    pub fn steps(&self) -> usize {
        self.configuration.step_count()
    }

    /// Did the last run end by revisiting a fingerprint (as opposed to
    /// exhausting the budget)?
    pub fn loop_detected(&self) -> bool {
        self.loop_detected
    }

    /// Snapshots of the last run, initial configuration first. Empty unless
    /// tracing was enabled.
    pub fn trace(&self) -> &[Configuration] {
        &self.trace
    }

    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    pub fn state(&self) -> EngineState {
        self.phase
    }

    /// Run one word to a terminal classification.
    ///
    /// The machine is structurally checked and the word gated against the
    /// input alphabet before anything executes; either failure produces
    /// [`SimulationResult::Error`] with [`last_error`](#method.last_error)
    /// set, and zero steps. Note that an accept state is terminal even when
    /// it has outgoing transitions, because acceptance is checked before the
    /// table lookup.
    pub fn simulate(&mut self, word: &str, enable_trace: bool) -> SimulationResult {
        self.phase = EngineState::Running;
        self.trace.clear();
        self.visited.clear();
        self.loop_detected = false;
        self.last_error = None;
        self.configuration.reset(self.machine.initial_state(), "");

        let machine = self.machine;
        if let Err(e) = machine.validate() {
            debug!("machine rejected by structural check: {}", e);
            self.last_error = Some(EngineError::InvalidMachine(e));
            return self.finish(SimulationResult::Error);
        }
        if let Some(symbol) = word.chars().find(|&c| !machine.is_input_symbol(c)) {
            debug!("word {:?} gated on symbol {:?}", word, symbol);
            self.last_error = Some(EngineError::SymbolOutsideInputAlphabet(symbol));
            return self.finish(SimulationResult::Error);
        }

        self.configuration.reset(machine.initial_state(), word);
        self.visited.insert(self.configuration.compact());
        if enable_trace {
            self.trace.push(self.configuration.clone());
        }

        loop {
            if self.max_steps > 0 && self.configuration.step_count() >= self.max_steps {
                debug!("budget of {} steps exhausted", self.max_steps);
                return self.finish(SimulationResult::Infinite);
            }
            if machine.is_accepting(self.configuration.state()) {
                debug!("accepted after {} steps", self.configuration.step_count());
                return self.finish(SimulationResult::Accepted);
            }

            let reads = self.configuration.read_symbols();
            let action = match machine.action(self.configuration.state(), &reads) {
                Some(action) => action,
                None => {
                    debug!(
                        "halted in {:?} reading {:?} after {} steps",
                        self.configuration.state(),
                        reads,
                        self.configuration.step_count()
                    );
                    return self.finish(SimulationResult::Rejected);
                }
            };
            // a valid machine cannot produce this, but a step must never
            // leave the configuration half-applied
            if action.arity() != self.configuration.tape_count() {
                self.last_error = Some(EngineError::Runtime(format!(
                    "table entry drives {} tapes, configuration has {}",
                    action.arity(),
                    self.configuration.tape_count()
                )));
                return self.finish(SimulationResult::Error);
            }
            self.configuration.apply(action);

            if !self.visited.insert(self.configuration.compact()) {
                debug!(
                    "configuration revisited after {} steps",
                    self.configuration.step_count()
                );
                self.loop_detected = true;
                return self.finish(SimulationResult::Infinite);
            }
            if enable_trace {
                self.trace.push(self.configuration.clone());
            }
        }
    }

    fn finish(&mut self, result: SimulationResult) -> SimulationResult {
        self.phase = EngineState::Terminated;
        result
    }
}
