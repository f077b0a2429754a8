//! An instantaneous description of a run: the current state, the tapes, and
//! the number of steps taken so far. Cloning a configuration deep-copies its
//! tapes, which is what the execution trace relies on.

use crate::common::Action;
use crate::tape::Tape;

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    state: String,
    tapes: Vec<Tape>,
    steps: usize,
}

impl Configuration {
    /// A blank configuration with `tapes` empty tapes and no state set;
    /// callers run [`reset`](#method.reset) before stepping.
    pub fn new(tapes: usize, blank: char) -> Self {
        Configuration {
            state: String::new(),
            tapes: (0..tapes).map(|_| Tape::new(blank)).collect(),
            steps: 0,
        }
    }

    /// Re-arm for a fresh word: set the state, place the word on the first
    /// tape, blank the rest, zero the step counter.
    pub fn reset(&mut self, initial_state: &str, input: &str) {
        self.state.clear();
        self.state.push_str(initial_state);
        self.steps = 0;
        let mut tapes = self.tapes.iter_mut();
        if let Some(first) = tapes.next() {
            first.reset(input);
        }
        for tape in tapes {
            tape.reset("");
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn tapes(&self) -> &[Tape] {
        &self.tapes
    }

    pub fn tape_count(&self) -> usize {
        self.tapes.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// The tuple of symbols currently under the heads, tape order
    pub fn read_symbols(&self) -> Vec<char> {
        self.tapes.iter().map(Tape::read).collect()
    }

    /// Apply one table entry: on each tape write, then move (the write lands
    /// under the pre-movement head), then switch state and count the step.
    pub fn apply(&mut self, action: &Action) {
        debug_assert_eq!(action.arity(), self.tapes.len());
        for (tape, (&write, &motion)) in self
            .tapes
            .iter_mut()
            .zip(action.writes().iter().zip(action.motions()))
        {
            tape.write(write);
            tape.apply_motion(motion);
        }
        self.state.clear();
        self.state.push_str(action.next_state());
        self.steps += 1;
    }

    /// The canonical fingerprint: equal for two configurations exactly when
    /// they are indistinguishable for deterministic stepping. Head positions
    /// are absolute and tape contents are the minimal non-blank windows, so
    /// trailing blank regions never leak in.
    pub fn compact(&self) -> String {
        if self.tapes.len() == 1 {
            let tape = &self.tapes[0];
            return format!("{}|{}|{}", self.state, tape.head_position(), tape.content());
        }
        let heads = self
            .tapes
            .iter()
            .map(|t| t.head_position().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let contents = self
            .tapes
            .iter()
            .map(Tape::content)
            .collect::<Vec<_>>()
            .join("|");
        format!("{}|{}|{}", self.state, heads, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Action, Motion};

    #[test]
    fn reset_places_the_word_on_the_first_tape_only() {
        let mut config = Configuration::new(2, '_');
        config.reset("q0", "abc");
        assert_eq!(config.state(), "q0");
        assert_eq!(config.step_count(), 0);
        assert_eq!(config.tapes()[0].content(), "abc");
        assert_eq!(config.tapes()[1].content(), "");
        assert_eq!(config.read_symbols(), vec!['a', '_']);
    }

    #[test]
    fn apply_writes_before_moving() {
        let mut config = Configuration::new(1, '_');
        config.reset("q0", "ab");
        let action = Action::new("q1".to_string(), vec!['x'], vec![Motion::Right]);
        config.apply(&action);
        assert_eq!(config.state(), "q1");
        assert_eq!(config.step_count(), 1);
        // the write landed under the pre-movement head
        assert_eq!(config.tapes()[0].content(), "xb");
        assert_eq!(config.tapes()[0].head_position(), 1);
    }

    #[test]
    fn fingerprints_agree_on_observably_equal_configurations() {
        let mut a = Configuration::new(1, '_');
        let mut b = Configuration::new(1, '_');
        a.reset("q0", "ab");
        b.reset("q0", "ab");
        assert_eq!(a.compact(), b.compact());

        // step counters do not participate
        let noop = Action::new("q0".to_string(), vec!['a'], vec![Motion::Stay]);
        b.apply(&noop);
        assert_eq!(a.compact(), b.compact());
    }

    #[test]
    fn fingerprints_differ_per_field() {
        let mut base = Configuration::new(1, '_');
        base.reset("q0", "ab");

        let mut other_state = base.clone();
        other_state.reset("q1", "ab");
        assert_ne!(base.compact(), other_state.compact());

        let mut other_word = base.clone();
        other_word.reset("q0", "ax");
        assert_ne!(base.compact(), other_word.compact());

        let mut other_head = base.clone();
        other_head.apply(&Action::new("q0".to_string(), vec!['a'], vec![Motion::Right]));
        assert_ne!(base.compact(), other_head.compact());
    }

    #[test]
    fn trailing_blanks_do_not_change_the_fingerprint() {
        let mut wandered = Configuration::new(1, '_');
        wandered.reset("q0", "ab");
        // walk right over blanks and come back
        wandered.apply(&Action::new("q0".to_string(), vec!['a'], vec![Motion::Right]));
        wandered.apply(&Action::new("q0".to_string(), vec!['b'], vec![Motion::Right]));
        wandered.apply(&Action::new("q0".to_string(), vec!['_'], vec![Motion::Left]));
        wandered.apply(&Action::new("q0".to_string(), vec!['b'], vec![Motion::Left]));

        let mut fresh = Configuration::new(1, '_');
        fresh.reset("q0", "ab");
        assert_eq!(wandered.compact(), fresh.compact());
    }

    #[test]
    fn multi_tape_fingerprint_lists_heads_and_contents() {
        let mut config = Configuration::new(2, '_');
        config.reset("q0", "ab");
        assert_eq!(config.compact(), "q0|0,0|ab|");
    }

    #[test]
    fn clones_are_independent() {
        let mut config = Configuration::new(1, '_');
        config.reset("q0", "ab");
        let snapshot = config.clone();
        config.apply(&Action::new("q1".to_string(), vec!['z'], vec![Motion::Right]));
        assert_eq!(snapshot.tapes()[0].content(), "ab");
        assert_eq!(snapshot.state(), "q0");
    }
}
