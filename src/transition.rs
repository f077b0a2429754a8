//! Immutable records describing one edge of the transition function, in the
//! form the parser produces them. Tables normalize these into
//! [`Action`](../common/struct.Action.html) payloads on insertion.

use crate::common::{Action, Motion, ValidationError};

/// A single-tape transition: in `from`, reading `read`, switch to `to`,
/// write `write` and move the head by `motion`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: String,
    read: char,
    to: String,
    write: char,
    motion: Motion,
}

impl Transition {
    pub fn new(from: String, read: char, to: String, write: char, motion: Motion) -> Self {
        Transition {
            from,
            read,
            to,
            write,
            motion,
        }
    }

    pub fn from_state(&self) -> &str {
        &self.from
    }

    pub fn read_symbol(&self) -> char {
        self.read
    }

    pub fn to_state(&self) -> &str {
        &self.to
    }

    pub fn write_symbol(&self) -> char {
        self.write
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Does this edge fire in `state` when the head reads `symbol`?
    pub fn is_applicable(&self, state: &str, symbol: char) -> bool {
        self.from == state && self.read == symbol
    }

    pub(crate) fn to_action(&self) -> Action {
        Action::new(self.to.clone(), vec![self.write], vec![self.motion])
    }

    /// Expand this edge to `tapes` tapes, acting on tape `target` and leaving
    /// every other tape untouched (read blank, write blank, stay).
    /// A construction convenience only; execution never lowers machines.
    pub fn lift(&self, tapes: usize, target: usize, blank: char) -> Option<MultiTransition> {
        if target >= tapes {
            return None;
        }
        let mut reads = vec![blank; tapes];
        let mut writes = vec![blank; tapes];
        let mut motions = vec![Motion::Stay; tapes];
        reads[target] = self.read;
        writes[target] = self.write;
        motions[target] = self.motion;
        MultiTransition::new(self.from.clone(), reads, self.to.clone(), writes, motions).ok()
    }
}

/// A k-tape transition. Well-formed only when the read, write and motion
/// vectors share the same non-zero length; `new` rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTransition {
    from: String,
    reads: Vec<char>,
    to: String,
    writes: Vec<char>,
    motions: Vec<Motion>,
}

impl MultiTransition {
    pub fn new(
        from: String,
        reads: Vec<char>,
        to: String,
        writes: Vec<char>,
        motions: Vec<Motion>,
    ) -> Result<Self, ValidationError> {
        let arity = reads.len();
        if arity == 0 {
            return Err(ValidationError::ArityMismatch {
                expected: 1,
                found: 0,
            });
        }
        if writes.len() != arity {
            return Err(ValidationError::ArityMismatch {
                expected: arity,
                found: writes.len(),
            });
        }
        if motions.len() != arity {
            return Err(ValidationError::ArityMismatch {
                expected: arity,
                found: motions.len(),
            });
        }
        Ok(MultiTransition {
            from,
            reads,
            to,
            writes,
            motions,
        })
    }

    pub fn from_state(&self) -> &str {
        &self.from
    }

    pub fn read_symbols(&self) -> &[char] {
        &self.reads
    }

    pub fn to_state(&self) -> &str {
        &self.to
    }

    pub fn write_symbols(&self) -> &[char] {
        &self.writes
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// The number of tapes the edge drives
    pub fn arity(&self) -> usize {
        self.reads.len()
    }

    /// Does this edge fire in `state` with `symbols` under the heads?
    pub fn is_applicable(&self, state: &str, symbols: &[char]) -> bool {
        self.from == state && self.reads.as_slice() == symbols
    }

    pub(crate) fn to_action(&self) -> Action {
        Action::new(self.to.clone(), self.writes.clone(), self.motions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_applicability() {
        let t = Transition::new("q0".into(), 'a', "q1".into(), 'b', Motion::Right);
        assert!(t.is_applicable("q0", 'a'));
        assert!(!t.is_applicable("q0", 'b'));
        assert!(!t.is_applicable("q1", 'a'));
    }

    #[test]
    fn multi_rejects_mismatched_vectors() {
        let err = MultiTransition::new(
            "q0".into(),
            vec!['a', 'b'],
            "q1".into(),
            vec!['a'],
            vec![Motion::Stay, Motion::Stay],
        );
        assert!(err.is_err());

        let err = MultiTransition::new("q0".into(), vec![], "q1".into(), vec![], vec![]);
        assert!(err.is_err());
    }

    #[test]
    fn multi_applicability_is_pointwise() {
        let t = MultiTransition::new(
            "q0".into(),
            vec!['a', '_'],
            "q1".into(),
            vec!['a', '1'],
            vec![Motion::Right, Motion::Right],
        )
        .unwrap();
        assert!(t.is_applicable("q0", &['a', '_']));
        assert!(!t.is_applicable("q0", &['a', '1']));
        assert!(!t.is_applicable("q0", &['a']));
    }

    #[test]
    fn lifting_pads_other_tapes_with_blank_stays() {
        let t = Transition::new("q0".into(), 'a', "q1".into(), 'b', Motion::Left);
        let lifted = t.lift(3, 1, '_').unwrap();
        assert_eq!(lifted.read_symbols(), &['_', 'a', '_']);
        assert_eq!(lifted.write_symbols(), &['_', 'b', '_']);
        assert_eq!(
            lifted.motions(),
            &[Motion::Stay, Motion::Left, Motion::Stay]
        );
        assert!(t.lift(2, 2, '_').is_none());
    }
}
