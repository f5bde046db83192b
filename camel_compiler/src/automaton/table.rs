//! The statement automaton's transition table
//!
//! Hand-authored, fixed data. The drive loop in `validator` only ever calls
//! `lookup`; nothing here depends on how the table is walked.

use super::state::{InputClass, State};

/// The transition relation of the statement DFA:
/// `identifier = identifier (operator identifier)* ;`
const TRANSITIONS: &[((State, InputClass), State)] = &[
    ((State::Q0, InputClass::Letter), State::Q1),
    ((State::Q1, InputClass::Assign), State::Q2),
    ((State::Q2, InputClass::Letter), State::Q3),
    ((State::Q3, InputClass::Operator), State::Q4),
    ((State::Q3, InputClass::Special), State::Accept),
    ((State::Q4, InputClass::Letter), State::Q3),
];

/// First-class lookup table mapping `(State, InputClass)` to the next state
#[derive(Debug, Clone, Copy)]
pub struct TransitionTable {
    entries: &'static [((State, InputClass), State)],
}

impl TransitionTable {
    /// The standard statement table
    pub const fn standard() -> Self {
        Self {
            entries: TRANSITIONS,
        }
    }

    /// Look up the successor for a state/class pair. `None` means the
    /// machine has no move: the driver records a transition to `q_error`.
    pub fn lookup(&self, state: State, class: InputClass) -> Option<State> {
        self.entries
            .iter()
            .find(|((from, input), _)| *from == state && *input == class)
            .map(|(_, to)| *to)
    }

    /// All entries, for display and audit
    pub fn entries(&self) -> &'static [((State, InputClass), State)] {
        self.entries
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}
