//! DFA drive loop and transition trace
//!
//! Walks a token stream against the transition table and records every step
//! for diagnostic display. Rejection is a normal outcome here, never an
//! error value: malformed input simply fails to reach `q_accept`.

use super::state::{InputClass, State};
use super::table::TransitionTable;
use crate::config::constants::compile_time::automaton::MAX_TRACE_LENGTH;
use crate::log_debug;
use crate::logging::codes;
use crate::tokens::Token;
use serde::{Deserialize, Serialize};

/// One step of the automaton. Field order is a rendering contract:
/// from state, input class, next state, token text, final flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from_state: State,
    pub input_class: InputClass,
    pub to_state: State,
    pub token_text: String,
    pub is_final: bool,
}

/// Result of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// True iff the machine ended in exactly `q_accept`
    pub accepted: bool,
    /// The state the machine stopped in
    pub final_state: State,
    /// Every transition taken, in order
    pub trace: Vec<TransitionRecord>,
}

impl ValidationOutcome {
    /// The record that moved the machine into `q_error`, when one exists
    pub fn rejection_record(&self) -> Option<&TransitionRecord> {
        self.trace.iter().find(|r| r.to_state == State::Error)
    }
}

/// Statement validator driving the transition table
#[derive(Debug, Clone, Default)]
pub struct Validator {
    table: TransitionTable,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            table: TransitionTable::standard(),
        }
    }

    /// The table this validator drives
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Run the automaton over a token slice.
    ///
    /// The `EndOfInput` sentinel (and anything after it) is never fed to the
    /// table. Consumption stops as soon as a terminal state is reached; on a
    /// missing transition the recorded step goes to `q_error` and the rest of
    /// the stream is left untouched.
    pub fn run(&self, tokens: &[Token]) -> ValidationOutcome {
        let mut state = State::Q0;
        let mut trace: Vec<TransitionRecord> = Vec::new();

        for token in tokens {
            if token.is_end_of_input() || state.is_terminal() {
                break;
            }

            if trace.len() >= MAX_TRACE_LENGTH {
                log_debug!("Transition trace limit reached",
                    "code" => codes::automaton::TRACE_LIMIT_EXCEEDED,
                    "limit" => MAX_TRACE_LENGTH
                );
                break;
            }

            let class = InputClass::classify(token);

            match self.table.lookup(state, class) {
                Some(next) => {
                    trace.push(TransitionRecord {
                        from_state: state,
                        input_class: class,
                        to_state: next,
                        token_text: token.text.clone(),
                        is_final: next.is_final(),
                    });
                    state = next;
                }
                None => {
                    log_debug!("No transition for state and input class",
                        "code" => codes::automaton::NO_TRANSITION,
                        "state" => state,
                        "input_class" => class,
                        "token" => token.display_text()
                    );
                    trace.push(TransitionRecord {
                        from_state: state,
                        input_class: class,
                        to_state: State::Error,
                        token_text: token.text.clone(),
                        is_final: false,
                    });
                    state = State::Error;
                    break;
                }
            }
        }

        ValidationOutcome {
            accepted: state == State::Accept,
            final_state: state,
            trace,
        }
    }
}
