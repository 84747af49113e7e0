//! Error taxonomy for the automaton core
//!
//! Every constructor and validated setter reports domain violations through
//! [`SimError::ValueExpected`]. The only recoverable failure in the core,
//! placing a car into an occupied cell, is reported as `Ok(false)` instead.

use std::fmt::Display;

/// Errors raised by the automaton core
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A value fell outside its documented domain
    #[error("{src}: expected {expected}, got {got}")]
    ValueExpected {
        expected: String,
        got: String,
        src: &'static str,
    },
}

impl SimError {
    pub fn value_expected(
        src: &'static str,
        expected: impl Display,
        got: impl Display,
    ) -> Self {
        SimError::ValueExpected {
            expected: expected.to_string(),
            got: got.to_string(),
            src,
        }
    }

    /// Name of the component that rejected the value
    pub fn source_component(&self) -> &'static str {
        match self {
            SimError::ValueExpected { src, .. } => src,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;

/// Convert a signed coordinate into an index, rejecting negatives
pub(crate) fn non_negative(src: &'static str, what: &str, value: i64) -> SimResult<usize> {
    usize::try_from(value)
        .map_err(|_| SimError::value_expected(src, format!("{what} >= 0"), format!("{what} = {value}")))
}
