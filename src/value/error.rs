//! Errors surfaced by the addition protocol

use thiserror::Error;

/// Summation error
///
/// Addition failures are never wrapped or retried; they travel from the
/// failing pair of operands straight to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SumError {
    /// Neither side of the addition recognized the other operand's type
    #[error("Incompatible operands for addition: {lhs} + {rhs}")]
    IncompatibleOperands {
        lhs: &'static str,
        rhs: &'static str,
    },
}
