//! Error types for the minimization engine.
//!
//! All failures are terminal for the call that produced them: the engine is a
//! pure computation and never returns a partial or approximated result.
//! Variants fall into two groups: invalid input (the problem statement itself
//! is malformed) and capacity (the exact algorithm would need tables the
//! implementation refuses to allocate).

use std::fmt;

/// The error type for minimization problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The problem declares zero variables.
    NoVariables,

    /// The variable count exceeds what patterns and rendering support.
    TooManyVariables {
        /// The requested variable count
        requested: u32,
        /// The maximum supported variable count
        max: u32,
    },

    /// A constituent lies outside `[0, 2^num_vars)`.
    TermOutOfRange {
        /// The offending constituent
        term: u32,
        /// The declared variable count
        num_vars: u32,
    },

    /// A constituent appears both as a required one and as a don't-care.
    OverlappingDontCare {
        /// The constituent present in both sets
        term: u32,
    },

    /// The set-cover instance has more terms than the DP table can index.
    ///
    /// The cover solver allocates `2^m` states per implicant row, where `m`
    /// is the number of constituents that must be covered. For the
    /// conjunctive form `m` counts the *complement* constituents, so this can
    /// fire even when the original `ones` set is small.
    TooManyTerms {
        /// The number of constituents the cover would have to index
        count: usize,
        /// The maximum supported count
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoVariables => {
                write!(f, "Problem must declare at least one variable")
            }
            Error::TooManyVariables { requested, max } => {
                write!(f, "Variable count {} exceeds the supported maximum {}", requested, max)
            }
            Error::TermOutOfRange { term, num_vars } => {
                write!(f, "Constituent {} out of range for {} variables (valid range: 0..{})", term, num_vars, 1u64 << num_vars)
            }
            Error::OverlappingDontCare { term } => {
                write!(f, "Constituent {} is both a required one and a don't-care", term)
            }
            Error::TooManyTerms { count, max } => {
                write!(f, "Cover instance with {} constituents exceeds the supported maximum {}", count, max)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for minimization operations.
pub type Result<T> = std::result::Result<T, Error>;
