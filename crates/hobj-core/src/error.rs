//! Errors raised while building or running a hard-object computation.
//!
//! Every failure is fatal for the computation that raised it: an engine that
//! returned an error should be reset or dropped.

use thiserror::Error;

/// Errors of the hard-object engine and its input adapters.
///
/// Ids are carried in their `Debug` rendering so the error type does not
/// depend on the caller's id type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HobjError {
    /// The same element was scheduled twice.
    #[error("element {element} was already applied")]
    DuplicateElement {
        /// The repeated element key.
        element: String,
    },

    /// More ids are open at once than the generator pool can bind.
    #[error("generator pool exhausted: more than {capacity} ids open at once")]
    PoolExhausted {
        /// The pool capacity in use.
        capacity: usize,
    },

    /// A neighbour lists a node that does not list it back.
    #[error("asymmetric graph: {node} lists {neighbor} but not conversely")]
    AsymmetricGraph {
        /// The node whose adjacency contains `neighbor`.
        node: String,
        /// The neighbour missing the reverse entry.
        neighbor: String,
    },

    /// Structural problem in a graph input (self-loop, repeated or unknown
    /// neighbour, invalid seed).
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// Non-rectangular matrix input.
    #[error("malformed matrix: {0}")]
    MalformedMatrix(String),

    /// The state did not collapse to the single empty-mask entry.
    #[error("incomplete closure: {open} ids still open over {entries} state entries")]
    IncompleteClosure {
        /// Number of state entries.
        entries: usize,
        /// Number of ids still bound in the pool.
        open: usize,
    },

    /// A value cannot be represented in the requested evaluation domain.
    #[error("domain mismatch: {0}")]
    DomainMismatch(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HobjError>;
