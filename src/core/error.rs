/// Errors reported by graph operations that were rejected without side effects.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The operation is not allowed in the graph's current state
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// No node carries the requested value
    #[error("no node with value {0}")]
    UnknownNode(u32),

    /// Edge weights must be strictly positive
    #[error("invalid edge weight {0}")]
    InvalidWeight(u32),
}
