use crate::value::Scalar;

/// Errors raised by the engine's own operations.
///
/// Operator callbacks passed to the broadcasting functions keep their own
/// error type; those errors are returned as-is and never end up here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot reduce an empty sequence")]
    EmptyReduction,

    #[error("nesting depth {depth} exceeds the supported limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("source flattens to an empty sequence")]
    EmptySource,

    #[error("unsupported operands for {op}: {lhs} and {rhs}")]
    UnsupportedOperands {
        op: &'static str,
        lhs: Scalar,
        rhs: Scalar,
    },

    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },
}

/// Convenience alias for `Result<T, EngineError>`.
pub type Result<T> = std::result::Result<T, EngineError>;
