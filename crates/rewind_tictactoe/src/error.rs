//! Engine error types.
//!
//! These are caller contract violations. Expected rejections such as playing
//! an occupied square are reported through [`MoveOutcome`](crate::MoveOutcome)
//! instead.

/// Error returned when a caller hands the engine an index it never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Jump target outside the recorded history.
    #[display("Move index {} is out of range (history has {} snapshots)", index, len)]
    InvalidIndex {
        /// Requested history index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Cell index outside the 3x3 board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),
}
