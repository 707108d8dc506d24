//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; tests check them
//! directly.

use crate::GameEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// Invariant: history starts from the empty board.
pub struct RootSnapshotEmptyInvariant;

impl Invariant<GameEngine> for RootSnapshotEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().first().is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: the cursor points at a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move() < engine.history_len()
    }

    fn description() -> &'static str {
        "Current move indexes a recorded snapshot"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    RootSnapshotEmptyInvariant,
    CursorInBoundsInvariant,
    AlternatingMarksInvariant,
    SingleCellDeltaInvariant,
);
