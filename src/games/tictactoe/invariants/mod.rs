//! First-class invariants for the time-travel game.
//!
//! Invariants are logical properties every reachable [`Game`] satisfies.
//! They are testable independently and are asserted after each transition
//! in debug builds.

use super::Game;

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
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod initial_empty;
pub mod single_cell_delta;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use initial_empty::InitialEmptyInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All game invariants as a composable set.
pub type TimelineInvariants = (
    InitialEmptyInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
    CursorInBoundsInvariant,
);

/// Asserts every game invariant in debug builds.
pub fn assert_invariants(game: &Game) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = TimelineInvariants::check_all(game) {
        for violation in &violations {
            tracing::error!(%violation, "Game invariant violated");
        }
        panic!("{} game invariant(s) violated", violations.len());
    }
}
