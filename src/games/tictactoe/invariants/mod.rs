//! First-class invariants for a tic-tac-toe match.
//!
//! Invariants are logical properties that must hold between engine
//! operations. They are checked after every accepted move in debug builds
//! and can be tested independently.

use super::engine::MatchEngine;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for a tuple of three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

pub mod mark_balance;
pub mod round_count;
pub mod score_bound;

pub use mark_balance::MarkBalanceInvariant;
pub use round_count::RoundCountInvariant;
pub use score_bound::ScoreBoundInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (ScoreBoundInvariant, RoundCountInvariant, MarkBalanceInvariant);

/// Asserts that all match invariants hold (panics on violation in debug builds).
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &MatchEngine) {
    if let Err(violations) = MatchInvariants::check_all(engine) {
        for violation in &violations {
            warn!(description = %violation.description, "Match invariant violated");
        }
        debug_assert!(violations.is_empty(), "Match invariants violated: {violations:?}");
    }
}
