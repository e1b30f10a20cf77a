//! Guard predicates over game phases.
//!
//! Guards decide whether a move may run in the current phase. They are
//! pure boolean functions, so gating logic stays free of side effects.

use super::phase::Phase;
use std::marker::PhantomData;

/// Pure predicate that decides whether a move is allowed in a phase.
///
/// # Example
///
/// ```rust
/// use unscramble::core::{GamePhase, Guard, Phase};
///
/// let accepts_moves = Guard::new(|p: &GamePhase| !p.is_final());
///
/// assert!(accepts_moves.check(&GamePhase::Playing));
/// assert!(!accepts_moves.check(&GamePhase::GameOver));
/// ```
pub struct Guard<P: Phase> {
    predicate: Box<dyn Fn(&P) -> bool + Send + Sync>,
    _phantom: PhantomData<P>,
}

impl<P: Phase> Guard<P> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits every non-final phase.
    pub fn not_final() -> Self {
        Self::new(|phase: &P| !phase.is_final())
    }

    /// Check if the guard allows a move from this phase.
    pub fn check(&self, phase: &P) -> bool {
        (self.predicate)(phase)
    }
}

impl<P: Phase> std::fmt::Debug for Guard<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
