//! Participant model.
//!
//! A participant's total is derived state: it is fully recomputed from the
//! transaction list by the engine and never patched incrementally.

use crate::amount::Amount;

/// Default roster matching the reference configuration of three people.
pub const DEFAULT_ROSTER: [&str; 3] = ["Person X", "Person Y", "Person Z"];

/// One party among whom transaction amounts may be split.
///
/// `total` is written only by the engine's recomputation; user actions
/// mutate inclusion flags, never totals.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Display label for the participant.
    pub name: String,

    /// Running total owed, derived from current inclusion state.
    pub total: Amount,
}

impl Participant {
    /// Creates a participant with a zero total.
    pub fn new(name: impl Into<String>) -> Self {
        Participant {
            name: name.into(),
            total: Amount::ZERO,
        }
    }
}
