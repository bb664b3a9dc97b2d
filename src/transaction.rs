//! Transaction models for CSV parsing and internal representation.

use crate::amount::Amount;
use serde::Deserialize;

/// Raw CSV row as an untyped column-name-to-text mapping.
///
/// Column names are matched case-sensitively (`Description`, `Amount`).
/// Both fields are optional so that ragged rows and missing header columns
/// deserialize instead of aborting the upload; the conversion below decides
/// what a missing field means.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    /// Free-text description, taken verbatim.
    #[serde(rename = "Description")]
    pub description: Option<String>,

    /// Amount text, parsed to a float (NaN sentinel on failure).
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
}

impl RawRow {
    /// Converts the untyped row into a typed [`Transaction`].
    ///
    /// Returns `None` when the description is empty or absent (trailing
    /// blank lines and the like); this is a filtering contract, not an
    /// error. A missing or malformed amount yields the NaN sentinel instead.
    pub fn into_transaction(self, participant_count: usize) -> Option<Transaction> {
        let description = self.description.filter(|d| !d.is_empty())?;
        let amount = match self.amount {
            Some(text) => Amount::parse(&text),
            None => Amount::NOT_A_NUMBER,
        };
        Some(Transaction::new(description, amount, participant_count))
    }
}

/// One monetary line item with per-participant inclusion flags.
///
/// # Invariants
///
/// - `included.len()` equals the participant count at all times; the engine
///   resizes every inclusion vector in lockstep when the roster changes.
/// - `amount` is immutable after creation; only the flags are mutated.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Free-text description from the CSV row.
    pub description: String,

    /// Transaction amount. May be the NaN sentinel for malformed input.
    pub amount: Amount,

    /// Inclusion flags, index-aligned to the participant roster.
    pub included: Vec<bool>,
}

impl Transaction {
    /// Creates a transaction with all inclusion flags cleared.
    pub fn new(description: String, amount: Amount, participant_count: usize) -> Self {
        Transaction {
            description,
            amount,
            included: vec![false; participant_count],
        }
    }

    /// Number of participants currently sharing this transaction.
    pub fn included_count(&self) -> usize {
        self.included.iter().filter(|&&flag| flag).count()
    }
}
