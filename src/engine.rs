//! Core allocation engine.
//!
//! Holds the current transaction list and participant roster, ingests CSV
//! uploads, applies inclusion-flag mutations, and re-derives every
//! participant's total from scratch after each mutation.

use crate::amount::Amount;
use crate::error::{EngineError, Result};
use crate::participant::{Participant, DEFAULT_ROSTER};
use crate::transaction::{RawRow, Transaction};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::io::{Read, Write};

/// The expense split engine.
///
/// Each user action (upload, single toggle, bulk toggle) is a discrete unit
/// of work: it reads the current state, mutates it, and recomputes all
/// totals before the next action is accepted. Totals are never patched
/// incrementally, so results depend only on the current inclusion state.
pub struct SplitEngine {
    /// Current transaction list, replaced wholesale on each upload.
    transactions: Vec<Transaction>,

    /// Participant roster; totals are derived state owned by `recompute`.
    participants: Vec<Participant>,
}

impl SplitEngine {
    /// Creates an engine with the default three-person roster.
    pub fn new() -> Self {
        Self::with_roster(DEFAULT_ROSTER.iter().map(|name| name.to_string()))
    }

    /// Creates an engine with a custom roster.
    pub fn with_roster(names: impl IntoIterator<Item = String>) -> Self {
        SplitEngine {
            transactions: Vec::new(),
            participants: names.into_iter().map(Participant::new).collect(),
        }
    }

    /// Loads transactions from a CSV reader, replacing any prior list.
    ///
    /// Required columns are `Description` and `Amount` (case-sensitive).
    /// Rows with an empty or absent description are dropped; malformed
    /// amounts become NaN sentinels attached to their transaction. Rows the
    /// CSV layer cannot tokenize at all are logged at warn level and
    /// skipped. An I/O failure from the underlying reader aborts the load;
    /// the prior transaction list is replaced only on a completed read.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let participant_count = self.participants.len();
        let mut loaded = Vec::new();

        for (row_idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(row) => match row.into_transaction(participant_count) {
                    Some(tx) => {
                        if !tx.amount.is_finite() {
                            warn!("Row {}: unparseable amount for {:?}", row_num, tx.description);
                        }
                        debug!("Row {}: loaded {:?} ({})", row_num, tx.description, tx.amount);
                        loaded.push(tx);
                    }
                    None => {
                        debug!("Row {}: dropped (empty description)", row_num);
                    }
                },
                Err(e) => {
                    if e.is_io_error() {
                        return Err(e.into());
                    }
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        self.transactions = loaded;
        self.recompute();
        Ok(())
    }

    /// Flips one inclusion flag, then recomputes all totals.
    pub fn toggle(&mut self, transaction_index: usize, participant_index: usize) -> Result<()> {
        self.check_transaction_index(transaction_index)?;
        self.check_participant_index(participant_index)?;

        let flag = &mut self.transactions[transaction_index].included[participant_index];
        *flag = !*flag;
        debug!(
            "Toggled transaction {} participant {} to {}",
            transaction_index, participant_index, *flag
        );

        self.recompute();
        Ok(())
    }

    /// Sets one participant's inclusion flag on every transaction, then
    /// recomputes all totals. Other participants' flags are untouched.
    pub fn set_all_for_participant(&mut self, participant_index: usize, value: bool) -> Result<()> {
        self.check_participant_index(participant_index)?;

        for tx in &mut self.transactions {
            tx.included[participant_index] = value;
        }
        debug!(
            "Set participant {} to {} across {} transactions",
            participant_index,
            value,
            self.transactions.len()
        );

        self.recompute();
        Ok(())
    }

    /// Re-derives every participant's total from the current inclusion state.
    ///
    /// For each transaction with `k > 0` included participants, each of them
    /// accrues `amount / k` (exact float division, no rounding). Transactions
    /// with no included participants contribute nothing. Idempotent: calling
    /// this any number of times without an intervening mutation yields
    /// identical totals.
    pub fn recompute(&mut self) {
        for participant in &mut self.participants {
            participant.total = Amount::ZERO;
        }

        for tx in &self.transactions {
            let k = tx.included_count();
            if k == 0 {
                continue;
            }

            let share = tx.amount / k;
            for (flag, participant) in tx.included.iter().zip(&mut self.participants) {
                if *flag {
                    participant.total += share;
                }
            }
        }
    }

    /// Derived "select all" state for one participant: `true` iff the
    /// transaction list is non-empty and every transaction includes them.
    ///
    /// Always recomputed on read; never cached.
    pub fn all_included(&self, participant_index: usize) -> bool {
        !self.transactions.is_empty()
            && self
                .transactions
                .iter()
                .all(|tx| tx.included.get(participant_index).copied().unwrap_or(false))
    }

    /// Replaces the roster, resizing every transaction's inclusion vector in
    /// the same operation so the two can never disagree in length. Flags for
    /// surviving indices are kept; new indices start excluded. Totals are
    /// recomputed against the new roster.
    pub fn set_roster(&mut self, names: impl IntoIterator<Item = String>) {
        self.participants = names.into_iter().map(Participant::new).collect();

        let count = self.participants.len();
        for tx in &mut self.transactions {
            tx.included.resize(count, false);
        }

        self.recompute();
    }

    /// Current transaction list, in upload order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current roster with derived totals, in roster order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Writes per-participant totals as CSV, fixed to two decimal places.
    pub fn write_totals<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["name", "total"])?;
        for participant in &self.participants {
            csv_writer.write_record([participant.name.clone(), participant.total.to_string()])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn check_transaction_index(&self, index: usize) -> Result<()> {
        if index < self.transactions.len() {
            Ok(())
        } else {
            Err(EngineError::TransactionOutOfRange {
                index,
                len: self.transactions.len(),
            })
        }
    }

    fn check_participant_index(&self, index: usize) -> Result<()> {
        if index < self.participants.len() {
            Ok(())
        } else {
            Err(EngineError::ParticipantOutOfRange {
                index,
                len: self.participants.len(),
            })
        }
    }
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}
