//! # Split Engine
//!
//! Apportions CSV transaction amounts among a fixed roster of participants
//! according to per-transaction inclusion flags, producing a running total
//! owed by each participant.
//!
//! ## Design Principles
//!
//! - **Full re-derivation**: totals are recomputed from scratch after every
//!   mutation, never patched incrementally
//! - **NaN sentinel**: malformed amounts contaminate the totals they touch
//!   instead of being coerced to zero
//! - **Lockstep invariant**: every transaction's inclusion vector always
//!   matches the roster length
//! - **Display-only rounding**: two decimal places at formatting time only
//!
//! ## Example
//!
//! ```
//! use split_engine::SplitEngine;
//! use std::io::Cursor;
//!
//! let csv = "Description,Amount\nCoffee,10.00\nRent,1000.00\n";
//! let mut engine = SplitEngine::new();
//! engine.load_csv(Cursor::new(csv)).unwrap();
//! engine.set_all_for_participant(0, true).unwrap();
//! assert_eq!(engine.participants()[0].total.to_string(), "1010.00");
//! ```

pub mod amount;
pub mod engine;
pub mod error;
pub mod participant;
pub mod transaction;

pub use amount::Amount;
pub use engine::SplitEngine;
pub use error::{EngineError, Result};
pub use participant::{Participant, DEFAULT_ROSTER};
pub use transaction::{RawRow, Transaction};
