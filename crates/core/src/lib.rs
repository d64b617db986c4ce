//! Domain vocabulary for the Trankaki locker-rental backend.
//!
//! No I/O lives here: only identifiers, the error taxonomy, the stored
//! labels of every status enum, pricing constants, the late-fee policy
//! and the parsing and validation helpers shared by the store and the
//! HTTP layer.

pub mod error;
mod label;
pub mod locker;
pub mod payment;
pub mod rental;
pub mod search;
pub mod time;
pub mod types;
pub mod validation;
