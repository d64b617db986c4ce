//! Rental lifecycle constants and the late-fee policy.
//!
//! A rental is opened `ativo` at a flat price and closed exactly once.
//! Closing after the planned end issues a single fixed fine.

use rust_decimal::Decimal;

use crate::label::define_label_enum;
use crate::types::{Money, Timestamp};

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Flat planned price of every rental (25.00).
pub const RENTAL_PRICE: Money = Decimal::from_parts(2500, 0, 0, false, 2);

/// Amount of the fine issued when a rental closes late (10.00).
pub const FINE_AMOUNT: Money = Decimal::from_parts(1000, 0, 0, false, 2);

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

define_label_enum! {
    /// Rental status. A rental moves from `Active` to `Closed` once.
    RentalStatus("rental status") {
        Active = "ativo",
        Closed = "encerrado",
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Whether a rental ending at `actual_end` is past its `planned_end`.
///
/// Strict comparison: returning exactly at the planned end is on time.
pub fn is_late(planned_end: Timestamp, actual_end: Timestamp) -> bool {
    actual_end > planned_end
}

/// Fine owed for closing a rental at `actual_end`, if any.
pub fn fine_for(planned_end: Timestamp, actual_end: Timestamp) -> Option<Money> {
    is_late(planned_end, actual_end).then_some(FINE_AMOUNT)
}

/// Final price charged when a rental closes. No proration.
pub fn final_price(planned_price: Money) -> Money {
    planned_price
}

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` share an instant
/// iff `s1 < e2 && s2 < e1`.
pub fn overlaps(s1: Timestamp, e1: Timestamp, s2: Timestamp, e2: Timestamp) -> bool {
    s1 < e2 && s2 < e1
}
