//! Payment status, method and target labels.

use crate::label::define_label_enum;

define_label_enum! {
    /// Settlement status of a payment.
    PaymentStatus("payment status") {
        /// Debt not yet settled (system-generated fines start here).
        Open = "Em Aberto",
        /// Settled payment recorded by an operator.
        Completed = "Concluído",
    }
}

define_label_enum! {
    /// How a payment was made.
    PaymentMethod("payment method") {
        Pix = "pix",
        Card = "cartao",
        Boleto = "boleto",
    }
}

define_label_enum! {
    /// What a payment settles.
    PaymentTarget("payment target") {
        Rental = "aluguel",
        Fine = "multa",
    }
}

/// Listing label for a settled payment.
pub const LISTED_PAID: &str = "pago";

/// Listing label for an open payment.
pub const LISTED_OPEN: &str = "em_aberto";

/// Maximum number of payments returned by the payment listing.
pub const PAYMENT_LIST_LIMIT: i64 = 100;

impl PaymentStatus {
    /// Normalized label used by the payment listing.
    pub fn listed_label(self) -> &'static str {
        match self {
            PaymentStatus::Completed => LISTED_PAID,
            PaymentStatus::Open => LISTED_OPEN,
        }
    }
}
