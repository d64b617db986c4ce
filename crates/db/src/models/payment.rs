//! Payment rows from the `pagamento` table.

use serde::Serialize;
use sqlx::FromRow;
use trankaki_core::payment::{PaymentMethod, PaymentStatus, PaymentTarget};
use trankaki_core::types::{DbId, Money, Timestamp};

/// A payment row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub usuario_id: DbId,
    pub valor: Money,
    pub data: Timestamp,
    pub status: String,
    pub metodo: Option<String>,
    pub alvo: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a payment.
///
/// Operator-recorded payments are `Completed` and carry a method;
/// system-generated fine debts are `Open` with no method.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub usuario_id: DbId,
    pub valor: Money,
    pub data: Timestamp,
    pub status: PaymentStatus,
    pub metodo: Option<PaymentMethod>,
    pub alvo: PaymentTarget,
}

/// A payment as shown in the payment listing, with its status normalized
/// to `pago` / `em_aberto`.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentListing {
    pub id: DbId,
    pub usuario_id: DbId,
    pub valor: Money,
    pub data_pagamento: Timestamp,
    pub metodo: Option<String>,
    pub alvo: String,
    pub status: &'static str,
}
