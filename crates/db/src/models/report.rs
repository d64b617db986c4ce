//! Aggregate report rows.

use serde::Serialize;
use sqlx::FromRow;
use trankaki_core::types::{DbId, Money};

/// A user with open payments and the sum owed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Debtor {
    pub usuario_id: DbId,
    pub nome: String,
    pub total_em_aberto: Money,
}
