//! Rental rows from the `aluguel` table.

use serde::Serialize;
use sqlx::FromRow;
use trankaki_core::types::{DbId, Money, Timestamp};

use crate::models::fine::Fine;

/// A rental row. `data_fim` is the planned end; `data_fim_real` and
/// `valor_final` are set once, when the rental closes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub usuario_id: DbId,
    pub armario_id: DbId,
    pub data_inicio: Timestamp,
    pub data_fim: Timestamp,
    pub data_fim_real: Option<Timestamp>,
    pub status: String,
    pub valor: Money,
    pub valor_final: Option<Money>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening a rental. Price and status are fixed by the repository.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub usuario_id: DbId,
    pub armario_id: DbId,
    pub data_inicio: Timestamp,
    pub data_fim: Timestamp,
}

/// Result of closing a rental: the updated row and the fine, if late.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedRental {
    pub aluguel: Rental,
    pub multa: Option<Fine>,
}
