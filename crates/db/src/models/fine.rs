//! Fine rows from the `multa` table.

use serde::Serialize;
use sqlx::FromRow;
use trankaki_core::types::{DbId, Money, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fine {
    pub id: DbId,
    pub valor: Money,
    pub pagamento_id: DbId,
    pub aluguel_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateFine {
    pub valor: Money,
    pub pagamento_id: DbId,
    pub aluguel_id: DbId,
}
