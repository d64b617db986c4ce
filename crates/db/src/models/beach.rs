//! Beach rows from the `praia` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trankaki_core::types::DbId;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beach {
    pub id: DbId,
    pub nome: String,
    pub cidade: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeach {
    pub nome: String,
    pub cidade: String,
}
