//! User rows from the `usuario` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trankaki_core::types::DbId;

/// A user as listed to the admin frontend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub nome: String,
    pub cpf: String,
}

/// DTO for provisioning a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub nome: String,
    pub cpf: String,
}
