//! Locker rows from the `armario` table and its joined projections.

use serde::Serialize;
use sqlx::FromRow;
use trankaki_core::locker::{LockerSize, LockerStatus};
use trankaki_core::types::{DbId, Timestamp};

/// A locker row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Locker {
    pub id: DbId,
    pub praia_id: DbId,
    pub cod_armario: String,
    pub tamanho: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a locker. Status defaults to `Disponível`.
#[derive(Debug, Clone)]
pub struct CreateLocker {
    pub praia_id: DbId,
    pub cod_armario: String,
    pub tamanho: LockerSize,
    pub status: Option<LockerStatus>,
}

/// A locker joined with its beach, as returned by the availability search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LockerAvailability {
    pub armario_id: DbId,
    pub cod_armario: String,
    pub tamanho: String,
    pub status: String,
    pub praia_nome: String,
    pub cidade: String,
}

/// An occupied locker, used to pick the rental to close.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OccupiedLocker {
    pub id: DbId,
    pub cod_armario: String,
    pub praia_nome: String,
}
