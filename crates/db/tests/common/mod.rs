//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use trankaki_core::locker::{LockerSize, LockerStatus};
use trankaki_core::types::{DbId, Timestamp};
use trankaki_db::models::beach::CreateBeach;
use trankaki_db::models::locker::{CreateLocker, Locker};
use trankaki_db::models::rental::CreateRental;
use trankaki_db::models::user::CreateUser;
use trankaki_db::repositories::{BeachRepo, LockerRepo, UserRepo};

/// UTC timestamp on the given day and hour of January 2024.
pub fn jan(day: u32, hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

pub async fn seed_user(pool: &PgPool, nome: &str, cpf: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            nome: nome.to_string(),
            cpf: cpf.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_beach(pool: &PgPool, nome: &str, cidade: &str) -> DbId {
    BeachRepo::create(
        pool,
        &CreateBeach {
            nome: nome.to_string(),
            cidade: cidade.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_locker(
    pool: &PgPool,
    praia_id: DbId,
    code: &str,
    size: LockerSize,
    status: LockerStatus,
) -> Locker {
    LockerRepo::create(
        pool,
        &CreateLocker {
            praia_id,
            cod_armario: code.to_string(),
            tamanho: size,
            status: Some(status),
        },
    )
    .await
    .unwrap()
}

pub fn rental(usuario_id: DbId, armario_id: DbId, start: Timestamp, end: Timestamp) -> CreateRental {
    CreateRental {
        usuario_id,
        armario_id,
        data_inicio: start,
        data_fim: end,
    }
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

pub async fn locker_status(pool: &PgPool, id: DbId) -> String {
    LockerRepo::find_by_id(pool, id).await.unwrap().unwrap().status
}
