//! Repository for the `praia` table.

use sqlx::PgPool;

use crate::models::beach::{Beach, CreateBeach};

const COLUMNS: &str = "id, nome, cidade";

pub struct BeachRepo;

impl BeachRepo {
    pub async fn create(pool: &PgPool, input: &CreateBeach) -> Result<Beach, sqlx::Error> {
        let query =
            format!("INSERT INTO praia (nome, cidade) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Beach>(&query)
            .bind(&input.nome)
            .bind(&input.cidade)
            .fetch_one(pool)
            .await
    }

    /// List all beaches ordered by city, then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Beach>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM praia ORDER BY cidade, nome");
        sqlx::query_as::<_, Beach>(&query).fetch_all(pool).await
    }
}
