//! Repository for the `usuario` table.

use sqlx::PgPool;
use trankaki_core::types::DbId;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, nome, cpf";

/// Read access to users, plus the insert used by provisioning.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO usuario (nome, cpf) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.nome)
            .bind(&input.cpf)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuario WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuario ORDER BY nome, id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
