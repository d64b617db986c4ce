//! Repository for the `multa` table.

use sqlx::{PgExecutor, PgPool};
use trankaki_core::types::DbId;

use crate::models::fine::{CreateFine, Fine};

const COLUMNS: &str = "id, valor, pagamento_id, aluguel_id, created_at, updated_at";

pub struct FineRepo;

impl FineRepo {
    /// Insert a fine. Only called from the rental-closing transaction.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateFine,
    ) -> Result<Fine, sqlx::Error> {
        let query = format!(
            "INSERT INTO multa (valor, pagamento_id, aluguel_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fine>(&query)
            .bind(input.valor)
            .bind(input.pagamento_id)
            .bind(input.aluguel_id)
            .fetch_one(executor)
            .await
    }

    /// List fines issued for a rental.
    pub async fn list_for_rental(pool: &PgPool, aluguel_id: DbId) -> Result<Vec<Fine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM multa WHERE aluguel_id = $1 ORDER BY id");
        sqlx::query_as::<_, Fine>(&query)
            .bind(aluguel_id)
            .fetch_all(pool)
            .await
    }
}
