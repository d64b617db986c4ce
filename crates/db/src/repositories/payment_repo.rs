//! Repository for the `pagamento` table.

use sqlx::{PgExecutor, PgPool};
use trankaki_core::payment::{PaymentMethod, PaymentStatus, PAYMENT_LIST_LIMIT};
use trankaki_core::types::{DbId, Money, Timestamp};

use crate::models::payment::{CreatePayment, Payment, PaymentListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario_id, valor, data, status, metodo, alvo, created_at, updated_at";

/// Provides inserts and listings for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a payment, returning the created row.
    ///
    /// Accepts any executor so fine debts can be written inside the
    /// rental-closing transaction.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePayment,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO pagamento (usuario_id, valor, data, status, metodo, alvo)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.usuario_id)
            .bind(input.valor)
            .bind(input.data)
            .bind(input.status.as_str())
            .bind(input.metodo.map(PaymentMethod::as_str))
            .bind(input.alvo.as_str())
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pagamento WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List payments owned by a user, newest first.
    pub async fn list_for_user(pool: &PgPool, usuario_id: DbId) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pagamento WHERE usuario_id = $1 ORDER BY data DESC, id DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    /// The most recent payments, newest first, with normalized status.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<PaymentListing>, sqlx::Error> {
        let rows: Vec<(DbId, DbId, Money, Timestamp, Option<String>, String, String)> =
            sqlx::query_as(
                "SELECT id, usuario_id, valor, data, metodo, alvo, status \
                 FROM pagamento \
                 ORDER BY data DESC, id DESC \
                 LIMIT $1",
            )
            .bind(PAYMENT_LIST_LIMIT)
            .fetch_all(pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, usuario_id, valor, data_pagamento, metodo, alvo, status)| PaymentListing {
                    id,
                    usuario_id,
                    valor,
                    data_pagamento,
                    metodo,
                    alvo,
                    status: listed_status(&status),
                },
            )
            .collect())
    }
}

/// Anything not recorded as settled is listed as open.
fn listed_status(stored: &str) -> &'static str {
    match stored.parse::<PaymentStatus>() {
        Ok(status) => status.listed_label(),
        Err(_) => PaymentStatus::Open.listed_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::listed_status;

    #[test]
    fn settled_is_listed_as_paid() {
        assert_eq!(listed_status("Concluído"), "pago");
    }

    #[test]
    fn open_and_unknown_are_listed_as_open() {
        assert_eq!(listed_status("Em Aberto"), "em_aberto");
        assert_eq!(listed_status("Pendente"), "em_aberto");
    }
}
