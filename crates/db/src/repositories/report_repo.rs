//! Read-only aggregate reports.

use sqlx::PgPool;
use trankaki_core::payment::PaymentStatus;

use crate::models::report::Debtor;

pub struct ReportRepo;

impl ReportRepo {
    /// Users with open payments and the total they owe, largest debt first.
    pub async fn list_debtors(pool: &PgPool) -> Result<Vec<Debtor>, sqlx::Error> {
        sqlx::query_as::<_, Debtor>(
            "SELECT u.id AS usuario_id, u.nome, SUM(p.valor) AS total_em_aberto \
             FROM pagamento p \
             JOIN usuario u ON u.id = p.usuario_id \
             WHERE p.status = $1 \
             GROUP BY u.id, u.nome \
             ORDER BY total_em_aberto DESC, u.id",
        )
        .bind(PaymentStatus::Open.as_str())
        .fetch_all(pool)
        .await
    }
}
