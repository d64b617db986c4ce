//! Repository for the `armario` table.

use sqlx::{PgExecutor, PgPool};
use trankaki_core::locker::LockerStatus;
use trankaki_core::rental::RentalStatus;
use trankaki_core::search::LockerFilter;
use trankaki_core::types::DbId;

use crate::models::locker::{CreateLocker, Locker, LockerAvailability, OccupiedLocker};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, praia_id, cod_armario, tamanho, status, created_at, updated_at";

/// Projection returned by the availability search.
const AVAILABILITY_COLUMNS: &str = "a.id AS armario_id, a.cod_armario, a.tamanho, a.status, \
    p.nome AS praia_nome, p.cidade";

/// Provides locker lookups, the availability search and the status
/// transitions used inside rental transactions.
pub struct LockerRepo;

impl LockerRepo {
    /// Insert a locker, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocker) -> Result<Locker, sqlx::Error> {
        let query = format!(
            "INSERT INTO armario (praia_id, cod_armario, tamanho, status)
             VALUES ($1, $2, $3, COALESCE($4, $5))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Locker>(&query)
            .bind(input.praia_id)
            .bind(&input.cod_armario)
            .bind(input.tamanho.as_str())
            .bind(input.status.map(LockerStatus::as_str))
            .bind(LockerStatus::Available.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Locker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM armario WHERE id = $1");
        sqlx::query_as::<_, Locker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search lockers joined with their beach.
    ///
    /// Lockers under maintenance are never returned. When `filter.range`
    /// is set, lockers holding an active rental whose `[data_inicio,
    /// data_fim)` overlaps the range are excluded. Ordered by city, beach
    /// name, then locker code.
    pub async fn search_available(
        pool: &PgPool,
        filter: &LockerFilter,
    ) -> Result<Vec<LockerAvailability>, sqlx::Error> {
        // $1 is always the maintenance label.
        let mut conditions = vec!["a.status <> $1".to_string()];
        let mut param_idx = 2u32;

        if filter.beach_name.is_some() {
            conditions.push(format!("p.nome ILIKE ${param_idx}"));
            param_idx += 1;
        }
        if filter.size.is_some() {
            conditions.push(format!("a.tamanho = ${param_idx}"));
            param_idx += 1;
        }
        if filter.status.is_some() {
            conditions.push(format!("a.status = ${param_idx}"));
            param_idx += 1;
        }
        if filter.range.is_some() {
            let (status_idx, start_idx, end_idx) = (param_idx, param_idx + 1, param_idx + 2);
            conditions.push(format!(
                "NOT EXISTS (SELECT 1 FROM aluguel al \
                 WHERE al.armario_id = a.id AND al.status = ${status_idx} \
                 AND al.data_inicio < ${end_idx} AND ${start_idx} < al.data_fim)"
            ));
        }

        let query = format!(
            "SELECT {AVAILABILITY_COLUMNS} \
             FROM armario a \
             JOIN praia p ON a.praia_id = p.id \
             WHERE {} \
             ORDER BY p.cidade, p.nome, a.cod_armario",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, LockerAvailability>(&query)
            .bind(LockerStatus::Maintenance.as_str());
        if let Some(name) = &filter.beach_name {
            q = q.bind(format!("%{}%", escape_like(name)));
        }
        if let Some(size) = filter.size {
            q = q.bind(size.as_str());
        }
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        if let Some((start, end)) = filter.range {
            q = q.bind(RentalStatus::Active.as_str()).bind(start).bind(end);
        }

        q.fetch_all(pool).await
    }

    /// List occupied lockers ordered by code.
    pub async fn list_occupied(pool: &PgPool) -> Result<Vec<OccupiedLocker>, sqlx::Error> {
        sqlx::query_as::<_, OccupiedLocker>(
            "SELECT a.id, a.cod_armario, p.nome AS praia_nome \
             FROM armario a \
             JOIN praia p ON a.praia_id = p.id \
             WHERE a.status = $1 \
             ORDER BY a.cod_armario",
        )
        .bind(LockerStatus::Occupied.as_str())
        .fetch_all(pool)
        .await
    }

    /// Mark a locker `Ocupado` only if it is currently `Disponível`.
    ///
    /// Returns `false` when the locker does not exist or is not available.
    pub async fn claim<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE armario SET status = $2 WHERE id = $1 AND status = $3")
            .bind(id)
            .bind(LockerStatus::Occupied.as_str())
            .bind(LockerStatus::Available.as_str())
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return a locker to `Disponível`. Returns `true` if a row was updated.
    pub async fn release<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE armario SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(LockerStatus::Available.as_str())
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `ILIKE` wildcards so the beach filter matches a literal substring.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
