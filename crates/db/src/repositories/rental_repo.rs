//! Repository for the `aluguel` table and the two transactional rental
//! flows that keep `armario.status` in step with it.

use sqlx::PgPool;
use trankaki_core::payment::{PaymentStatus, PaymentTarget};
use trankaki_core::rental::{self, RentalStatus, RENTAL_PRICE};
use trankaki_core::types::{DbId, Timestamp};

use crate::models::fine::CreateFine;
use crate::models::payment::CreatePayment;
use crate::models::rental::{ClosedRental, CreateRental, Rental};
use crate::repositories::{FineRepo, LockerRepo, PaymentRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario_id, armario_id, data_inicio, data_fim, data_fim_real, \
    status, valor, valor_final, created_at, updated_at";

/// Provides the rental lifecycle transactions and rental lookups.
pub struct RentalRepo;

impl RentalRepo {
    /// Open a rental and mark its locker occupied, in one transaction.
    ///
    /// The insert runs first so a missing user or locker surfaces as a
    /// foreign-key error. The locker is then claimed only if it is
    /// `Disponível`; when the claim matches no row the transaction is
    /// rolled back and `None` is returned. A concurrent open of the same
    /// locker fails on `uq_aluguel_ativo_por_armario`.
    pub async fn open(pool: &PgPool, input: &CreateRental) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO aluguel (usuario_id, armario_id, data_inicio, data_fim, status, valor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&insert_query)
            .bind(input.usuario_id)
            .bind(input.armario_id)
            .bind(input.data_inicio)
            .bind(input.data_fim)
            .bind(RentalStatus::Active.as_str())
            .bind(RENTAL_PRICE)
            .fetch_one(&mut *tx)
            .await?;

        if !LockerRepo::claim(&mut *tx, input.armario_id).await? {
            tx.rollback().await?;
            tracing::warn!(
                armario_id = input.armario_id,
                "Locker is not available, rental rolled back"
            );
            return Ok(None);
        }

        tx.commit().await?;

        tracing::info!(
            aluguel_id = rental.id,
            armario_id = rental.armario_id,
            usuario_id = rental.usuario_id,
            "Rental opened"
        );
        Ok(Some(rental))
    }

    /// Close the active rental of the locker with code `locker_code`.
    ///
    /// In one transaction: lock the active rental row, set its actual
    /// end, status and final price, issue an open fine payment plus a
    /// fine when `actual_end` is past the planned end, and release the
    /// locker. Returns `None` (after rolling back) when the locker has
    /// no active rental.
    ///
    /// The row lock makes a concurrent second close wait for the first
    /// and then find nothing to close.
    pub async fn close_by_locker_code(
        pool: &PgPool,
        locker_code: &str,
        actual_end: Timestamp,
    ) -> Result<Option<ClosedRental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select_query = format!(
            "SELECT {COLUMNS} FROM aluguel \
             WHERE status = $2 \
               AND armario_id IN (SELECT id FROM armario WHERE cod_armario = $1) \
             ORDER BY data_inicio \
             LIMIT 1 \
             FOR UPDATE"
        );
        let active = sqlx::query_as::<_, Rental>(&select_query)
            .bind(locker_code)
            .bind(RentalStatus::Active.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(active) = active else {
            tx.rollback().await?;
            return Ok(None);
        };

        let update_query = format!(
            "UPDATE aluguel SET data_fim_real = $2, status = $3, valor_final = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let closed = sqlx::query_as::<_, Rental>(&update_query)
            .bind(active.id)
            .bind(actual_end)
            .bind(RentalStatus::Closed.as_str())
            .bind(rental::final_price(active.valor))
            .fetch_one(&mut *tx)
            .await?;

        let multa = match rental::fine_for(active.data_fim, actual_end) {
            Some(amount) => {
                let payment = PaymentRepo::create(
                    &mut *tx,
                    &CreatePayment {
                        usuario_id: active.usuario_id,
                        valor: amount,
                        data: actual_end,
                        status: PaymentStatus::Open,
                        metodo: None,
                        alvo: PaymentTarget::Fine,
                    },
                )
                .await?;
                let fine = FineRepo::create(
                    &mut *tx,
                    &CreateFine {
                        valor: amount,
                        pagamento_id: payment.id,
                        aluguel_id: active.id,
                    },
                )
                .await?;
                Some(fine)
            }
            None => None,
        };

        LockerRepo::release(&mut *tx, active.armario_id).await?;

        tx.commit().await?;

        tracing::info!(
            aluguel_id = closed.id,
            armario_id = closed.armario_id,
            fined = multa.is_some(),
            "Rental closed"
        );
        Ok(Some(ClosedRental {
            aluguel: closed,
            multa,
        }))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aluguel WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The active rental holding a locker, if any.
    pub async fn find_active_for_locker(
        pool: &PgPool,
        armario_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aluguel WHERE armario_id = $1 AND status = $2");
        sqlx::query_as::<_, Rental>(&query)
            .bind(armario_id)
            .bind(RentalStatus::Active.as_str())
            .fetch_optional(pool)
            .await
    }
}
