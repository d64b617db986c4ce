//! Integration tests for the transactional rental flows.
//!
//! Exercises `RentalRepo::open` and `RentalRepo::close_by_locker_code`
//! against a real database:
//! - Locker status follows the rental status
//! - Late returns issue exactly one open fine payment
//! - Failed operations leave no partial writes
//! - Racing callers open or close a given rental exactly once

mod common;

use assert_matches::assert_matches;
use rust_decimal::Decimal;
use sqlx::PgPool;
use trankaki_core::locker::{LockerSize, LockerStatus};
use trankaki_core::rental::{FINE_AMOUNT, RENTAL_PRICE};
use trankaki_db::repositories::{FineRepo, PaymentRepo, RentalRepo};

use common::{count, jan, locker_status, rental, seed_beach, seed_locker, seed_user};

// ---------------------------------------------------------------------------
// Open
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_marks_locker_occupied(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;

    let opened = RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .expect("available locker must be claimed");

    assert_eq!(opened.status, "ativo");
    assert_eq!(opened.valor, RENTAL_PRICE);
    assert!(opened.data_fim_real.is_none());
    assert!(opened.valor_final.is_none());
    assert_eq!(locker_status(&pool, locker.id).await, "Ocupado");

    let active = RentalRepo::find_active_for_locker(&pool, locker.id).await.unwrap();
    assert_eq!(active.map(|r| r.id), Some(opened.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_on_maintenance_locker_rolls_back(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker =
        seed_locker(&pool, beach, "B-13", LockerSize::Small, LockerStatus::Maintenance).await;

    let result = RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(count(&pool, "aluguel").await, 0);
    assert_eq!(locker_status(&pool, locker.id).await, "Manutenção");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_on_occupied_locker_violates_single_active_rental(pool: PgPool) {
    let ana = seed_user(&pool, "Ana", "111").await;
    let bruno = seed_user(&pool, "Bruno", "222").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;

    RentalRepo::open(&pool, &rental(ana, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    let err = RentalRepo::open(&pool, &rental(bruno, locker.id, jan(5, 10), jan(6, 10)))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("uq_aluguel_ativo_por_armario")
    );
    assert_eq!(count(&pool, "aluguel").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_with_unknown_locker_fails_without_writes(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;

    let err = RentalRepo::open(&pool, &rental(user, 9999, jan(1, 10), jan(2, 10)))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(_));
    assert_eq!(count(&pool, "aluguel").await, 0);
}

// ---------------------------------------------------------------------------
// Close
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn late_close_issues_one_open_fine(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    let closed = RentalRepo::close_by_locker_code(&pool, "B-12", jan(3, 9))
        .await
        .unwrap()
        .expect("active rental must be found");

    assert_eq!(closed.aluguel.status, "encerrado");
    assert_eq!(closed.aluguel.data_fim_real, Some(jan(3, 9)));
    assert_eq!(closed.aluguel.valor_final, Some(RENTAL_PRICE));

    let fine = closed.multa.expect("late return must be fined");
    assert_eq!(fine.valor, FINE_AMOUNT);
    assert_eq!(fine.aluguel_id, closed.aluguel.id);

    let payment = PaymentRepo::find_by_id(&pool, fine.pagamento_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.status, "Em Aberto");
    assert_eq!(payment.alvo, "multa");
    assert_eq!(payment.valor, Decimal::new(1000, 2));
    assert_eq!(payment.usuario_id, user);
    assert!(payment.metodo.is_none());

    assert_eq!(locker_status(&pool, locker.id).await, "Disponível");
    assert_eq!(FineRepo::list_for_rental(&pool, closed.aluguel.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn close_exactly_at_planned_end_is_not_fined(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    let closed = RentalRepo::close_by_locker_code(&pool, "B-12", jan(2, 10))
        .await
        .unwrap()
        .unwrap();

    assert!(closed.multa.is_none());
    assert_eq!(count(&pool, "pagamento").await, 0);
    assert_eq!(count(&pool, "multa").await, 0);
    assert_eq!(locker_status(&pool, locker.id).await, "Disponível");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn close_unknown_code_changes_nothing(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    let opened = RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    let result = RentalRepo::close_by_locker_code(&pool, "Z-99", jan(3, 9))
        .await
        .unwrap();

    assert!(result.is_none());
    let still_open = RentalRepo::find_by_id(&pool, opened.id).await.unwrap().unwrap();
    assert_eq!(still_open.status, "ativo");
    assert_eq!(locker_status(&pool, locker.id).await, "Ocupado");
    assert_eq!(count(&pool, "pagamento").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_close_finds_nothing(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    RentalRepo::close_by_locker_code(&pool, "B-12", jan(3, 9))
        .await
        .unwrap()
        .unwrap();
    let again = RentalRepo::close_by_locker_code(&pool, "B-12", jan(3, 10))
        .await
        .unwrap();

    assert!(again.is_none());
    assert_eq!(count(&pool, "multa").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn locker_can_be_rented_again_after_close(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();
    RentalRepo::close_by_locker_code(&pool, "B-12", jan(2, 9))
        .await
        .unwrap()
        .unwrap();

    let reopened = RentalRepo::open(&pool, &rental(user, locker.id, jan(4, 10), jan(5, 10)))
        .await
        .unwrap();

    assert!(reopened.is_some());
    assert_eq!(count(&pool, "aluguel").await, 2);
}

// ---------------------------------------------------------------------------
// Concurrent callers
// ---------------------------------------------------------------------------

const RACERS: usize = 8;

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_closes_settle_the_rental_once(pool: PgPool) {
    let user = seed_user(&pool, "Ana", "111").await;
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    RentalRepo::open(&pool, &rental(user, locker.id, jan(1, 10), jan(2, 10)))
        .await
        .unwrap()
        .unwrap();

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move {
                RentalRepo::close_by_locker_code(&pool, "B-12", jan(3, 9)).await
            })
        })
        .collect();

    let mut closed = Vec::new();
    for handle in handles {
        if let Some(result) = handle.await.unwrap().unwrap() {
            closed.push(result);
        }
    }

    assert_eq!(closed.len(), 1, "only one caller may close the rental");
    assert!(closed[0].multa.is_some());
    assert_eq!(count(&pool, "multa").await, 1);
    assert_eq!(count(&pool, "pagamento").await, 1);
    assert_eq!(locker_status(&pool, locker.id).await, "Disponível");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_opens_claim_the_locker_once(pool: PgPool) {
    let beach = seed_beach(&pool, "Copacabana", "Rio de Janeiro").await;
    let locker = seed_locker(&pool, beach, "B-12", LockerSize::Medium, LockerStatus::Available).await;
    let mut users = Vec::new();
    for i in 0..RACERS {
        users.push(seed_user(&pool, &format!("Banhista {i}"), &format!("cpf-{i}")).await);
    }

    let handles: Vec<_> = users
        .into_iter()
        .map(|user| {
            let pool = pool.clone();
            let input = rental(user, locker.id, jan(1, 10), jan(2, 10));
            tokio::spawn(async move { RentalRepo::open(&pool, &input).await })
        })
        .collect();

    let mut opened = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(Some(_)) => opened += 1,
            Err(sqlx::Error::Database(db_err)) => {
                assert_eq!(db_err.code().as_deref(), Some("23505"));
                assert_eq!(db_err.constraint(), Some("uq_aluguel_ativo_por_armario"));
            }
            other => panic!("unexpected open outcome: {other:?}"),
        }
    }

    assert_eq!(opened, 1, "only one caller may claim the locker");
    assert_eq!(count(&pool, "aluguel").await, 1);
    assert_eq!(locker_status(&pool, locker.id).await, "Ocupado");
}
