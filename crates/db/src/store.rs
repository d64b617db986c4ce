//! The store handle injected into the rental lifecycle service.
//!
//! [`RentalStore`] is the seam between business rules and persistence:
//! the service is generic over it, [`PgStore`] implements it on top of
//! the repositories, and tests substitute an in-memory double.

use std::future::Future;

use trankaki_core::search::LockerFilter;
use trankaki_core::types::Timestamp;

use crate::models::beach::Beach;
use crate::models::locker::{LockerAvailability, OccupiedLocker};
use crate::models::payment::{CreatePayment, Payment, PaymentListing};
use crate::models::rental::{ClosedRental, CreateRental, Rental};
use crate::models::report::Debtor;
use crate::models::user::User;
use crate::repositories::{
    BeachRepo, LockerRepo, PaymentRepo, RentalRepo, ReportRepo, UserRepo,
};
use crate::DbPool;

/// Persistence operations required by the rental lifecycle.
///
/// Multi-statement operations are atomic: they commit together or roll
/// back entirely before returning an error.
pub trait RentalStore: Send + Sync {
    fn search_lockers(
        &self,
        filter: &LockerFilter,
    ) -> impl Future<Output = Result<Vec<LockerAvailability>, sqlx::Error>> + Send;

    /// `Ok(None)` when the locker could not be claimed.
    fn open_rental(
        &self,
        input: &CreateRental,
    ) -> impl Future<Output = Result<Option<Rental>, sqlx::Error>> + Send;

    /// `Ok(None)` when no active rental exists for the locker code.
    fn close_rental(
        &self,
        locker_code: &str,
        actual_end: Timestamp,
    ) -> impl Future<Output = Result<Option<ClosedRental>, sqlx::Error>> + Send;

    fn record_payment(
        &self,
        input: &CreatePayment,
    ) -> impl Future<Output = Result<Payment, sqlx::Error>> + Send;

    fn list_payments(&self) -> impl Future<Output = Result<Vec<PaymentListing>, sqlx::Error>> + Send;

    fn list_debtors(&self) -> impl Future<Output = Result<Vec<Debtor>, sqlx::Error>> + Send;

    fn list_beaches(&self) -> impl Future<Output = Result<Vec<Beach>, sqlx::Error>> + Send;

    fn list_occupied_lockers(
        &self,
    ) -> impl Future<Output = Result<Vec<OccupiedLocker>, sqlx::Error>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, sqlx::Error>> + Send;

    /// Round-trip to the backing database.
    fn ping(&self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

/// PostgreSQL-backed [`RentalStore`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl RentalStore for PgStore {
    async fn search_lockers(
        &self,
        filter: &LockerFilter,
    ) -> Result<Vec<LockerAvailability>, sqlx::Error> {
        LockerRepo::search_available(&self.pool, filter).await
    }

    async fn open_rental(&self, input: &CreateRental) -> Result<Option<Rental>, sqlx::Error> {
        RentalRepo::open(&self.pool, input).await
    }

    async fn close_rental(
        &self,
        locker_code: &str,
        actual_end: Timestamp,
    ) -> Result<Option<ClosedRental>, sqlx::Error> {
        RentalRepo::close_by_locker_code(&self.pool, locker_code, actual_end).await
    }

    async fn record_payment(&self, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        PaymentRepo::create(&self.pool, input).await
    }

    async fn list_payments(&self) -> Result<Vec<PaymentListing>, sqlx::Error> {
        PaymentRepo::list_recent(&self.pool).await
    }

    async fn list_debtors(&self) -> Result<Vec<Debtor>, sqlx::Error> {
        ReportRepo::list_debtors(&self.pool).await
    }

    async fn list_beaches(&self) -> Result<Vec<Beach>, sqlx::Error> {
        BeachRepo::list(&self.pool).await
    }

    async fn list_occupied_lockers(&self) -> Result<Vec<OccupiedLocker>, sqlx::Error> {
        LockerRepo::list_occupied(&self.pool).await
    }

    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        UserRepo::list(&self.pool).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
