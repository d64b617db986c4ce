//! Rental Lifecycle Service.
//!
//! Validates each request before any statement runs, then issues exactly
//! one store operation. The store is injected at construction, so the
//! service holds no global state and runs against any [`RentalStore`].

mod requests;

pub use requests::{CloseRentalRequest, LockerSearchParams, OpenRentalRequest, RecordPaymentRequest};

use trankaki_core::error::CoreError;
use trankaki_core::payment::{PaymentMethod, PaymentStatus, PaymentTarget};
use trankaki_core::search::LockerFilter;
use trankaki_core::time::parse_timestamp;
use trankaki_core::validation::{present, require_positive, validate_request};
use trankaki_db::models::beach::Beach;
use trankaki_db::models::locker::{LockerAvailability, OccupiedLocker};
use trankaki_db::models::payment::{CreatePayment, Payment, PaymentListing};
use trankaki_db::models::rental::{ClosedRental, CreateRental, Rental};
use trankaki_db::models::report::Debtor;
use trankaki_db::models::user::User;
use trankaki_db::store::RentalStore;

use crate::error::AppResult;

/// Rental lifecycle operations over an injected store.
pub struct RentalLifecycle<S: RentalStore> {
    store: S,
}

impl<S: RentalStore> RentalLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Lockers matching the filters, never under maintenance, and free of
    /// active rentals overlapping `[inicio, fim)` when both are given.
    pub async fn search_lockers(
        &self,
        params: &LockerSearchParams,
    ) -> AppResult<Vec<LockerAvailability>> {
        let filter = LockerFilter::parse(
            params.praia.as_deref(),
            params.tamanho.as_deref(),
            params.status.as_deref(),
            params.inicio.as_deref(),
            params.fim.as_deref(),
        )?;

        let lockers = self.store.search_lockers(&filter).await?;
        tracing::debug!(count = lockers.len(), ?filter, "Searched locker availability");
        Ok(lockers)
    }

    // -----------------------------------------------------------------------
    // Rentals
    // -----------------------------------------------------------------------

    /// Open a rental and occupy its locker.
    ///
    /// Fails with a validation error before touching the store when a
    /// field is missing, and with a conflict when the locker is not
    /// available.
    pub async fn open_rental(&self, request: OpenRentalRequest) -> AppResult<Rental> {
        validate_request(&request)?;

        let data_inicio = parse_timestamp(
            "data_inicio",
            &present("data_inicio", request.data_inicio)?,
        )?;
        let data_fim = parse_timestamp(
            "data_fim_prevista",
            &present("data_fim_prevista", request.data_fim_prevista)?,
        )?;
        if data_fim <= data_inicio {
            return Err(CoreError::Validation(
                "data_fim_prevista must be after data_inicio".to_string(),
            )
            .into());
        }

        let input = CreateRental {
            usuario_id: present("usuario_id", request.usuario_id)?,
            armario_id: present("armario_id", request.armario_id)?,
            data_inicio,
            data_fim,
        };

        match self.store.open_rental(&input).await? {
            Some(rental) => Ok(rental),
            None => Err(CoreError::Conflict(format!(
                "Locker {} is not available for rental",
                input.armario_id
            ))
            .into()),
        }
    }

    /// Close the active rental of a locker, fining late returns.
    pub async fn close_rental(&self, request: CloseRentalRequest) -> AppResult<ClosedRental> {
        validate_request(&request)?;

        let locker_code = present("cod_armario", request.cod_armario)?;
        let actual_end = parse_timestamp(
            "data_fim_real",
            &present("data_fim_real", request.data_fim_real)?,
        )?;

        match self.store.close_rental(&locker_code, actual_end).await? {
            Some(closed) => Ok(closed),
            None => {
                tracing::warn!(cod_armario = %locker_code, "No active rental to close");
                Err(CoreError::NotFound {
                    entity: "active rental for locker",
                    key: locker_code,
                }
                .into())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Payments
    // -----------------------------------------------------------------------

    /// Record a settled payment attributed to a user and a target kind.
    pub async fn record_payment(&self, request: RecordPaymentRequest) -> AppResult<Payment> {
        validate_request(&request)?;

        let input = CreatePayment {
            usuario_id: present("usuario_id", request.usuario_id)?,
            valor: require_positive("valor", present("valor", request.valor)?)?,
            data: parse_timestamp(
                "data_pagamento",
                &present("data_pagamento", request.data_pagamento)?,
            )?,
            status: PaymentStatus::Completed,
            metodo: Some(present("metodo", request.metodo)?.parse::<PaymentMethod>()?),
            alvo: present("alvo", request.alvo)?.parse::<PaymentTarget>()?,
        };

        let payment = self.store.record_payment(&input).await?;
        tracing::info!(
            pagamento_id = payment.id,
            usuario_id = payment.usuario_id,
            valor = %payment.valor,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub async fn list_payments(&self) -> AppResult<Vec<PaymentListing>> {
        let payments = self.store.list_payments().await?;
        tracing::debug!(count = payments.len(), "Listed payments");
        Ok(payments)
    }

    /// Open debt per user, largest first.
    pub async fn list_debtors(&self) -> AppResult<Vec<Debtor>> {
        let debtors = self.store.list_debtors().await?;
        tracing::debug!(count = debtors.len(), "Built debtor report");
        Ok(debtors)
    }

    // -----------------------------------------------------------------------
    // Reference listings
    // -----------------------------------------------------------------------

    pub async fn list_beaches(&self) -> AppResult<Vec<Beach>> {
        Ok(self.store.list_beaches().await?)
    }

    pub async fn list_occupied_lockers(&self) -> AppResult<Vec<OccupiedLocker>> {
        Ok(self.store.list_occupied_lockers().await?)
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.store.list_users().await?)
    }

    /// Whether the store answers a round-trip. Failures are logged, not raised.
    pub async fn database_reachable(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Database unreachable");
                false
            }
        }
    }
}
