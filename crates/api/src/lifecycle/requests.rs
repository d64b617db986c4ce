//! Request bodies and query parameters accepted by the lifecycle service.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported as a 400 validation error naming the field, rather than as a
//! JSON rejection.

use rust_decimal::Decimal;
use serde::Deserialize;
use trankaki_core::types::DbId;
use validator::Validate;

/// Query parameters of `GET /armarios/disponibilidade`.
///
/// Each filter is optional; `all` means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct LockerSearchParams {
    pub praia: Option<String>,
    pub tamanho: Option<String>,
    pub status: Option<String>,
    pub inicio: Option<String>,
    pub fim: Option<String>,
}

/// Body of `POST /alugueis`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OpenRentalRequest {
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub usuario_id: Option<DbId>,
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub armario_id: Option<DbId>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub data_inicio: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub data_fim_prevista: Option<String>,
}

/// Body of `POST /alugueis/encerrar-por-codigo`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CloseRentalRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub cod_armario: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub data_fim_real: Option<String>,
}

/// Body of `POST /pagamentos`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub usuario_id: Option<DbId>,
    #[validate(required(message = "is required"))]
    pub valor: Option<Decimal>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub metodo: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub data_pagamento: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "is required")
    )]
    pub alvo: Option<String>,
}
