//! Request handlers.
//!
//! Each submodule provides thin async handlers for one resource. Handlers
//! extract the request, delegate to the rental lifecycle service held in
//! [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod beaches;
pub mod health;
pub mod lockers;
pub mod payments;
pub mod rentals;
pub mod reports;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Unwrap a JSON body, reporting malformed payloads as 400.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
