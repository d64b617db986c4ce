//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row and, where rows are inserted, a create DTO.

pub mod beach;
pub mod fine;
pub mod locker;
pub mod payment;
pub mod rental;
pub mod report;
pub mod user;
