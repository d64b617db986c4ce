//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or any `PgExecutor`, when the statement also runs
//! inside a caller's transaction) as the first argument.

pub mod beach_repo;
pub mod fine_repo;
pub mod locker_repo;
pub mod payment_repo;
pub mod rental_repo;
pub mod report_repo;
pub mod user_repo;

pub use beach_repo::BeachRepo;
pub use fine_repo::FineRepo;
pub use locker_repo::LockerRepo;
pub use payment_repo::PaymentRepo;
pub use rental_repo::RentalRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
