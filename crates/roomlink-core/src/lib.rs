//! Roomlink core library.
//!
//! Domain types, UUID validation, the building-API client and the
//! operation layer shared by the roomlink front-ends. Everything that
//! talks to the network goes through the [`api::BuildingApi`] trait so
//! the operations in [`ops`] stay testable without a server.

pub mod api;
pub mod error;
pub mod ops;
pub mod types;
pub mod validate;

pub use api::{ApiClient, BuildingApi};
pub use error::{ApiError, CoreError, ValidationError};
pub use ops::RegisterOutcome;
pub use types::{Device, Room};
