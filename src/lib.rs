//! Client-side workflows for the CIDCO Mitra public site: catalog
//! reading, appointment booking and contact submission against the
//! remote REST API.
//!
//! The crate is UI-agnostic. It owns the interaction contract — typed
//! models, the response envelope, validation rules and the booking
//! state machine — and leaves rendering to the embedding application.

pub mod api;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod preferences;
pub mod validation;

pub use api::{ApiClient, ApiEnvelope, PublicApi};
pub use booking::{BookingState, BookingWorkflow, SlotAvailability, SlotQuery};
pub use catalog::CatalogReader;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, BookingError};
