mod client;
mod public;

pub use client::{ApiClient, ApiEnvelope};
pub use public::PublicApi;
