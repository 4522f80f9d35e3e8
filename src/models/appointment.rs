use serde::{Deserialize, Serialize};
use time::{Date, Time};
use validator::Validate;

use crate::models::wire;
use crate::validation::{validate_email, validate_name, validate_phone};

/// Wire body of `POST /appointments`.
///
/// The booking workflow builds this only after its own field-keyed
/// validation pass; the derive exists so the payload can also be
/// checked in isolation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppointmentRequest {
    pub service_id: i64,
    #[validate(custom(function = validate_name))]
    pub name: String,
    #[validate(custom(function = validate_email))]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    #[serde(with = "wire::iso_date")]
    pub appointment_date: Date,
    #[serde(with = "wire::hms_time")]
    pub appointment_time: Time,
    #[serde(default)]
    pub message: String,
}
