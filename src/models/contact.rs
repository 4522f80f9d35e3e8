use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{
    collect_field_errors, validate_email, validate_message, validate_name, validate_phone,
    FieldErrors,
};

/// General-inquiry submission, wire body of `POST /contact`.
///
/// Shares the name/email/phone vocabulary with the booking form; phone
/// is optional here and only checked when provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom(function = validate_name))]
    pub name: String,
    #[validate(custom(function = validate_email))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(custom(function = validate_message))]
    pub message: String,
}

impl ContactMessage {
    /// Field-keyed validation outcome; empty means submittable.
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => collect_field_errors(&errors),
        }
    }
}
