//! Request payloads and response projections.
//!
//! Requests validate in two passes: the `validator` field rules first, then
//! the checks that need the database. Everything is collected into
//! [`FieldErrors`] before anything is written.

pub mod activation;
pub mod credentials;
mod field_errors;
pub mod me;
pub mod membership;
pub mod user;
pub mod user_department;
pub mod user_role;

pub use field_errors::{
    DUPLICATE_EMAIL, FieldErrors, INVALID_ACTIVATION, INVALID_EMAIL, INVALID_UUID,
    NON_FIELD_ERRORS, PASSWORD_MISMATCH, REQUIRED, missing_pk,
};

use crate::error::AppError;

/// Field-rule errors from the `validator` derive, or an empty set.
pub(crate) fn field_rules<T: validator::Validate>(payload: &T) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => errors.into(),
    }
}

pub(crate) fn finish(errors: FieldErrors) -> Result<(), AppError> {
    errors.into_result().map_err(AppError::Validation)
}
