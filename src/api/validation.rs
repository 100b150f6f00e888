use crate::api::error::ApiError;
use crate::constants::limits::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

pub fn validate_id(id: i32) -> Result<(), ApiError> {
    if id <= 0 {
        return Err(ApiError::validation("Invalid id"));
    }
    Ok(())
}

/// Required text field; whitespace-only counts as missing.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.trim().len() < MIN_USERNAME_LEN {
        return Err(ApiError::validation(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
