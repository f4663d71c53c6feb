//! Registration form checks run by the host before calling
//! [`AccountDirectory::register`](crate::api::AccountDirectory::register).
//!
//! The directory itself accepts any non-empty password; these rules belong to
//! the form.

/// Validates the password fields of a registration form.
///
/// # Examples
/// ```
/// use latchkey::forms::{validate_registration, FormError};
///
/// assert!(validate_registration("secret1", "secret1", 6).is_ok());
/// assert_eq!(
///     validate_registration("secret1", "secret2", 6),
///     Err(FormError::PasswordMismatch)
/// );
/// assert_eq!(
///     validate_registration("abc", "abc", 6),
///     Err(FormError::PasswordTooShort { min: 6 })
/// );
/// ```
pub fn validate_registration(
    password: &str,
    confirm_password: &str,
    min_length: usize,
) -> Result<(), FormError> {
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    if password.chars().count() < min_length {
        return Err(FormError::PasswordTooShort { min: min_length });
    }
    Ok(())
}

/// Error type for registration form failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Password and confirmation differ
    PasswordMismatch,
    /// Password has fewer characters than required
    PasswordTooShort { min: usize },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::PasswordMismatch => write!(f, "Passwords do not match"),
            FormError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
        }
    }
}

impl std::error::Error for FormError {}
