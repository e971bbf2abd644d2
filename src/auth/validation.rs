//! Form-layer validation for CampusPass.
//!
//! Sign-in and registration forms are validated entirely before the
//! auth manager is invoked; none of these errors ever reach it.

use thiserror::Error;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Form validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields are empty.
    #[error("please fill all required fields")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    /// Email format is invalid.
    #[error("invalid email format")]
    EmailInvalidFormat,

    /// Student registration is missing enrollment details.
    #[error("please fill all student details")]
    MissingStudentDetails,

    /// Teacher registration is missing staff details.
    #[error("please fill all teacher details")]
    MissingTeacherDetails,
}

/// Validate a sign-in form.
///
/// Both fields must be non-empty; everything else is the auth manager's
/// concern.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok(())
}

/// Validate an email address.
///
/// Basic structural check: one `@`, non-empty local part, dotted
/// domain, no whitespace. Deliberately simple; the directory is the
/// actual authority on known addresses.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(FormError::EmailInvalidFormat);
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() {
        return Err(FormError::EmailInvalidFormat);
    }

    if !domain.contains('.') {
        return Err(FormError::EmailInvalidFormat);
    }

    if domain.split('.').any(|p| p.is_empty()) {
        return Err(FormError::EmailInvalidFormat);
    }

    if email.chars().any(|c| c.is_whitespace()) {
        return Err(FormError::EmailInvalidFormat);
    }

    Ok(())
}

/// Validate the shared fields of a registration form.
///
/// Checks in the order the form surfaces them: required fields,
/// password confirmation, password length, email shape.
pub fn validate_registration_form(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(FormError::MissingFields);
    }

    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(FormError::PasswordTooShort);
    }

    validate_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_form_valid() {
        assert!(validate_login_form("student@gbu.ac.in", "anything").is_ok());
    }

    #[test]
    fn test_validate_login_form_missing_fields() {
        assert_eq!(
            validate_login_form("", "password"),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            validate_login_form("student@gbu.ac.in", ""),
            Err(FormError::MissingFields)
        );
        assert_eq!(validate_login_form("", ""), Err(FormError::MissingFields));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name@gbu.ac.in").is_ok());
        assert!(validate_email("user+tag@example.co.jp").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email("invalid"), Err(FormError::EmailInvalidFormat));
        assert_eq!(
            validate_email("@example.com"),
            Err(FormError::EmailInvalidFormat)
        );
        assert_eq!(validate_email("user@"), Err(FormError::EmailInvalidFormat));
        assert_eq!(
            validate_email("user@example"),
            Err(FormError::EmailInvalidFormat)
        );
        assert_eq!(
            validate_email("user@@example.com"),
            Err(FormError::EmailInvalidFormat)
        );
        assert_eq!(
            validate_email("user @example.com"),
            Err(FormError::EmailInvalidFormat)
        );
    }

    #[test]
    fn test_validate_registration_form_valid() {
        assert!(
            validate_registration_form("Rahul", "rahul@gbu.ac.in", "secret1", "secret1").is_ok()
        );
    }

    #[test]
    fn test_validate_registration_form_missing_fields() {
        assert_eq!(
            validate_registration_form("", "a@b.com", "secret1", "secret1"),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            validate_registration_form("Rahul", "a@b.com", "secret1", ""),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn test_validate_registration_form_password_mismatch() {
        assert_eq!(
            validate_registration_form("Rahul", "a@b.com", "secret1", "secret2"),
            Err(FormError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_registration_form_password_too_short() {
        assert_eq!(
            validate_registration_form("Rahul", "a@b.com", "short", "short"),
            Err(FormError::PasswordTooShort)
        );
        // Exactly at the minimum passes
        assert!(validate_registration_form("Rahul", "a@b.com", "sixsix", "sixsix").is_ok());
    }

    #[test]
    fn test_validate_registration_form_order() {
        // Mismatch is reported before length when both apply
        assert_eq!(
            validate_registration_form("Rahul", "a@b.com", "abc", "xyz"),
            Err(FormError::PasswordMismatch)
        );
        // Email shape is checked last
        assert_eq!(
            validate_registration_form("Rahul", "not-an-email", "secret1", "secret1"),
            Err(FormError::EmailInvalidFormat)
        );
    }

    #[test]
    fn test_form_error_display() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "please fill all required fields"
        );
        assert!(FormError::PasswordTooShort.to_string().contains("6"));
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "passwords do not match"
        );
    }
}
