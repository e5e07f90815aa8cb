//! Validation logic for the sign-in and sign-up forms.
//!
//! Every field is checked before a request is sent; the forms show the
//! error next to the offending input.

use shared::models::{SignInRequest, SignUpRequest};

/// Minimum length of a new account's password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    PasswordTooShort,
}

impl ValidationError {
    /// Translation key of the message shown under the field.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidEmail => "validation.invalid_email",
            Self::PasswordTooShort => "validation.password_too_short",
        }
    }
}

/// Per-field outcome of validating a form.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FormErrors {
    /// Error of the name field.
    pub name: Option<ValidationError>,
    /// Error of the email field.
    pub email: Option<ValidationError>,
    /// Error of the password field.
    pub password: Option<ValidationError>,
}

impl FormErrors {
    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Validates a display name: it must not be blank.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates the password typed at sign-in: any non-empty value is sent.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates the password of a new account.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates the sign-in form.
///
/// # Errors
/// Returns the per-field errors when any field fails.
pub fn validate_sign_in(request: &SignInRequest) -> Result<(), FormErrors> {
    let errors = FormErrors {
        name: None,
        email: validate_email(&request.email).err(),
        password: validate_password(&request.password).err(),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates the sign-up form.
///
/// # Errors
/// Returns the per-field errors when any field fails.
pub fn validate_sign_up(request: &SignUpRequest) -> Result<(), FormErrors> {
    let errors = FormErrors {
        name: validate_name(&request.name).err(),
        email: validate_email(&request.email).err(),
        password: validate_new_password(&request.password).err(),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Roberto").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert!(validate_email("a@b").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_sign_in_password_only_needs_a_value() {
        assert!(validate_password("1").is_ok());
        assert_eq!(validate_password(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_new_password() {
        assert!(validate_new_password("123456").is_ok());
        assert_eq!(
            validate_new_password("12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_new_password(""), Err(ValidationError::Required));
        // Length counts characters, not bytes.
        assert_eq!(
            validate_new_password("\u{e7}\u{e3}\u{e7}\u{e3}\u{e7}"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_validate_sign_in_collects_field_errors() {
        let request = SignInRequest {
            email: "nobody".to_string(),
            password: String::new(),
        };
        assert_eq!(
            validate_sign_in(&request),
            Err(FormErrors {
                name: None,
                email: Some(ValidationError::InvalidEmail),
                password: Some(ValidationError::Required),
            })
        );

        let request = SignInRequest {
            email: "roberto@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(validate_sign_in(&request), Ok(()));
    }

    #[test]
    fn test_validate_sign_up() {
        let request = SignUpRequest {
            name: String::new(),
            email: "roberto@example.com".to_string(),
            password: "123".to_string(),
        };
        let errors = validate_sign_up(&request).unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));

        let request = SignUpRequest {
            name: "Roberto Morel".to_string(),
            email: "roberto@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(validate_sign_up(&request).is_ok());
    }

    #[test]
    fn test_translation_keys_are_distinct() {
        let keys = [
            ValidationError::Required.translation_key(),
            ValidationError::InvalidEmail.translation_key(),
            ValidationError::PasswordTooShort.translation_key(),
        ];
        assert!(keys.iter().all(|key| key.starts_with("validation.")));
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
    }
}
