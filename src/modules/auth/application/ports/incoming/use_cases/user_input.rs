use email_address::EmailAddress;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserInputError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// Trimmed, lower-cased email.
pub(crate) fn normalize_email(email: &str) -> Result<String, UserInputError> {
    let email = email.trim();
    if email.is_empty() || !EmailAddress::is_valid(email) {
        return Err(UserInputError::InvalidEmail);
    }
    Ok(email.to_lowercase())
}

pub(crate) fn normalize_name(name: &str) -> Result<String, UserInputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UserInputError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserInputError::NameTooLong);
    }
    Ok(name.to_string())
}

pub(crate) fn check_password(password: &str) -> Result<(), UserInputError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserInputError::PasswordTooShort);
    }
    Ok(())
}
