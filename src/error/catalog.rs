//! Option catalog errors

use super::ProfileError;

/// Creates an unknown option error
pub fn unknown_option(name: impl Into<String>) -> ProfileError {
    ProfileError::UnknownOption { name: name.into() }
}

/// Creates an unknown token error
pub fn unknown_token(token: impl Into<String>, reason: impl Into<String>) -> ProfileError {
    ProfileError::UnknownToken {
        token: token.into(),
        reason: reason.into(),
    }
}

/// Creates a value type mismatch error
pub fn value_mismatch(name: impl Into<String>, expected: impl Into<String>) -> ProfileError {
    ProfileError::OptionValueMismatch {
        name: name.into(),
        expected: expected.into(),
    }
}

/// Creates an invalid catalog error
pub fn invalid(message: impl Into<String>) -> ProfileError {
    ProfileError::CatalogInvalid {
        message: message.into(),
    }
}
