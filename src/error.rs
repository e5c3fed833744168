// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Account(AccountError),
}

/// Specific error types for account operations.
/// Used to provide user-friendly messages on the auth and profile forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Username does not satisfy the naming rules (length, characters).
    InvalidUsername,

    /// Email address is structurally invalid.
    InvalidEmail,

    /// Display name exceeds the maximum length.
    InvalidDisplayName,

    /// Password is shorter than the minimum length.
    WeakPassword,

    /// A different account already uses this username.
    UsernameTaken,

    /// No account exists for this username.
    UnknownUser,

    /// Password does not match the stored digest.
    WrongPassword,

    /// The account registry file could not be read or written.
    Storage(String),
}

impl AccountError {
    /// Returns the user-facing message for this error, shown next to the
    /// offending form field or as an error toast.
    pub fn message(&self) -> &'static str {
        match self {
            AccountError::InvalidUsername => {
                "Usernames are 3-32 characters: letters, digits, '.', '-' or '_'"
            }
            AccountError::InvalidEmail => "Enter a valid email address",
            AccountError::InvalidDisplayName => "Display names are at most 64 characters",
            AccountError::WeakPassword => "Passwords need at least 8 characters",
            AccountError::UsernameTaken => "That username is already taken",
            AccountError::UnknownUser => "No account with that username",
            AccountError::WrongPassword => "Wrong password",
            AccountError::Storage(_) => "Could not access the account registry",
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::Storage(msg) => write!(f, "Account storage error: {}", msg),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Account(e) => write!(f, "Account Error: {}", e),
        }
    }
}

impl From<AccountError> for Error {
    fn from(err: AccountError) -> Self {
        Error::Account(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn account_error_wraps_into_error() {
        let err: Error = AccountError::UnknownUser.into();
        assert!(matches!(err, Error::Account(AccountError::UnknownUser)));
    }

    #[test]
    fn account_error_messages_are_nonempty() {
        let variants = [
            AccountError::InvalidUsername,
            AccountError::InvalidEmail,
            AccountError::InvalidDisplayName,
            AccountError::WeakPassword,
            AccountError::UsernameTaken,
            AccountError::UnknownUser,
            AccountError::WrongPassword,
            AccountError::Storage("x".into()),
        ];
        for variant in variants {
            assert!(!variant.message().is_empty());
        }
    }

    #[test]
    fn storage_error_display_includes_detail() {
        let err = AccountError::Storage("permission denied".into());
        assert!(format!("{}", err).contains("permission denied"));
    }
}
