// SPDX-License-Identifier: MPL-2.0
//! Account domain types.
//!
//! Value objects for user accounts. Validation happens at construction so
//! the rest of the application only ever handles well-formed values.

use crate::error::AccountError;
use std::fmt;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum display name length accepted on the profile form.
pub const MAX_DISPLAY_NAME_LEN: usize = 64;

/// A validated username.
///
/// Usernames are 3 to 32 characters from `[A-Za-z0-9._-]`. Comparison is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parses and validates a username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidUsername`] when the input is too
    /// short, too long, or contains characters outside `[A-Za-z0-9._-]`.
    pub fn parse(input: &str) -> Result<Self, AccountError> {
        let trimmed = input.trim();
        if trimmed.len() < 3 || trimmed.len() > 32 {
            return Err(AccountError::InvalidUsername);
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(AccountError::InvalidUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated email address.
///
/// Validation is intentionally shallow: one `@` with a non-empty local
/// part and a domain containing a dot. Deliverability is out of scope for
/// a local profile store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Parses and validates an email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidEmail`] when the shape is wrong.
    pub fn parse(input: &str) -> Result<Self, AccountError> {
        let trimmed = input.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AccountError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() {
            return Err(AccountError::InvalidEmail);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(AccountError::InvalidEmail);
        }
        if trimmed.contains(char::is_whitespace) {
            return Err(AccountError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes and validates a display name from the profile form.
///
/// The input is trimmed; an empty result means "no display name" and
/// yields `None` rather than an error.
///
/// # Errors
///
/// Returns [`AccountError::InvalidDisplayName`] when the trimmed name is
/// longer than [`MAX_DISPLAY_NAME_LEN`] characters.
pub fn parse_display_name(input: &str) -> Result<Option<String>, AccountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(AccountError::InvalidDisplayName);
    }
    Ok(Some(trimmed.to_owned()))
}

/// Checks a candidate password against the minimum length rule.
///
/// # Errors
///
/// Returns [`AccountError::WeakPassword`] when the password is shorter
/// than [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword);
    }
    Ok(())
}
