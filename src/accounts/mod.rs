// SPDX-License-Identifier: MPL-2.0
//! Local account store.
//!
//! Accounts gate profiles on a shared machine, nothing more. Passwords
//! are stored as salted blake3 digests in `accounts.toml` under the app
//! data directory. This is a convenience lock, not a security boundary:
//! anyone with filesystem access can delete the store.
//!
//! A store created without a path (`AccountStore::in_memory`) keeps
//! everything in memory, which the tests and the sign-in flow before a
//! data directory is resolved both rely on.

use crate::domain::account::{parse_display_name, validate_password, Email, Username};
use crate::error::AccountError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
pub const ACCOUNTS_FILE: &str = "accounts.toml";

/// Salt length in bytes, hex-encoded in the store.
const SALT_LEN: usize = 16;

/// A registered account as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRecord {
    /// Contact email, shown on the profile screen.
    pub email: String,
    /// Optional display name, editable on the profile screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Hex-encoded random salt.
    pub salt: String,
    /// Hex-encoded blake3 digest of salt + password.
    pub digest: String,
}

/// On-disk shape of `accounts.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    accounts: BTreeMap<String, AccountRecord>,
}

/// A signed-in user's public profile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: Username,
    pub email: Email,
    pub display_name: Option<String>,
}

impl Profile {
    /// Returns the name to show in the UI: the display name when set,
    /// the username otherwise.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.username.as_str())
    }
}

/// Local account store backed by a TOML file.
#[derive(Debug)]
pub struct AccountStore {
    accounts: BTreeMap<String, AccountRecord>,
    path: Option<PathBuf>,
}

impl AccountStore {
    /// Creates a store that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            accounts: BTreeMap::new(),
            path: None,
        }
    }

    /// Opens the store at `dir/accounts.toml`, creating an empty one if
    /// the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Storage`] when the file exists but cannot
    /// be read or parsed.
    pub fn open(dir: &Path) -> Result<Self, AccountError> {
        let path = dir.join(ACCOUNTS_FILE);
        if !path.exists() {
            return Ok(Self {
                accounts: BTreeMap::new(),
                path: Some(path),
            });
        }
        let content =
            fs::read_to_string(&path).map_err(|e| AccountError::Storage(e.to_string()))?;
        let file: StoreFile =
            toml::from_str(&content).map_err(|e| AccountError::Storage(e.to_string()))?;
        Ok(Self {
            accounts: file.accounts,
            path: Some(path),
        })
    }

    /// Registers a new account and persists the store.
    ///
    /// # Errors
    ///
    /// Validation errors from [`Username::parse`], [`Email::parse`] and
    /// [`validate_password`] pass through; a duplicate name yields
    /// [`AccountError::UsernameTaken`].
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Profile, AccountError> {
        let username = Username::parse(username)?;
        let email = Email::parse(email)?;
        validate_password(password)?;

        if self.accounts.contains_key(username.as_str()) {
            return Err(AccountError::UsernameTaken);
        }

        let salt = random_salt();
        let digest = password_digest(&salt, password);

        // Write to disk before committing to memory, so a failed persist
        // leaves the store exactly as it was.
        let mut accounts = self.accounts.clone();
        accounts.insert(
            username.as_str().to_owned(),
            AccountRecord {
                email: email.as_str().to_owned(),
                display_name: None,
                salt,
                digest,
            },
        );
        self.persist(&accounts)?;
        self.accounts = accounts;

        Ok(Profile {
            username,
            email,
            display_name: None,
        })
    }

    /// Updates the email and display name of an existing account and
    /// persists the store.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::UnknownUser`] for an unregistered name;
    /// validation errors from [`Email::parse`] and the display name rule
    /// pass through.
    pub fn update_profile(
        &mut self,
        username: &str,
        email: &str,
        display_name: &str,
    ) -> Result<Profile, AccountError> {
        let username = Username::parse(username).map_err(|_| AccountError::UnknownUser)?;
        let email = Email::parse(email)?;
        let display_name = parse_display_name(display_name)?;

        let mut accounts = self.accounts.clone();
        let record = accounts
            .get_mut(username.as_str())
            .ok_or(AccountError::UnknownUser)?;
        record.email = email.as_str().to_owned();
        record.display_name = display_name.clone();
        self.persist(&accounts)?;
        self.accounts = accounts;

        Ok(Profile {
            username,
            email,
            display_name,
        })
    }

    /// Checks credentials and returns the profile on success.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::UnknownUser`] or
    /// [`AccountError::WrongPassword`]; a record holding an unparseable
    /// email surfaces as [`AccountError::Storage`].
    pub fn sign_in(&self, username: &str, password: &str) -> Result<Profile, AccountError> {
        let username = Username::parse(username).map_err(|_| AccountError::UnknownUser)?;
        let record = self
            .accounts
            .get(username.as_str())
            .ok_or(AccountError::UnknownUser)?;

        if password_digest(&record.salt, password) != record.digest {
            return Err(AccountError::WrongPassword);
        }

        let email = Email::parse(&record.email)
            .map_err(|_| AccountError::Storage("stored email is malformed".to_string()))?;
        Ok(Profile {
            username,
            email,
            display_name: record.display_name.clone(),
        })
    }

    /// Returns whether a username is already registered.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Returns the number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns whether no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn persist(&self, accounts: &BTreeMap<String, AccountRecord>) -> Result<(), AccountError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AccountError::Storage(e.to_string()))?;
        }
        let file = StoreFile {
            accounts: accounts.clone(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| AccountError::Storage(e.to_string()))?;
        fs::write(path, content).map_err(|e| AccountError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// Produces a random hex salt.
fn random_salt() -> String {
    // Process id and wall-clock nanos, not cryptographically strong
    // randomness. Matches the local-profile threat model above.
    let mut hasher = blake3::Hasher::new();
    hasher.update(&std::process::id().to_le_bytes());
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    hasher.update(&now.as_nanos().to_le_bytes());
    let hash = hasher.finalize();
    hex_encode(&hash.as_bytes()[..SALT_LEN])
}

/// Digest of salt + password, hex-encoded.
fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex_encode(hasher.finalize().as_bytes())
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn register_then_sign_in() {
        let mut store = AccountStore::in_memory();
        let profile = store
            .register("ada", "ada@example.com", "correct-horse")
            .expect("registration should succeed");
        assert_eq!(profile.username.as_str(), "ada");

        let signed_in = store.sign_in("ada", "correct-horse").expect("sign in");
        assert_eq!(signed_in.email.as_str(), "ada@example.com");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut store = AccountStore::in_memory();
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        assert_eq!(
            store.sign_in("ada", "battery-staple").unwrap_err(),
            AccountError::WrongPassword
        );
    }

    #[test]
    fn unknown_user_is_rejected() {
        let store = AccountStore::in_memory();
        assert_eq!(
            store.sign_in("nobody", "whatever1").unwrap_err(),
            AccountError::UnknownUser
        );
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut store = AccountStore::in_memory();
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        assert_eq!(
            store
                .register("ada", "other@example.com", "another-pass")
                .unwrap_err(),
            AccountError::UsernameTaken
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn validation_errors_pass_through() {
        let mut store = AccountStore::in_memory();
        assert_eq!(
            store.register("x", "x@example.com", "longenough").unwrap_err(),
            AccountError::InvalidUsername
        );
        assert_eq!(
            store.register("valid", "not-an-email", "longenough").unwrap_err(),
            AccountError::InvalidEmail
        );
        assert_eq!(
            store.register("valid", "v@example.com", "short").unwrap_err(),
            AccountError::WeakPassword
        );
        assert!(store.is_empty());
    }

    #[test]
    fn update_profile_changes_email_and_display_name() {
        let mut store = AccountStore::in_memory();
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        let updated = store
            .update_profile("ada", "lovelace@example.com", "Ada Lovelace")
            .expect("update should succeed");
        assert_eq!(updated.email.as_str(), "lovelace@example.com");
        assert_eq!(updated.display_label(), "Ada Lovelace");

        // Changes show up on the next sign-in too
        let profile = store.sign_in("ada", "correct-horse").unwrap();
        assert_eq!(profile.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.email.as_str(), "lovelace@example.com");
    }

    #[test]
    fn update_profile_with_blank_display_name_clears_it() {
        let mut store = AccountStore::in_memory();
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();
        store
            .update_profile("ada", "ada@example.com", "Ada")
            .unwrap();

        let updated = store
            .update_profile("ada", "ada@example.com", "   ")
            .unwrap();
        assert_eq!(updated.display_name, None);
        assert_eq!(updated.display_label(), "ada");
    }

    #[test]
    fn update_profile_rejects_unknown_user_and_bad_email() {
        let mut store = AccountStore::in_memory();
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        assert_eq!(
            store
                .update_profile("nobody", "a@example.com", "")
                .unwrap_err(),
            AccountError::UnknownUser
        );
        assert_eq!(
            store.update_profile("ada", "not-an-email", "").unwrap_err(),
            AccountError::InvalidEmail
        );
    }

    #[test]
    fn passwords_are_not_stored_in_clear() {
        let dir = tempdir().expect("create temp dir");
        let mut store = AccountStore::open(dir.path()).expect("open store");
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        let content = fs::read_to_string(dir.path().join(ACCOUNTS_FILE)).expect("read store");
        assert!(!content.contains("correct-horse"));
        assert!(content.contains("ada@example.com"));
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempdir().expect("create temp dir");
        {
            let mut store = AccountStore::open(dir.path()).expect("open store");
            store
                .register("ada", "ada@example.com", "correct-horse")
                .unwrap();
        }

        let reopened = AccountStore::open(dir.path()).expect("reopen store");
        assert!(reopened.contains("ada"));
        assert!(reopened.sign_in("ada", "correct-horse").is_ok());
    }

    #[test]
    fn open_missing_directory_yields_empty_store() {
        let dir = tempdir().expect("create temp dir");
        let store = AccountStore::open(&dir.path().join("nested")).expect("open store");
        assert!(store.is_empty());
    }

    #[test]
    fn failed_persist_does_not_commit_a_registration() {
        let dir = tempdir().expect("create temp dir");
        // A plain file where the store directory should be makes every
        // persist fail with a Storage error.
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, "not a directory").unwrap();

        let mut store = AccountStore::open(&blocked).expect("open store");
        assert!(matches!(
            store.register("ada", "ada@example.com", "correct-horse"),
            Err(AccountError::Storage(_))
        ));

        // The account never made it into memory, so a retry reports the
        // same storage problem rather than a taken username.
        assert!(!store.contains("ada"));
        assert!(matches!(
            store.register("ada", "ada@example.com", "correct-horse"),
            Err(AccountError::Storage(_))
        ));
    }

    #[test]
    fn failed_persist_does_not_commit_a_profile_update() {
        let dir = tempdir().expect("create temp dir");
        let mut store = AccountStore::open(dir.path()).expect("open store");
        store
            .register("ada", "ada@example.com", "correct-horse")
            .unwrap();

        // Replace the store file with a directory so the next write fails.
        let store_path = dir.path().join(ACCOUNTS_FILE);
        fs::remove_file(&store_path).unwrap();
        fs::create_dir(&store_path).unwrap();

        assert!(matches!(
            store.update_profile("ada", "new@example.com", "Ada"),
            Err(AccountError::Storage(_))
        ));

        let profile = store.sign_in("ada", "correct-horse").unwrap();
        assert_eq!(profile.email.as_str(), "ada@example.com");
        assert_eq!(profile.display_name, None);
    }

    #[test]
    fn corrupted_store_reports_storage_error() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(ACCOUNTS_FILE), "not = valid = toml").unwrap();

        match AccountStore::open(dir.path()) {
            Err(AccountError::Storage(_)) => {}
            other => panic!("expected Storage error, got {other:?}"),
        }
    }

    #[test]
    fn digest_depends_on_salt() {
        let a = password_digest("salt-a", "password1");
        let b = password_digest("salt-b", "password1");
        assert_ne!(a, b);
    }
}
