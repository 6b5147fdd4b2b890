//! Identity store: session slot and registered-account registry.
//!
//! # Responsibility
//! - Own the single persisted current-identity slot.
//! - Validate email logins against the append-only account list.
//! - Synthesize canned identities for the simulated OAuth providers.
//!
//! # Invariants
//! - Email uniqueness is enforced at registration time only; the storage
//!   layer itself enforces nothing.
//! - Login never touches the registered list; registration only appends.
//! - Every successful login/registration replaces the current identity
//!   wholesale with a fresh session id.

use crate::model::identity::{Identity, Provider, RegisteredAccount};
use crate::storage::KvStore;
use crate::store::{
    read_blob, write_blob, StoreError, StoreResult, CURRENT_IDENTITY_KEY, REGISTERED_ACCOUNTS_KEY,
};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Authentication failures. All are synchronous and recoverable; the
/// `Display` text is the user-facing message, kept separate from the kind so
/// callers can match without string comparison.
#[derive(Debug)]
pub enum AuthError {
    /// No account is registered under the given email.
    AccountNotFound,
    /// The account exists but the password does not match exactly.
    InvalidCredential,
    /// Registration attempted with an email that is already taken.
    AlreadyExists,
    /// The provider has no simulated login (only OAuth-style providers do).
    NotSimulatedProvider(Provider),
    /// Underlying store failure.
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountNotFound => write!(f, "no account is registered with this email"),
            Self::InvalidCredential => write!(f, "incorrect password"),
            Self::AlreadyExists => write!(f, "an account with this email already exists"),
            Self::NotSimulatedProvider(provider) => {
                write!(f, "provider `{}` has no simulated login", provider.as_str())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Store for the current-identity slot and the registered-account list.
///
/// Borrows an injected `KvStore`; there is no ambient global session state,
/// so tests construct isolated stores freely.
pub struct IdentityStore<'kv> {
    kv: &'kv KvStore,
}

impl<'kv> IdentityStore<'kv> {
    pub fn new(kv: &'kv KvStore) -> Self {
        Self { kv }
    }

    /// Returns the persisted current identity, or `None` when no session is
    /// active. Pure read, no side effect.
    pub fn current(&self) -> StoreResult<Option<Identity>> {
        read_blob(self.kv, CURRENT_IDENTITY_KEY)
    }

    /// Persists `identity` as current, or clears the slot on `None`.
    ///
    /// No validation is performed; callers may persist any well-formed
    /// identity.
    pub fn set_current(&self, identity: Option<&Identity>) -> StoreResult<()> {
        match identity {
            Some(identity) => write_blob(self.kv, CURRENT_IDENTITY_KEY, identity),
            None => {
                self.kv.remove(CURRENT_IDENTITY_KEY)?;
                Ok(())
            }
        }
    }

    /// Validates an email/password pair against the registered accounts and
    /// starts a session on success.
    ///
    /// The lookup is case-insensitive; the password compare is exact. The
    /// returned identity carries a fresh session id, the `Email` provider
    /// tag, and the name/email/creation timestamp as registered (email case
    /// preserved). Only the current-identity slot is written.
    pub fn login_with_email(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let accounts = self.registered_accounts()?;
        let Some(account) = find_account(&accounts, email) else {
            warn!("event=login module=identity_store status=error error_code=account_not_found");
            return Err(AuthError::AccountNotFound);
        };

        if account.password != password {
            warn!("event=login module=identity_store status=error error_code=invalid_credential");
            return Err(AuthError::InvalidCredential);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            name: account.name.clone(),
            email: account.email.clone(),
            avatar: None,
            provider: Provider::Email,
            created_at: account.created_at,
        };
        self.set_current(Some(&identity))?;
        info!("event=login module=identity_store status=ok provider=email");
        Ok(identity)
    }

    /// Appends a new registered account and starts a session for it.
    ///
    /// Fails with `AlreadyExists` when an account with the same email
    /// (compared case-insensitively) is already registered. The password is
    /// stored as given; see `RegisteredAccount`.
    pub fn register_with_email(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let mut accounts = self.registered_accounts()?;
        if find_account(&accounts, email).is_some() {
            warn!("event=register module=identity_store status=error error_code=already_exists");
            return Err(AuthError::AlreadyExists);
        }

        let account = RegisteredAccount {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        accounts.push(account.clone());
        write_blob(self.kv, REGISTERED_ACCOUNTS_KEY, &accounts)?;

        let identity = Identity {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            avatar: None,
            provider: Provider::Email,
            created_at: account.created_at,
        };
        self.set_current(Some(&identity))?;
        info!("event=register module=identity_store status=ok provider=email");
        Ok(identity)
    }

    /// Starts a session for one of the simulated OAuth providers.
    ///
    /// Synthesizes the provider's canned identity (fixed name, fixed email,
    /// avatar URL derived from a fixed seed) and persists it as current. No
    /// network interaction happens; the upstream presentation layer is
    /// assumed to have obtained explicit user confirmation before calling.
    pub fn login_with_provider(&self, provider: Provider) -> Result<Identity, AuthError> {
        let Some(profile) = canned_profile(provider) else {
            return Err(AuthError::NotSimulatedProvider(provider));
        };

        let identity = Identity {
            id: Uuid::new_v4(),
            name: profile.name.to_string(),
            email: profile.email.to_string(),
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                profile.avatar_seed
            )),
            provider,
            created_at: Utc::now(),
        };
        self.set_current(Some(&identity))?;
        info!(
            "event=login module=identity_store status=ok provider={}",
            provider.as_str()
        );
        Ok(identity)
    }

    /// Clears the current-identity slot.
    ///
    /// Refreshing any presentation state tied to the session is a caller
    /// concern.
    pub fn logout(&self) -> StoreResult<()> {
        self.set_current(None)?;
        info!("event=logout module=identity_store status=ok");
        Ok(())
    }

    fn registered_accounts(&self) -> StoreResult<Vec<RegisteredAccount>> {
        Ok(read_blob(self.kv, REGISTERED_ACCOUNTS_KEY)?.unwrap_or_default())
    }
}

struct CannedProfile {
    name: &'static str,
    email: &'static str,
    avatar_seed: &'static str,
}

/// Fixed profiles for the simulated providers. The X profile keeps the
/// `twitter` avatar seed its upstream service was originally registered
/// under.
fn canned_profile(provider: Provider) -> Option<CannedProfile> {
    match provider {
        Provider::Google => Some(CannedProfile {
            name: "Google User",
            email: "user@gmail.com",
            avatar_seed: "google",
        }),
        Provider::Microsoft => Some(CannedProfile {
            name: "Microsoft User",
            email: "user@outlook.com",
            avatar_seed: "microsoft",
        }),
        Provider::X => Some(CannedProfile {
            name: "X User",
            email: "user@x.com",
            avatar_seed: "twitter",
        }),
        Provider::Email => None,
    }
}

fn find_account<'a>(
    accounts: &'a [RegisteredAccount],
    email: &str,
) -> Option<&'a RegisteredAccount> {
    let needle = email.to_lowercase();
    accounts
        .iter()
        .find(|account| account.email.to_lowercase() == needle)
}
