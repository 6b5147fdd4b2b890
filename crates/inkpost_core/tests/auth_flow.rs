use inkpost_core::storage::open_store_in_memory;
use inkpost_core::store::REGISTERED_ACCOUNTS_KEY;
use inkpost_core::{AuthError, IdentityStore, Provider, RegisteredAccount};

#[test]
fn register_creates_account_and_signs_in() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    let identity = store
        .register_with_email("Ada", "ada@x.com", "Passw0rd")
        .unwrap();
    assert_eq!(identity.name, "Ada");
    assert_eq!(identity.email, "ada@x.com");
    assert_eq!(identity.provider, Provider::Email);
    assert!(identity.avatar.is_none());

    let current = store.current().unwrap().unwrap();
    assert_eq!(current, identity);
}

#[test]
fn register_then_login_round_trip() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store
        .register_with_email("Ada", "ada@x.com", "Passw0rd")
        .unwrap();
    store.logout().unwrap();
    assert!(store.current().unwrap().is_none());

    let identity = store.login_with_email("ada@x.com", "Passw0rd").unwrap();
    assert_eq!(identity.email, "ada@x.com");
    assert_eq!(identity.provider, Provider::Email);

    let err = store.login_with_email("ada@x.com", "wrong1").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredential));
}

#[test]
fn login_lookup_is_case_insensitive_and_preserves_registered_case() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store
        .register_with_email("Ada", "Ada@X.com", "Passw0rd")
        .unwrap();

    let identity = store.login_with_email("ada@x.com", "Passw0rd").unwrap();
    assert_eq!(identity.email, "Ada@X.com");
}

#[test]
fn duplicate_registration_fails_for_any_case_variant() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store
        .register_with_email("Ada", "ada@x.com", "Passw0rd")
        .unwrap();
    let err = store
        .register_with_email("Ada Again", "ADA@X.COM", "other")
        .unwrap_err();
    assert!(matches!(err, AuthError::AlreadyExists));
}

#[test]
fn login_with_unregistered_email_fails_not_found() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    let err = store.login_with_email("ghost@x.com", "whatever").unwrap_err();
    assert!(matches!(err, AuthError::AccountNotFound));
}

#[test]
fn login_does_not_touch_the_registered_list() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store
        .register_with_email("Ada", "ada@x.com", "Passw0rd")
        .unwrap();
    let before = kv.get(REGISTERED_ACCOUNTS_KEY).unwrap().unwrap();

    store.login_with_email("ada@x.com", "Passw0rd").unwrap();
    let after = kv.get(REGISTERED_ACCOUNTS_KEY).unwrap().unwrap();
    assert_eq!(before, after);

    let accounts: Vec<RegisteredAccount> = serde_json::from_str(&after).unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].password, "Passw0rd");
}

#[test]
fn each_login_issues_a_fresh_session_id() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store
        .register_with_email("Ada", "ada@x.com", "Passw0rd")
        .unwrap();
    let first = store.login_with_email("ada@x.com", "Passw0rd").unwrap();
    let second = store.login_with_email("ada@x.com", "Passw0rd").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
}

#[test]
fn provider_login_synthesizes_the_canned_identity() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    let google = store.login_with_provider(Provider::Google).unwrap();
    assert_eq!(google.name, "Google User");
    assert_eq!(google.email, "user@gmail.com");
    assert_eq!(google.provider, Provider::Google);
    assert!(google.avatar.as_deref().unwrap().ends_with("seed=google"));
    assert_eq!(store.current().unwrap().unwrap(), google);

    let x = store.login_with_provider(Provider::X).unwrap();
    assert_eq!(x.name, "X User");
    assert_eq!(x.email, "user@x.com");
    assert!(x.avatar.as_deref().unwrap().ends_with("seed=twitter"));
}

#[test]
fn provider_login_rejects_the_email_provider() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    let err = store.login_with_provider(Provider::Email).unwrap_err();
    assert!(matches!(err, AuthError::NotSimulatedProvider(Provider::Email)));
}

#[test]
fn logout_clears_the_current_identity_slot() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    store.login_with_provider(Provider::Microsoft).unwrap();
    assert!(store.current().unwrap().is_some());

    store.logout().unwrap();
    assert!(store.current().unwrap().is_none());

    // Logging out twice is a no-op, not an error.
    store.logout().unwrap();
}

#[test]
fn set_current_accepts_any_well_formed_identity() {
    let kv = open_store_in_memory().unwrap();
    let store = IdentityStore::new(&kv);

    let mut identity = store.login_with_provider(Provider::Google).unwrap();
    identity.name = "Renamed".to_string();
    store.set_current(Some(&identity)).unwrap();

    assert_eq!(store.current().unwrap().unwrap().name, "Renamed");
}
