use inkpost_core::storage::migrations::latest_version;
use inkpost_core::storage::{open_store, open_store_in_memory, StorageError};
use rusqlite::Connection;

#[test]
fn set_get_remove_round_trip() {
    let kv = open_store_in_memory().unwrap();

    assert!(kv.get("missing").unwrap().is_none());

    kv.set("greeting", "hello").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("hello"));

    kv.set("greeting", "goodbye").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("goodbye"));

    assert!(kv.remove("greeting").unwrap());
    assert!(kv.get("greeting").unwrap().is_none());
    assert!(!kv.remove("greeting").unwrap());
}

#[test]
fn keys_are_independent() {
    let kv = open_store_in_memory().unwrap();

    kv.set("a", "1").unwrap();
    kv.set("b", "2").unwrap();
    kv.remove("a").unwrap();

    assert!(kv.get("a").unwrap().is_none());
    assert_eq!(kv.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inkpost.db");

    {
        let kv = open_store(&path).unwrap();
        kv.set("persisted", "value").unwrap();
    }

    let kv = open_store(&path).unwrap();
    assert_eq!(kv.get("persisted").unwrap().as_deref(), Some("value"));
}

#[test]
fn opening_a_newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    let future_version = latest_version() + 1;
    conn.execute_batch(&format!("PRAGMA user_version = {future_version};"))
        .unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } if db_version == future_version && latest_supported == latest_version()
    ));
}
