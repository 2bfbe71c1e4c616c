use super::*;

fn sample_record() -> StoredSession {
    StoredSession {
        token: "abc".to_owned(),
        user: User {
            id: 1,
            email: "a@b.com".to_owned(),
        },
    }
}

// =============================================================
// MemoryStorage round-trips
// =============================================================

#[test]
fn empty_storage_reads_absent() {
    let storage = MemoryStorage::new();
    assert!(storage.read().is_none());
}

#[test]
fn write_then_read_round_trips() {
    let storage = MemoryStorage::new();
    storage.write(&sample_record());
    assert_eq!(storage.read(), Some(sample_record()));
}

#[test]
fn clear_removes_both_slots() {
    let storage = MemoryStorage::new();
    storage.write(&sample_record());
    storage.clear();
    assert!(storage.read().is_none());
    assert_eq!(storage.raw(), (None, None));
}

#[test]
fn user_is_persisted_as_json() {
    let storage = MemoryStorage::new();
    storage.write(&sample_record());
    let (token, user_json) = storage.raw();
    assert_eq!(token.as_deref(), Some("abc"));
    let user: User = serde_json::from_str(&user_json.expect("user slot set")).expect("valid json");
    assert_eq!(user, sample_record().user);
}

// =============================================================
// Corrupt and partial records
// =============================================================

#[test]
fn corrupt_user_record_reads_absent_and_is_cleared() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some("{{{not json"));

    assert!(storage.read().is_none());
    // The bad record was wiped, so the next read starts clean.
    assert_eq!(storage.raw(), (None, None));
}

#[test]
fn user_record_missing_fields_is_treated_as_corrupt() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some(r#"{"id":1}"#));

    assert!(storage.read().is_none());
    assert_eq!(storage.raw(), (None, None));
}

#[test]
fn token_without_user_is_cleared() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), None);

    assert!(storage.read().is_none());
    assert_eq!(storage.raw(), (None, None));
}

#[test]
fn user_without_token_is_cleared() {
    let storage = MemoryStorage::new();
    storage.seed_raw(None, Some(r#"{"id":1,"email":"a@b.com"}"#));

    assert!(storage.read().is_none());
    assert_eq!(storage.raw(), (None, None));
}
