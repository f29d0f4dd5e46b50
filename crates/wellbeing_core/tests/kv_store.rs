use chrono::{TimeZone, Utc};
use wellbeing_core::db::{open_db, open_db_in_memory};
use wellbeing_core::store::keys;
use wellbeing_core::{
    ChatMessage, ChatRoom, KeyValueStore, KvRepository, MemoryKvRepository, MoodController,
    MoodEntry, MoodScore, SqliteKvRepository, StoreError,
};

#[test]
fn load_returns_fallback_for_absent_key() {
    let store = KeyValueStore::new(MemoryKvRepository::new());

    assert_eq!(store.load(keys::NICKNAME, String::new()), "");
    assert!(!store.load(keys::CONSENT, false));
    assert_eq!(store.load::<Vec<MoodEntry>>(keys::MOOD_ENTRIES, Vec::new()), vec![]);
}

#[test]
fn save_then_load_roundtrips_on_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let store = KeyValueStore::new(SqliteKvRepository::new(&conn));

    let messages = vec![
        ChatMessage::new(ChatRoom::Sleep, "Kai", "Lights out at 11 tonight"),
        ChatMessage::new(ChatRoom::Social, "Mo", "Called my sister today"),
    ];
    store.save(keys::MESSAGES, &messages);
    store.save(keys::CHAT_ROOM, &ChatRoom::Sleep);

    let loaded: Vec<ChatMessage> = store.load(keys::MESSAGES, Vec::new());
    assert_eq!(loaded, messages);
    assert_eq!(store.load(keys::CHAT_ROOM, ChatRoom::General), ChatRoom::Sleep);
}

#[test]
fn later_save_replaces_whole_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let store = KeyValueStore::new(SqliteKvRepository::new(&conn));

    store.save(keys::NICKNAME, "Luna");
    store.save(keys::NICKNAME, "StarFox");

    assert_eq!(store.load(keys::NICKNAME, String::new()), "StarFox");
    assert_eq!(store.keys().unwrap(), vec![keys::NICKNAME.to_string()]);
}

#[test]
fn slots_survive_reopening_the_storage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellbeing.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = KeyValueStore::new(SqliteKvRepository::new(&conn));
        let mut mood = MoodController::new(&store);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        mood.record_checkin_at(MoodScore::new(4).unwrap(), "slept well", at);
    }

    let conn = open_db(&path).unwrap();
    let store = KeyValueStore::new(SqliteKvRepository::new(&conn));
    let entries: Vec<MoodEntry> = store.load(keys::MOOD_ENTRIES, Vec::new());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note, "slept well");
    assert_eq!(entries[0].date, Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap());
}

#[test]
fn wrong_shape_falls_back_and_try_load_reports_it() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    store.save(keys::MOOD_ENTRIES, "not a list");

    let entries: Vec<MoodEntry> = store.load(keys::MOOD_ENTRIES, Vec::new());
    assert!(entries.is_empty());

    let err = store.try_load::<Vec<MoodEntry>>(keys::MOOD_ENTRIES).unwrap_err();
    assert!(matches!(err, StoreError::Json { ref key, .. } if key == keys::MOOD_ENTRIES));
}

#[test]
fn failed_write_is_dropped_and_memory_keeps_the_change() {
    let repo = MemoryKvRepository::with_quota(64);
    let store = KeyValueStore::new(&repo);
    let mut mood = MoodController::new(&store);

    mood.record_checkin(MoodScore::new(5).unwrap(), "a note long enough to overflow the quota");

    assert_eq!(mood.entries().len(), 1);
    assert!(repo.get_value(keys::MOOD_ENTRIES).unwrap().is_none());
    assert!(store.try_save(keys::MOOD_ENTRIES, mood.entries()).is_err());
}

#[test]
fn remove_restores_fallback() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    store.save(keys::CONSENT, &true);
    assert!(store.contains(keys::CONSENT));

    assert!(store.remove(keys::CONSENT).unwrap());
    assert!(!store.contains(keys::CONSENT));
    assert!(!store.load(keys::CONSENT, false));
}
