use wellbeing_core::db::open_db_in_memory;
use wellbeing_core::store::keys;
use wellbeing_core::{
    ChatController, ChatMessage, ChatRoom, KeyValueStore, MemoryKvRepository, Session,
    SqliteKvRepository,
};

fn session(nickname: &str) -> Session {
    Session {
        nickname: nickname.to_string(),
        onboarding_complete: true,
    }
}

#[test]
fn first_load_uses_two_seed_messages() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    let chat = ChatController::new(&store, &session("StarFox"));

    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.current_room(), ChatRoom::General);
    let general = chat.render(ChatRoom::General);
    assert_eq!(general.len(), 1);
    assert_eq!(general[0].author_label, "Guide");
    assert!(!general[0].is_self);
}

#[test]
fn blank_messages_are_ignored() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    let mut chat = ChatController::new(&store, &session("StarFox"));

    assert!(!chat.send_message(""));
    assert!(!chat.send_message("   "));
    assert!(!chat.send_message("\n\t"));

    assert_eq!(chat.messages().len(), 2);
    assert!(!store.contains(keys::MESSAGES));
}

#[test]
fn message_stays_in_its_room() {
    let conn = open_db_in_memory().unwrap();
    let store = KeyValueStore::new(SqliteKvRepository::new(&conn));
    let mut chat = ChatController::new(&store, &session("StarFox"));

    chat.switch_room(ChatRoom::Study);
    assert!(chat.send_message("Exams stressing me out"));

    chat.switch_room(ChatRoom::General);
    assert!(chat
        .render_current()
        .iter()
        .all(|bubble| bubble.text != "Exams stressing me out"));

    chat.switch_room(ChatRoom::Study);
    let study = chat.render_current();
    let texts: Vec<&str> = study.iter().map(|bubble| bubble.text).collect();
    assert_eq!(
        texts,
        vec!["Exams stressing me out—any tips?", "Exams stressing me out"]
    );
    assert_eq!(study[0].author_label, "Luna");
    assert_eq!(study[1].author_label, "You");
    assert!(study[1].is_self);
}

#[test]
fn sent_message_is_trimmed_persisted_and_clears_draft() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    let mut chat = ChatController::new(&store, &session("Kai"));

    chat.switch_room(ChatRoom::Sleep);
    chat.set_draft("  try no screens after ten  ");
    assert!(chat.send_draft());
    assert!(chat.draft().is_empty());

    let stored: Vec<ChatMessage> = store.load(keys::MESSAGES, Vec::new());
    assert_eq!(stored.len(), 3);
    assert_eq!(
        stored[2],
        ChatMessage::new(ChatRoom::Sleep, "Kai", "try no screens after ten")
    );
}

#[test]
fn room_selection_is_persisted_independently() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    {
        let mut chat = ChatController::new(&store, &session("Kai"));
        chat.switch_room(ChatRoom::Social);
    }
    assert!(!store.contains(keys::MESSAGES));

    let chat = ChatController::new(&store, &session("Kai"));
    assert_eq!(chat.current_room(), ChatRoom::Social);
}

#[test]
fn same_nickname_on_device_counts_as_self() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    let mut chat = ChatController::new(&store, &session("Luna"));
    chat.switch_room(ChatRoom::Study);

    let study = chat.render_current();
    assert!(study[0].is_self);
    assert_eq!(study[0].author_label, "You");
}

#[test]
fn messages_with_unknown_rooms_are_kept_but_unreachable() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    store.save(
        keys::MESSAGES,
        &vec![ChatMessage {
            room: "lobby".to_string(),
            author: "Old".to_string(),
            msg: "from an earlier build".to_string(),
        }],
    );

    let mut chat = ChatController::new(&store, &session("Kai"));
    assert!(ChatRoom::ALL
        .iter()
        .all(|room| chat.render(*room).is_empty()));

    chat.send_message("hello");
    let stored: Vec<ChatMessage> = store.load(keys::MESSAGES, Vec::new());
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].room, "lobby");
}

#[test]
fn missing_nickname_posts_as_guest() {
    let store = KeyValueStore::new(MemoryKvRepository::new());
    let mut chat = ChatController::new(&store, &session(""));

    chat.send_message("hi all");
    assert_eq!(chat.nickname(), "Guest");
    assert_eq!(chat.messages().last().unwrap().author, "Guest");
}
