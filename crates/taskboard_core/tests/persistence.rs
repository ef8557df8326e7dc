use taskboard_core::db::{open_db, open_db_in_memory};
use taskboard_core::{
    BoardState, Card, Column, MemoryStateSlot, SqliteStateSlot, StateSlot,
};

fn populated_state() -> BoardState {
    let mut state = BoardState::seed();
    state.columns.push(Column::with_id("review", "Review", 3));
    let mut card = Card::with_id("c1", "todo", "Buy milk");
    card.description = "Semi-skimmed".to_string();
    card.notes = "corner shop".to_string();
    card.color = Some("#6366f1".to_string());
    state.cards.push(card);
    state.cards.push(Card::with_id("c2", "review", "Call Bob"));
    state
}

#[test]
fn sqlite_slot_round_trips_field_for_field() {
    let conn = open_db_in_memory().unwrap();
    let slot = SqliteStateSlot::new(&conn);
    let state = populated_state();

    slot.save(&state);
    assert_eq!(slot.load(), state);
}

#[test]
fn missing_slot_loads_the_seed_state() {
    let conn = open_db_in_memory().unwrap();
    let slot = SqliteStateSlot::new(&conn);
    assert_eq!(slot.load(), BoardState::seed());
}

#[test]
fn unparseable_payload_falls_back_to_seed() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO board_slots (slot_key, payload) VALUES (?1, ?2);",
        rusqlite::params!["kanban_board_state", "{not json"],
    )
    .unwrap();

    let slot = SqliteStateSlot::new(&conn);
    assert_eq!(slot.load(), BoardState::seed());
}

#[test]
fn wrong_shape_payload_falls_back_to_seed() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO board_slots (slot_key, payload) VALUES (?1, ?2);",
        rusqlite::params!["kanban_board_state", r#"{"lanes": [], "tickets": 3}"#],
    )
    .unwrap();

    let slot = SqliteStateSlot::new(&conn);
    assert_eq!(slot.load(), BoardState::seed());
}

#[test]
fn payload_violating_invariants_falls_back_to_seed() {
    // Valid JSON shape, but the card references a column that is absent.
    let payload = r#"{
        "columns": [{"id": "todo", "title": "TODO", "order": 0}],
        "cards": [{
            "id": "c1", "title": "orphan", "description": "", "notes": "",
            "columnId": "nowhere", "createdAt": 1, "updatedAt": 1
        }]
    }"#;

    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO board_slots (slot_key, payload) VALUES (?1, ?2);",
        rusqlite::params!["kanban_board_state", payload],
    )
    .unwrap();

    let slot = SqliteStateSlot::new(&conn);
    assert_eq!(slot.load(), BoardState::seed());
}

#[test]
fn clear_empties_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let slot = SqliteStateSlot::new(&conn);

    slot.save(&populated_state());
    slot.clear();
    assert_eq!(slot.load(), BoardState::seed());
}

#[test]
fn distinct_keys_hold_independent_boards() {
    let conn = open_db_in_memory().unwrap();
    let slot_a = SqliteStateSlot::with_key(&conn, "board-a");
    let slot_b = SqliteStateSlot::with_key(&conn, "board-b");

    let state_a = populated_state();
    slot_a.save(&state_a);

    assert_eq!(slot_a.load(), state_a);
    assert_eq!(slot_b.load(), BoardState::seed());
}

#[test]
fn file_backed_slot_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");
    let state = populated_state();

    {
        let conn = open_db(&path).unwrap();
        SqliteStateSlot::new(&conn).save(&state);
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(SqliteStateSlot::new(&conn).load(), state);
}

#[test]
fn memory_slot_round_trips_and_recovers_from_garbage() {
    let slot = MemoryStateSlot::new();
    let state = populated_state();

    slot.save(&state);
    assert_eq!(slot.load(), state);

    let corrupt = MemoryStateSlot::with_payload("][");
    assert_eq!(corrupt.load(), BoardState::seed());
}

#[test]
fn persisted_card_uses_camel_case_field_names() {
    let state = populated_state();
    let payload = serde_json::to_value(&state).unwrap();

    let card = &payload["cards"][0];
    assert_eq!(card["columnId"], "todo");
    assert!(card.get("createdAt").is_some());
    assert!(card.get("updatedAt").is_some());
    assert_eq!(card["color"], "#6366f1");

    // Optional color is omitted entirely when unset.
    let bare = &payload["cards"][1];
    assert!(bare.get("color").is_none());
}

#[test]
fn seed_payload_matches_the_documented_layout() {
    let payload = serde_json::to_value(BoardState::seed()).unwrap();
    let columns = payload["columns"].as_array().unwrap();

    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0]["id"], "todo");
    assert_eq!(columns[0]["title"], "TODO");
    assert_eq!(columns[0]["order"], 0);
    assert_eq!(columns[1]["id"], "in-progress");
    assert_eq!(columns[2]["id"], "completed");
    assert!(payload["cards"].as_array().unwrap().is_empty());
}
