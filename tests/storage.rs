//! Integration tests for the JSON file store: upsert, delete, and
//! round-tripping a tournament through disk.

use football_tournament_web::{
    create_tournament, submit_match_result, JsonFileStore, TournamentStore, TournamentType,
};

fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("tournaments.json"))
}

fn sample(name: &str) -> football_tournament_web::Tournament {
    let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    create_tournament(name, TournamentType::Knockout, &names, false).unwrap()
}

#[test]
fn missing_file_means_no_tournaments() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store_in(&dir).load_all().is_empty());
}

#[test]
fn save_is_an_upsert_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut t = sample("Cup");
    store.save(&t);
    store.save(&sample("Other"));
    assert_eq!(store.load_all().len(), 2);

    t.name = "Renamed Cup".to_string();
    store.save(&t);
    let list = store.load_all();
    assert_eq!(list.len(), 2);
    assert!(list.iter().any(|x| x.id == t.id && x.name == "Renamed Cup"));
}

#[test]
fn delete_removes_only_the_given_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let a = sample("A Cup");
    let b = sample("B Cup");
    store.save(&a);
    store.save(&b);

    store.delete(a.id);
    let list = store.load_all();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, b.id);
}

#[test]
fn tournament_state_survives_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut t = sample("Cup");
    let open = t
        .fixtures
        .iter()
        .find(|m| !m.is_played)
        .map(|m| m.id)
        .unwrap();
    submit_match_result(&mut t, open, 2, 1, None).unwrap();
    store.save(&t);

    let loaded = store.load_all().into_iter().find(|x| x.id == t.id).unwrap();
    assert_eq!(loaded.kind, t.kind);
    assert_eq!(loaded.status, t.status);
    assert_eq!(loaded.fixtures.len(), t.fixtures.len());
    let m = loaded.fixture(open).unwrap();
    assert!(m.is_played);
    assert_eq!((m.home_score, m.away_score), (Some(2), Some(1)));
    assert_eq!(loaded.created_at, t.created_at);
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournaments.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load_all().is_empty());
}
