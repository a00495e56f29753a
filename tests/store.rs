//! Integration tests for the in-memory tournament store.

use tournament_bracket_web::{
    MemoryStore, StoreError, Tournament, TournamentId, TournamentStore, TournamentType,
};

fn tournament(name: &str) -> Tournament {
    Tournament::new(name, "", TournamentType::RoundRobin)
}

#[test]
fn save_then_load() {
    let mut store = MemoryStore::new();
    let t = tournament("Spring");
    store.save(t.clone()).unwrap();

    assert_eq!(store.load_one(t.id).unwrap(), Some(t.clone()));
    assert_eq!(store.load_all().unwrap(), vec![t]);
}

#[test]
fn saving_an_existing_id_replaces_it_in_place() {
    let mut store = MemoryStore::new();
    let first = tournament("First");
    let second = tournament("Second");
    store.save(first.clone()).unwrap();
    store.save(second.clone()).unwrap();

    let mut renamed = first.clone();
    renamed.add_team("Owls", Vec::new()).unwrap();
    store.save(renamed.clone()).unwrap();

    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], renamed);
    assert_eq!(all[1], second);
}

#[test]
fn missing_tournaments() {
    let mut store = MemoryStore::new();
    let id = TournamentId::new_v4();
    assert_eq!(store.load_one(id).unwrap(), None);
    assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
}

#[test]
fn delete_removes_only_the_given_tournament() {
    let mut store = MemoryStore::new();
    let keep = tournament("Keep");
    let drop = tournament("Drop");
    store.save(keep.clone()).unwrap();
    store.save(drop.clone()).unwrap();

    store.delete(drop.id).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![keep]);
    assert_eq!(store.load_one(drop.id).unwrap(), None);
}
