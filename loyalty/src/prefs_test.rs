use super::*;
use crate::ledger::{POINTS_KEY, PointsLedger};
use crate::store::MemoryStore;

#[test]
fn dark_mode_defaults_off() {
    assert!(!dark_mode(&MemoryStore::new()));
}

#[test]
fn dark_mode_reads_json_boolean() {
    assert!(dark_mode(&MemoryStore::with_entries([(DARK_MODE_KEY, "true")])));
    assert!(!dark_mode(&MemoryStore::with_entries([(DARK_MODE_KEY, "false")])));
    assert!(!dark_mode(&MemoryStore::with_entries([(DARK_MODE_KEY, "yes")])));
    assert!(!dark_mode(&MemoryStore::with_entries([(DARK_MODE_KEY, "1")])));
}

#[test]
fn toggle_dark_mode_flips_and_persists() {
    let store = MemoryStore::new();
    assert!(toggle_dark_mode(&store).unwrap());
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
    assert!(!toggle_dark_mode(&store).unwrap());
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn username_round_trip_and_clear() {
    let store = MemoryStore::new();
    assert_eq!(username(&store), None);
    set_username(&store, "  Abena ").unwrap();
    assert_eq!(username(&store).as_deref(), Some("Abena"));
    clear_username(&store).unwrap();
    assert_eq!(username(&store), None);
}

#[test]
fn blank_username_counts_as_unset() {
    let store = MemoryStore::with_entries([(USERNAME_KEY, "   ")]);
    assert_eq!(username(&store), None);
}

#[test]
fn greeting_uses_name_when_present() {
    assert_eq!(greeting(Some("Abena")), "Welcome back, Abena!");
    assert_eq!(greeting(None), "Welcome!");
}

#[test]
fn preferences_do_not_disturb_balance() {
    let store = MemoryStore::new();
    let ledger = PointsLedger::new(&store);
    ledger.set_balance(70).unwrap();

    set_dark_mode(&store, true).unwrap();
    set_username(&store, "Kwame").unwrap();
    clear_username(&store).unwrap();

    assert_eq!(ledger.balance(), 70);
}

#[test]
fn preference_keys_differ_from_points_key() {
    assert_ne!(DARK_MODE_KEY, POINTS_KEY);
    assert_ne!(USERNAME_KEY, POINTS_KEY);
}
