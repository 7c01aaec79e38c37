// tests/ledger_tests.rs

use chrono::{Duration, TimeZone, Utc};
use trivia_quiz::{
    ledger::{ScoreLedger, high_score_key, leaderboard_key},
    models::leaderboard::LeaderboardEntry,
    storage::{KeyValueStore, MemoryStore},
};

fn entry(user: &str, score: u32, minute: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        user: user.to_string(),
        avatar: "🦉".to_string(),
        score,
        total: 10,
        difficulty: "Easy".to_string(),
        date: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(minute),
    }
}

fn is_sorted_descending(entries: &[LeaderboardEntry]) -> bool {
    entries.windows(2).all(|w| w[0].score >= w[1].score)
}

#[test]
fn high_score_defaults_to_zero() {
    let mut store = MemoryStore::new();
    let ledger = ScoreLedger::new(&mut store);
    assert_eq!(ledger.high_score("GK", "Easy").unwrap(), 0);
}

#[test]
fn record_high_score_returns_previous_and_keeps_best() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    assert_eq!(ledger.record_high_score("GK", "Easy", 5).unwrap(), 0);
    assert_eq!(ledger.record_high_score("GK", "Easy", 7).unwrap(), 5);
    // Replays with the same or a lower score keep the best.
    assert_eq!(ledger.record_high_score("GK", "Easy", 7).unwrap(), 7);
    assert_eq!(ledger.record_high_score("GK", "Easy", 3).unwrap(), 7);
    assert_eq!(ledger.high_score("GK", "Easy").unwrap(), 7);
}

#[test]
fn high_scores_are_per_exact_pair() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    ledger.record_high_score("GK", "Easy", 4).unwrap();
    ledger.record_high_score("GK", "All", 9).unwrap();

    assert_eq!(ledger.high_score("GK", "Easy").unwrap(), 4);
    assert_eq!(ledger.high_score("GK", "Hard").unwrap(), 0);
    assert_eq!(ledger.high_score("GK", "All").unwrap(), 9);
    assert_eq!(ledger.high_score("All", "All").unwrap(), 0);
    drop(ledger);

    assert_eq!(store.get(&high_score_key("GK", "Easy")).unwrap().as_deref(), Some("4"));
}

#[test]
fn unreadable_high_score_counts_as_zero() {
    let mut store = MemoryStore::new();
    store.set(&high_score_key("CSS", "Hard"), "not a number").unwrap();

    let mut ledger = ScoreLedger::new(&mut store);
    assert_eq!(ledger.record_high_score("CSS", "Hard", 2).unwrap(), 0);
    assert_eq!(ledger.high_score("CSS", "Hard").unwrap(), 2);
}

#[test]
fn leaderboard_is_capped_and_sorted() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    let scores = [3, 9, 1, 7, 7, 2, 10, 0, 5, 6, 8, 4, 7];
    for (i, score) in scores.iter().enumerate() {
        ledger
            .record_leaderboard_entry("GK", entry(&format!("p{}", i), *score, i as i64))
            .unwrap();
        let list = ledger.load_leaderboard("GK").unwrap();
        assert!(list.len() <= 10);
        assert!(is_sorted_descending(&list));
    }

    let list = ledger.load_leaderboard("GK").unwrap();
    assert_eq!(list.len(), 10);
    assert_eq!(list[0].score, 10);
    assert_eq!(list[9].score, 3);
}

#[test]
fn equal_scores_keep_arrival_order() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    ledger.record_leaderboard_entry("DSA", entry("first", 5, 0)).unwrap();
    ledger.record_leaderboard_entry("DSA", entry("second", 5, 1)).unwrap();
    ledger.record_leaderboard_entry("DSA", entry("top", 8, 2)).unwrap();
    ledger.record_leaderboard_entry("DSA", entry("third", 5, 3)).unwrap();

    let names: Vec<_> = ledger
        .load_leaderboard("DSA")
        .unwrap()
        .into_iter()
        .map(|e| e.user)
        .collect();
    assert_eq!(names, ["top", "first", "second", "third"]);
}

#[test]
fn empty_leaderboard_is_valid() {
    let mut store = MemoryStore::new();
    let ledger = ScoreLedger::new(&mut store);
    assert!(ledger.load_leaderboard("HTML").unwrap().is_empty());
    assert!(ledger.load_leaderboard("All").unwrap().is_empty());
}

#[test]
fn all_view_merges_known_categories_and_mixed() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    ledger.record_leaderboard_entry("HTML", entry("html", 4, 0)).unwrap();
    ledger.record_leaderboard_entry("Mixed", entry("mixed", 9, 1)).unwrap();
    ledger.record_leaderboard_entry("OOP", entry("oop", 6, 2)).unwrap();
    // Not a known category, so not part of the merged view.
    ledger.record_leaderboard_entry("Trivia", entry("other", 10, 3)).unwrap();

    let names: Vec<_> = ledger
        .load_leaderboard("All")
        .unwrap()
        .into_iter()
        .map(|e| e.user)
        .collect();
    assert_eq!(names, ["mixed", "oop", "html"]);
}

#[test]
fn all_view_keeps_top_ten_of_capped_lists() {
    let mut store = MemoryStore::new();
    let mut ledger = ScoreLedger::new(&mut store);

    // Twelve strong GK runs: only ten survive in the GK list.
    for i in 0..12 {
        ledger
            .record_leaderboard_entry("GK", entry(&format!("gk{}", i), 10, i))
            .unwrap();
    }
    for i in 0..5 {
        ledger
            .record_leaderboard_entry("CSS", entry(&format!("css{}", i), 1, i))
            .unwrap();
    }

    let merged = ledger.load_leaderboard("All").unwrap();
    assert_eq!(merged.len(), 10);
    assert!(merged.iter().all(|e| e.user.starts_with("gk")));
    // The entries dropped from the GK list do not come back.
    assert!(!merged.iter().any(|e| e.user == "gk10" || e.user == "gk11"));
}

#[test]
fn unreadable_leaderboard_is_treated_as_empty() {
    let mut store = MemoryStore::new();
    store.set(&leaderboard_key("Web"), "{broken").unwrap();

    let mut ledger = ScoreLedger::new(&mut store);
    assert!(ledger.load_leaderboard("Web").unwrap().is_empty());

    ledger.record_leaderboard_entry("Web", entry("fresh", 3, 0)).unwrap();
    assert_eq!(ledger.load_leaderboard("Web").unwrap().len(), 1);
}
