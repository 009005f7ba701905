use super::*;
use crate::store::PreferenceStore;

// The well-known seven-critic movie dataset.
fn critics() -> PreferenceStore {
    let mut store = PreferenceStore::new();
    let rows: &[(&str, &str, f64)] = &[
        ("Lisa Rose", "Lady in the Water", 2.5),
        ("Lisa Rose", "Snakes on a Plane", 3.5),
        ("Lisa Rose", "Just My Luck", 3.0),
        ("Lisa Rose", "Superman Returns", 3.5),
        ("Lisa Rose", "You, Me and Dupree", 2.5),
        ("Lisa Rose", "The Night Listener", 3.0),
        ("Gene Seymour", "Lady in the Water", 3.0),
        ("Gene Seymour", "Snakes on a Plane", 3.5),
        ("Gene Seymour", "Just My Luck", 1.5),
        ("Gene Seymour", "Superman Returns", 5.0),
        ("Gene Seymour", "The Night Listener", 3.0),
        ("Gene Seymour", "You, Me and Dupree", 3.5),
        ("Michael Phillips", "Lady in the Water", 2.5),
        ("Michael Phillips", "Snakes on a Plane", 3.0),
        ("Michael Phillips", "Superman Returns", 3.5),
        ("Michael Phillips", "The Night Listener", 4.0),
        ("Claudia Puig", "Snakes on a Plane", 3.5),
        ("Claudia Puig", "Just My Luck", 3.0),
        ("Claudia Puig", "The Night Listener", 4.5),
        ("Claudia Puig", "Superman Returns", 4.0),
        ("Claudia Puig", "You, Me and Dupree", 2.5),
        ("Mick LaSalle", "Lady in the Water", 3.0),
        ("Mick LaSalle", "Snakes on a Plane", 4.0),
        ("Mick LaSalle", "Just My Luck", 2.0),
        ("Mick LaSalle", "Superman Returns", 3.0),
        ("Mick LaSalle", "The Night Listener", 3.0),
        ("Mick LaSalle", "You, Me and Dupree", 2.0),
        ("Jack Matthews", "Lady in the Water", 3.0),
        ("Jack Matthews", "Snakes on a Plane", 4.0),
        ("Jack Matthews", "The Night Listener", 3.0),
        ("Jack Matthews", "Superman Returns", 5.0),
        ("Jack Matthews", "You, Me and Dupree", 3.5),
        ("Toby", "Snakes on a Plane", 4.5),
        ("Toby", "You, Me and Dupree", 1.0),
        ("Toby", "Superman Returns", 4.0),
    ];
    for &(rater, item, rating) in rows {
        store.insert(rater, item, rating);
    }
    store
}

#[test]
fn test_distance_known_value() {
    let store = critics();
    // sum of squared differences over the six shared items is 5.75
    let expected = 1.0 / (1.0 + 5.75f64.sqrt());
    let score = sim_distance(&store, "Lisa Rose", "Gene Seymour").unwrap();
    assert!((score - expected).abs() < 1e-12);
    assert!((score - 0.294_298_055_085_549_4).abs() < 1e-9);
}

#[test]
fn test_pearson_known_value() {
    let store = critics();
    let score = sim_pearson(&store, "Lisa Rose", "Gene Seymour").unwrap();
    assert!((score - 0.396_059_017_190_669_7).abs() < 1e-9);
}

#[test]
fn test_both_metrics_symmetric() {
    let store = critics();
    let raters: Vec<&str> = store.raters().collect();

    for &a in &raters {
        for &b in &raters {
            let d_ab = sim_distance(&store, a, b).unwrap();
            let d_ba = sim_distance(&store, b, a).unwrap();
            assert!((d_ab - d_ba).abs() < 1e-12, "distance asymmetric for {a}/{b}");

            let p_ab = sim_pearson(&store, a, b).unwrap();
            let p_ba = sim_pearson(&store, b, a).unwrap();
            assert!((p_ab - p_ba).abs() < 1e-12, "pearson asymmetric for {a}/{b}");
        }
    }
}

#[test]
fn test_no_shared_items_scores_zero() {
    let mut store = PreferenceStore::new();
    store.insert("alice", "x", 3.0);
    store.insert("alice", "y", 4.0);
    store.insert("bob", "z", 2.0);

    assert_eq!(sim_distance(&store, "alice", "bob").unwrap(), 0.0);
    assert_eq!(sim_pearson(&store, "alice", "bob").unwrap(), 0.0);
}

#[test]
fn test_empty_rater_scores_zero_with_everyone() {
    let mut store = critics();
    store.add_rater("Lurker");

    assert_eq!(sim_distance(&store, "Lurker", "Lisa Rose").unwrap(), 0.0);
    assert_eq!(sim_pearson(&store, "Lisa Rose", "Lurker").unwrap(), 0.0);
}

#[test]
fn test_pearson_zero_variance_falls_back_to_zero() {
    // identical flat ratings give a zero denominator; the contract is 0,
    // not 1
    let mut store = PreferenceStore::new();
    store.insert("alice", "x", 3.0);
    store.insert("alice", "y", 3.0);
    store.insert("bob", "x", 3.0);
    store.insert("bob", "y", 3.0);

    assert_eq!(sim_pearson(&store, "alice", "bob").unwrap(), 0.0);
}

#[test]
fn test_distance_identical_ratings_score_one() {
    let mut store = PreferenceStore::new();
    store.insert("alice", "x", 3.0);
    store.insert("bob", "x", 3.0);

    assert_eq!(sim_distance(&store, "alice", "bob").unwrap(), 1.0);
}

#[test]
fn test_pearson_perfect_anticorrelation() {
    let mut store = PreferenceStore::new();
    store.insert("alice", "x", 1.0);
    store.insert("alice", "y", 5.0);
    store.insert("bob", "x", 5.0);
    store.insert("bob", "y", 1.0);

    let score = sim_pearson(&store, "alice", "bob").unwrap();
    assert!((score + 1.0).abs() < 1e-12);
}

#[test]
fn test_unknown_rater_is_an_error() {
    let store = critics();
    let err = sim_pearson(&store, "Toby", "Nobody").unwrap_err();
    assert_eq!(err.0, "Nobody");

    let err = sim_distance(&store, "Nobody", "Toby").unwrap_err();
    assert_eq!(err.0, "Nobody");
}

#[test]
fn test_metric_dispatch_matches_free_functions() {
    let store = critics();
    let a = "Toby";
    let b = "Mick LaSalle";

    assert_eq!(
        Metric::Distance.score(&store, a, b).unwrap(),
        sim_distance(&store, a, b).unwrap()
    );
    assert_eq!(
        Metric::Pearson.score(&store, a, b).unwrap(),
        sim_pearson(&store, a, b).unwrap()
    );
    assert_eq!(Metric::default(), Metric::Pearson);
}

#[test]
fn test_metric_from_str() {
    assert_eq!(Metric::from_str("distance"), Metric::Distance);
    assert_eq!(Metric::from_str("pearson"), Metric::Pearson);
}

#[test]
#[should_panic(expected = "Unknown metric")]
fn test_metric_from_str_unknown() {
    Metric::from_str("cosine");
}
