//! definitions and construction of preference stores

use std::collections::HashMap;

pub mod io;
pub mod matrix;
pub mod synthetic;

/// one rater's scores, keyed by item
pub type Ratings = HashMap<String, f64>;

#[derive(Debug, thiserror::Error)]
#[error("rater '{0}' not found in preference store")]
pub struct RaterNotFound(pub String);

/// A mapping from rater to the items they have scored.
///
/// Built once by the caller and treated as read-only by every query in
/// [`crate::similarity`] and [`crate::ranking`].
#[derive(Debug, Default, Clone)]
pub struct PreferenceStore {
    ratings: HashMap<String, Ratings>,
}

impl PreferenceStore {
    pub fn new() -> PreferenceStore {
        PreferenceStore {
            ratings: HashMap::new(),
        }
    }

    /// Record `rater`'s score for `item`, overwriting any previous score.
    pub fn insert(&mut self, rater: &str, item: &str, rating: f64) {
        self.ratings
            .entry(rater.to_string())
            .or_default()
            .insert(item.to_string(), rating);
    }

    /// Register a rater with no ratings yet.
    ///
    /// Such a rater shares no items with anyone and scores 0 against
    /// every other rater.
    pub fn add_rater(&mut self, rater: &str) {
        self.ratings.entry(rater.to_string()).or_default();
    }

    pub fn ratings_of(&self, rater: &str) -> Option<&Ratings> {
        self.ratings.get(rater)
    }

    pub fn contains(&self, rater: &str) -> bool {
        self.ratings.contains_key(rater)
    }

    pub fn raters(&self) -> impl Iterator<Item = &str> {
        self.ratings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Ratings)> {
        self.ratings.iter()
    }

    /// number of raters in the store
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
