//! random sparse ratings for benches and dataset tooling

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::PreferenceStore;

/// Builds a store of `raters` raters scoring `items` items, each pair
/// rated with probability `density`. Ratings are Normal(3.0, 1.0)
/// clamped to [1, 5], matching the sample domain's range.
///
/// Every rater is present in the store even if the draw leaves them with
/// no ratings.
pub fn synthetic_store(raters: usize, items: usize, density: f64) -> PreferenceStore {
    let mut rng = rand::rng();
    let normal = Normal::<f64>::new(3.0, 1.0).unwrap();

    let mut store = PreferenceStore::new();
    for r in 0..raters {
        let rater = rater_name(r);
        store.add_rater(&rater);
        for i in 0..items {
            if rng.random_bool(density) {
                let rating: f64 = normal.sample(&mut rng).clamp(1.0, 5.0);
                store.insert(&rater, &item_name(i), rating);
            }
        }
    }
    store
}

/// name of the `i`th synthetic rater
pub fn rater_name(i: usize) -> String {
    format!("rater_{i:05}")
}

/// name of the `i`th synthetic item
pub fn item_name(i: usize) -> String {
    format!("item_{i:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_range() {
        let store = synthetic_store(20, 50, 0.5);
        assert_eq!(store.len(), 20);

        for (_, ratings) in store.iter() {
            for (_, &rating) in ratings {
                assert!((1.0..=5.0).contains(&rating));
            }
        }
    }

    #[test]
    fn test_zero_density() {
        let store = synthetic_store(5, 50, 0.0);
        assert_eq!(store.len(), 5);
        for (_, ratings) in store.iter() {
            assert!(ratings.is_empty());
        }
    }
}
