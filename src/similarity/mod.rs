//! similarity metrics between pairs of raters
//!
//! Both metrics compare two raters over the items they have both scored.
//! A pair with no shared items scores exactly 0, as does a Pearson pair
//! where either side has zero variance over the shared items.

use crate::store::{PreferenceStore, RaterNotFound, Ratings};

#[cfg(test)]
mod tests;

#[cfg(feature = "simcnt")]
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "simcnt")]
static SIM_EVAL_COUNT: AtomicU64 = AtomicU64::new(0);

/// The two built-in similarity metrics. Pearson is the default everywhere
/// a metric is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// `1 / (1 + sqrt(sum of squared rating differences))`, in (0, 1]
    Distance,
    /// Pearson correlation over shared items, in [-1, 1]
    #[default]
    Pearson,
}

impl Metric {
    pub fn from_str(s: &str) -> Self {
        match s {
            "distance" => Metric::Distance,
            "pearson" => Metric::Pearson,
            _ => panic!("Unknown metric: {}", s),
        }
    }

    /// Score two raters by name, failing if either is absent from the store.
    pub fn score(&self, store: &PreferenceStore, a: &str, b: &str) -> Result<f64, RaterNotFound> {
        match self {
            Metric::Distance => sim_distance(store, a, b),
            Metric::Pearson => sim_pearson(store, a, b),
        }
    }

    /// Score two rating maps directly, skipping the store lookup.
    pub(crate) fn score_maps(&self, a: &Ratings, b: &Ratings) -> f64 {
        match self {
            Metric::Distance => distance_score(a, b),
            Metric::Pearson => pearson_score(a, b),
        }
    }
}

/// Inverse-distance similarity: 1 when two raters agree exactly on every
/// shared item, approaching 0 as their ratings diverge. 0 if they share
/// no items.
pub fn sim_distance(store: &PreferenceStore, a: &str, b: &str) -> Result<f64, RaterNotFound> {
    let (ra, rb) = lookup_pair(store, a, b)?;
    Ok(distance_score(ra, rb))
}

/// Pearson correlation over shared items. 0 if the raters share no items
/// or if either gave identical ratings to every shared item (zero
/// variance), even though the latter intuitively suggests agreement.
pub fn sim_pearson(store: &PreferenceStore, a: &str, b: &str) -> Result<f64, RaterNotFound> {
    let (ra, rb) = lookup_pair(store, a, b)?;
    Ok(pearson_score(ra, rb))
}

fn lookup_pair<'a>(
    store: &'a PreferenceStore,
    a: &str,
    b: &str,
) -> Result<(&'a Ratings, &'a Ratings), RaterNotFound> {
    let ra = store
        .ratings_of(a)
        .ok_or_else(|| RaterNotFound(a.to_string()))?;
    let rb = store
        .ratings_of(b)
        .ok_or_else(|| RaterNotFound(b.to_string()))?;
    Ok((ra, rb))
}

pub(crate) fn distance_score(a: &Ratings, b: &Ratings) -> f64 {
    #[cfg(feature = "simcnt")]
    {
        SIM_EVAL_COUNT.fetch_add(1, Ordering::Relaxed);
    }
    let mut sum_of_squares = 0.0;
    let mut shared = 0usize;
    for (item, &ra) in a {
        if let Some(&rb) = b.get(item) {
            let diff = ra - rb;
            sum_of_squares += diff * diff;
            shared += 1;
        }
    }
    if shared == 0 {
        return 0.0;
    }
    1.0 / (1.0 + sum_of_squares.sqrt())
}

pub(crate) fn pearson_score(a: &Ratings, b: &Ratings) -> f64 {
    #[cfg(feature = "simcnt")]
    {
        SIM_EVAL_COUNT.fetch_add(1, Ordering::Relaxed);
    }
    let mut n = 0.0f64;
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum1_sq = 0.0;
    let mut sum2_sq = 0.0;
    let mut p_sum = 0.0;

    for (item, &ra) in a {
        if let Some(&rb) = b.get(item) {
            n += 1.0;
            sum1 += ra;
            sum2 += rb;
            sum1_sq += ra * ra;
            sum2_sq += rb * rb;
            p_sum += ra * rb;
        }
    }

    if n == 0.0 {
        return 0.0;
    }

    let num = p_sum - (sum1 * sum2 / n);
    let den = ((sum1_sq - sum1 * sum1 / n) * (sum2_sq - sum2 * sum2 / n)).sqrt();

    // zero variance on either side; a defined fallback, not an error
    if den == 0.0 {
        return 0.0;
    }

    num / den
}

/// Returns the number of similarity evaluations performed (only if the
/// 'simcnt' feature is enabled)
#[inline]
pub fn get_similarity_eval_count() -> u64 {
    #[cfg(feature = "simcnt")]
    {
        SIM_EVAL_COUNT.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "simcnt"))]
    {
        0
    }
}
