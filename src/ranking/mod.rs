//! ranking queries over a preference store: nearest raters and
//! similarity-weighted recommendations

use std::collections::HashMap;

use rayon::prelude::*;

use crate::similarity::Metric;
use crate::store::{PreferenceStore, RaterNotFound};


/// default result bound for [`top_matches`]
pub const DEFAULT_MATCHES: usize = 5;

/// Sort descending by score; equal scores break descending by identifier
/// so results are deterministic regardless of map iteration order.
fn sort_descending(scores: &mut [(f64, String)]) {
    scores.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.1.cmp(&a.1))
    });
}

/// Returns the raters most similar to `target`, best first.
///
/// At most `n` entries, fewer if the store holds fewer than `n` other
/// raters; `target` itself is never included.
pub fn top_matches(
    store: &PreferenceStore,
    target: &str,
    n: usize,
    metric: Metric,
) -> Result<Vec<(f64, String)>, RaterNotFound> {
    let target_ratings = store
        .ratings_of(target)
        .ok_or_else(|| RaterNotFound(target.to_string()))?;

    // Score every other rater in parallel, then sort once.
    let others: Vec<_> = store
        .iter()
        .filter(|(rater, _)| rater.as_str() != target)
        .collect();

    let mut scores: Vec<(f64, String)> = others
        .into_par_iter()
        .map(|(rater, ratings)| (metric.score_maps(target_ratings, ratings), rater.clone()))
        .collect();

    sort_descending(&mut scores);
    scores.truncate(n);
    Ok(scores)
}

/// Predicts scores for the items `target` has not rated, best first.
///
/// Every other rater with strictly positive similarity contributes
/// `rating * sim` to each unseen item's total; the prediction is the
/// similarity-weighted average across all such raters. Raters with zero
/// or negative similarity are ignored, so the result is empty when no
/// one correlates positively with the target.
///
/// Quirk carried over from the sample domain: an item the target rated
/// exactly 0.0 is treated as unseen and may be recommended.
pub fn recommendations(
    store: &PreferenceStore,
    target: &str,
    metric: Metric,
) -> Result<Vec<(f64, String)>, RaterNotFound> {
    let target_ratings = store
        .ratings_of(target)
        .ok_or_else(|| RaterNotFound(target.to_string()))?;

    let others: Vec<_> = store
        .iter()
        .filter(|(rater, _)| rater.as_str() != target)
        .collect();

    // Per-rater partial sums of (weighted total, similarity sum), merged
    // afterwards. The merge is plain addition, so partition order does
    // not matter.
    let partials: Vec<HashMap<&String, (f64, f64)>> = others
        .into_par_iter()
        .map(|(_, ratings)| {
            let mut partial = HashMap::new();
            let sim = metric.score_maps(target_ratings, ratings);
            if sim <= 0.0 {
                return partial;
            }
            for (item, &rating) in ratings {
                let seen = target_ratings.get(item).is_some_and(|&r| r != 0.0);
                if seen {
                    continue;
                }
                let entry = partial.entry(item).or_insert((0.0, 0.0));
                entry.0 += rating * sim;
                entry.1 += sim;
            }
            partial
        })
        .collect();

    let mut totals: HashMap<&String, (f64, f64)> = HashMap::new();
    for partial in partials {
        for (item, (weighted, sim_sum)) in partial {
            let entry = totals.entry(item).or_insert((0.0, 0.0));
            entry.0 += weighted;
            entry.1 += sim_sum;
        }
    }

    // sim_sum is nonzero whenever an item is present: it only accumulates
    // alongside a strictly positive similarity
    let mut rankings: Vec<(f64, String)> = totals
        .into_iter()
        .map(|(item, (weighted, sim_sum))| (weighted / sim_sum, item.clone()))
        .collect();

    sort_descending(&mut rankings);
    Ok(rankings)
}
