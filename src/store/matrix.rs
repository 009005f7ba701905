//! A precomputed matrix of pairwise rater similarities over a store.

use itertools::Itertools;
use rayon::prelude::*;

use super::PreferenceStore;
use crate::similarity::Metric;

/// Upper-triangular cache of every distinct rater pair's similarity.
/// Raters are indexed in lexicographic order of their identifiers.
pub struct SimilarityMatrix {
    raters: Vec<String>,
    scores: Vec<Vec<f64>>,
    n: usize,
}

impl SimilarityMatrix {
    pub fn new(store: &PreferenceStore, metric: Metric) -> SimilarityMatrix {
        Self::build(store, metric, false)
    }

    pub fn new_with_progress_bar(store: &PreferenceStore, metric: Metric) -> SimilarityMatrix {
        Self::build(store, metric, true)
    }

    fn build(store: &PreferenceStore, metric: Metric, progress: bool) -> SimilarityMatrix {
        let entries: Vec<_> = store.iter().sorted_by(|a, b| a.0.cmp(b.0)).collect();
        let n = entries.len();

        let mut scores: Vec<Vec<f64>> = vec![Vec::new(); n.saturating_sub(1)];
        for (i, row) in scores.iter_mut().enumerate() {
            row.reserve(n - i - 1);
        }

        let fill_row = |(i, row): (usize, &mut Vec<f64>)| {
            row.extend((i + 1..n).map(|j| metric.score_maps(entries[i].1, entries[j].1)));
        };

        if progress {
            use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};

            let pb = ProgressBar::new(n.saturating_sub(1) as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
                    .unwrap()
                    .progress_chars("█▓░"),
            );
            pb.set_message("Building similarity matrix");

            scores
                .par_iter_mut()
                .progress_with(pb.clone())
                .enumerate()
                .for_each(fill_row);

            let elapsed = pb.elapsed();
            println!(
                "Similarity matrix built in {}.{:03} seconds",
                elapsed.as_secs(),
                elapsed.subsec_millis()
            );
        } else {
            scores.par_iter_mut().enumerate().for_each(fill_row);
        }

        SimilarityMatrix {
            raters: entries.into_iter().map(|(name, _)| name.clone()).collect(),
            scores,
            n,
        }
    }

    /// rater identifiers in index order
    pub fn raters(&self) -> &[String] {
        &self.raters
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// similarity between raters `i` and `j` by index; the diagonal is
    /// not stored
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert_ne!(i, j, "diagonal similarities are not stored");
        if i < j {
            self.scores[i][j - i - 1]
        } else {
            self.scores[j][i - j - 1]
        }
    }

    /// similarity between two raters by identifier; None if either is
    /// unknown or both name the same rater
    pub fn score_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.raters.binary_search_by(|r| r.as_str().cmp(a)).ok()?;
        let j = self.raters.binary_search_by(|r| r.as_str().cmp(b)).ok()?;
        if i == j {
            return None;
        }
        Some(self.get(i, j))
    }

    /// every distinct pair once, in index order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            (i + 1..self.n).map(move |j| (self.raters[i].as_str(), self.raters[j].as_str(), self.get(i, j)))
        })
    }
}
