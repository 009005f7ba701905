//! csv loading and dumping of ratings data
//!
//! Ratings files are headered csv with one `rater,item,rating` row per
//! score. Similarity dumps are `rater_a,rater_b,score` rows covering
//! every distinct pair once.

use std::path::Path;

use itertools::Itertools;

use super::matrix::SimilarityMatrix;
use super::PreferenceStore;

#[derive(Debug, thiserror::Error)]
pub enum RatingsCsvError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected 3 fields, got {got}")]
    BadShape { row: usize, got: usize },
    #[error("row {row}: bad rating '{value}'")]
    BadRating { row: usize, value: String },
}

/// Reads a `rater,item,rating` csv file into a preference store.
pub fn read_ratings_csv(path: &Path) -> Result<PreferenceStore, RatingsCsvError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut store = PreferenceStore::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 3 {
            return Err(RatingsCsvError::BadShape {
                row,
                got: record.len(),
            });
        }
        let rating: f64 = record[2].parse().map_err(|_| RatingsCsvError::BadRating {
            row,
            value: record[2].to_string(),
        })?;
        store.insert(&record[0], &record[1], rating);
    }

    Ok(store)
}

/// Writes a store back out, rows sorted by rater then item so output is
/// deterministic.
pub fn write_ratings_csv(path: &Path, store: &PreferenceStore) -> Result<(), RatingsCsvError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["rater", "item", "rating"])?;

    let rows = store
        .iter()
        .flat_map(|(rater, ratings)| {
            ratings
                .iter()
                .map(move |(item, rating)| (rater, item, *rating))
        })
        .sorted_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));

    for (rater, item, rating) in rows {
        writer.write_record([rater.as_str(), item.as_str(), rating.to_string().as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Dumps a precomputed similarity matrix as `rater_a,rater_b,score` rows.
pub fn write_similarity_csv(path: &Path, matrix: &SimilarityMatrix) -> Result<(), RatingsCsvError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["rater_a", "rater_b", "score"])?;

    for (a, b, score) in matrix.pairs() {
        writer.write_record([a, b, score.to_string().as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
