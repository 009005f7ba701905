use std::env::args;
use std::path::Path;
use std::time::Instant;

use itertools::Itertools;

use affinity::ranking::{recommendations, top_matches, DEFAULT_MATCHES};
use affinity::similarity::Metric;
use affinity::store::io::read_ratings_csv;

fn main() {
    let default_ratings = String::from("data/movie_critics.csv");

    let ratings_arg = args().nth(1).unwrap_or(default_ratings);
    let rater = args().nth(2).unwrap_or(String::from("Toby"));

    let mut start = Instant::now();

    let store = read_ratings_csv(Path::new(&ratings_arg)).expect("Failed to read ratings file");

    let elapsed = start.elapsed();
    println!(
        "read {} raters in {}.{:03} seconds",
        store.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    start = Instant::now();

    let matches =
        top_matches(&store, &rater, DEFAULT_MATCHES, Metric::Pearson).expect("rater not in store");

    let elapsed = start.elapsed();
    println!(
        "computed top matches in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    println!(
        "raters most similar to {rater}: {}",
        matches
            .iter()
            .map(|(score, other)| format!("{other} ({score:.3})"))
            .join(", ")
    );

    start = Instant::now();

    let recs = recommendations(&store, &rater, Metric::Pearson).expect("rater not in store");

    let elapsed = start.elapsed();
    println!(
        "computed {} recommendations in {}.{:03} seconds",
        recs.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    println!(
        "recommendations for {rater}: {}",
        recs.iter()
            .map(|(score, item)| format!("{item} ({score:.3})"))
            .join(", ")
    );
}
