use clap::{Arg, Command};
use std::path::Path;
use std::time::Instant;

use affinity::similarity::Metric;
use affinity::store::io::{read_ratings_csv, write_similarity_csv};
use affinity::store::matrix::SimilarityMatrix;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Similarity Matrix")
        .version("0.1.0")
        .about("Precomputes pairwise rater similarities and writes them as CSV")
        .arg(
            Arg::new("ratings")
                .long("ratings")
                .short('r')
                .value_name("FILE")
                .help("Ratings CSV file (rater,item,rating)")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path for the pairwise scores")
                .required(true),
        )
        .arg(
            Arg::new("metric")
                .long("metric")
                .short('m')
                .value_name("NAME")
                .help("Similarity metric: pearson or distance")
                .default_value("pearson"),
        )
        .get_matches();

    let ratings_path = matches.get_one::<String>("ratings").unwrap();
    let output_path = matches.get_one::<String>("output").unwrap();
    let metric = Metric::from_str(matches.get_one::<String>("metric").unwrap());

    println!("Loading ratings from {}", ratings_path);
    let start = Instant::now();
    let store = read_ratings_csv(Path::new(ratings_path))?;
    println!("Loaded {} raters in {:?}", store.len(), start.elapsed());

    let matrix = SimilarityMatrix::new_with_progress_bar(&store, metric);

    println!("Writing pairwise scores to {}", output_path);
    let start = Instant::now();
    write_similarity_csv(Path::new(output_path), &matrix)?;
    println!(
        "Wrote {} pairs in {:?}",
        matrix.len() * matrix.len().saturating_sub(1) / 2,
        start.elapsed()
    );
    println!("Done!");

    Ok(())
}
