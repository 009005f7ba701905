use clap::{Arg, Command};
use std::path::Path;
use std::time::Instant;

use affinity::ranking::recommendations;
use affinity::similarity::Metric;
use affinity::store::io::read_ratings_csv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Recommend")
        .version("0.1.0")
        .about("Predicts scores for the items a rater has not seen yet")
        .arg(
            Arg::new("ratings")
                .long("ratings")
                .short('r')
                .value_name("FILE")
                .help("Ratings CSV file (rater,item,rating)")
                .required(true),
        )
        .arg(
            Arg::new("rater")
                .long("rater")
                .short('t')
                .value_name("NAME")
                .help("Target rater")
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
    let target = matches.get_one::<String>("rater").unwrap();
    let metric = Metric::from_str(matches.get_one::<String>("metric").unwrap());

    println!("Loading ratings from {}", ratings_path);
    let start = Instant::now();
    let store = read_ratings_csv(Path::new(ratings_path))?;
    println!("Loaded {} raters in {:?}", store.len(), start.elapsed());

    let start = Instant::now();
    let result = recommendations(&store, target, metric)?;
    println!(
        "Computed {} recommendations in {:?}",
        result.len(),
        start.elapsed()
    );

    for (score, item) in &result {
        println!("{score:.6}  {item}");
    }

    Ok(())
}
