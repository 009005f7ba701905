use clap::{Arg, Command};
use std::path::Path;
use std::time::Instant;

use affinity::ranking::top_matches;
use affinity::similarity::Metric;
use affinity::store::io::read_ratings_csv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Top Matches")
        .version("0.1.0")
        .about("Finds the raters most similar to a target rater")
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
            Arg::new("count")
                .long("count")
                .short('n')
                .value_name("COUNT")
                .help("Number of matches to return")
                .default_value("5"),
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
    let count = matches.get_one::<String>("count").unwrap().parse::<usize>()?;
    let metric = Metric::from_str(matches.get_one::<String>("metric").unwrap());

    println!("Loading ratings from {}", ratings_path);
    let start = Instant::now();
    let store = read_ratings_csv(Path::new(ratings_path))?;
    println!("Loaded {} raters in {:?}", store.len(), start.elapsed());

    let start = Instant::now();
    let result = top_matches(&store, target, count, metric)?;
    println!("Computed matches in {:?}", start.elapsed());

    for (score, rater) in &result {
        println!("{score:.6}  {rater}");
    }

    Ok(())
}
