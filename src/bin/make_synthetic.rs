use clap::{Arg, Command};
use std::path::Path;
use std::time::Instant;

use affinity::store::io::write_ratings_csv;
use affinity::store::synthetic::synthetic_store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Make Synthetic")
        .version("0.1.0")
        .about("Generates a random sparse ratings CSV for benchmarking")
        .arg(
            Arg::new("raters")
                .long("raters")
                .short('r')
                .value_name("COUNT")
                .help("Number of raters")
                .default_value("1000"),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .short('i')
                .value_name("COUNT")
                .help("Number of items")
                .default_value("500"),
        )
        .arg(
            Arg::new("density")
                .long("density")
                .short('d')
                .value_name("PROB")
                .help("Probability that a given rater scores a given item")
                .default_value("0.05"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path for the ratings CSV")
                .required(true),
        )
        .get_matches();

    let raters = matches.get_one::<String>("raters").unwrap().parse::<usize>()?;
    let items = matches.get_one::<String>("items").unwrap().parse::<usize>()?;
    let density = matches.get_one::<String>("density").unwrap().parse::<f64>()?;
    let output_path = matches.get_one::<String>("output").unwrap();

    if !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be in [0, 1], got {density}").into());
    }

    println!("Generating {raters} raters x {items} items at density {density}");
    let start = Instant::now();
    let store = synthetic_store(raters, items, density);
    let total: usize = store.iter().map(|(_, ratings)| ratings.len()).sum();
    println!("Generated {total} ratings in {:?}", start.elapsed());

    let start = Instant::now();
    write_ratings_csv(Path::new(output_path), &store)?;
    println!("Wrote {} in {:?}", output_path, start.elapsed());

    Ok(())
}
