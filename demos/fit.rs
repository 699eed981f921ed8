//! Count how many regions in a puzzle input fit their required shapes.
//! Usage:
//!
//! ```bash
//! cargo run --release --example fit -- input.txt
//! ```

use region_fit::{count_fitting, parse::parse_input};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("input file needed");
        std::process::exit(1);
    }

    let input = match std::fs::read_to_string(&args[1]) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("failed to read input {:?}: {}", args[1], err);
            std::process::exit(1);
        }
    };

    let (shapes, regions) = match parse_input(&input) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("parse error: {}", err);
            std::process::exit(1);
        }
    };

    println!("{}", count_fitting(&shapes, &regions));
}
