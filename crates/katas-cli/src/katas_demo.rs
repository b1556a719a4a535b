//! Exercise demo CLI
//!
//! Usage: katas_demo [tally|squares|odd|roman|all]
//! Example:
//!   katas_demo
//!   katas_demo roman
//!   katas_demo 3
//!
//! Runs the fixed sample inputs of each exercise and prints the results.

mod logging;

use katas::app::showcase::{Exercise, run_all, run_exercise};
use std::env;

fn print_section(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [tally|squares|odd|roman|all]", args[0]);
        std::process::exit(1);
    }

    let selection = args.get(1).map(String::as_str).unwrap_or("all");

    let sections = if selection.eq_ignore_ascii_case("all") {
        run_all()
    } else {
        match selection.parse::<Exercise>() {
            Ok(exercise) => run_exercise(exercise).map(|lines| vec![lines]),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    let sections = match sections {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "sample run failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_section(section);
    }
}
