//! Roman numeral conversion CLI
//!
//! Usage: katas_roman <value>...
//! Integers are encoded, anything else is decoded.
//!
//! Example:
//!   katas_roman 2045 MCMXCIV
//!   2045 -> MMXLV
//!   MCMXCIV -> 1994
//!
//! Every argument is processed; the exit code is 1 if any of them failed.

mod logging;

use katas::constants::{ROMAN_MAX, ROMAN_MIN};
use katas::domain::roman::RomanError;
use katas::{from_roman, to_roman};
use std::env;

/// Convert one argument in whichever direction it calls for
fn convert(arg: &str) -> Result<String, RomanError> {
    match arg.trim().parse::<i64>() {
        Ok(n) => {
            let roman = to_roman(n)?;
            let conventional =
                u64::try_from(n).is_ok_and(|v| (ROMAN_MIN..=ROMAN_MAX).contains(&v));
            if !conventional {
                tracing::warn!(
                    n,
                    "outside the conventional range {}..={}",
                    ROMAN_MIN,
                    ROMAN_MAX
                );
            }
            Ok(format!("{} -> {}", n, roman))
        }
        Err(_) => {
            let n = from_roman(arg)?;
            Ok(format!("{} -> {}", arg.trim(), n))
        }
    }
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <value>...", args[0]);
        eprintln!(
            "Integers ({}-{}) are encoded, Roman numerals are decoded.",
            ROMAN_MIN, ROMAN_MAX
        );
        std::process::exit(1);
    }

    let mut failed = 0;
    for arg in &args[1..] {
        match convert(arg) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
