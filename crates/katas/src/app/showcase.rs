//! Sample runs of every exercise
//!
//! Holds the fixed sample inputs and renders each run as console lines, so
//! the demo binary only has to print them.

use crate::domain::odd_frequency::first_odd_frequency;
use crate::domain::roman::to_roman;
use crate::domain::squares::{all_squares_present, first_missing_square};
use crate::domain::tally::aggregate;
use crate::error::{KatasError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One squared membership sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquaresSample {
    /// Section header printed before the run, if any
    pub header: Option<&'static str>,
    pub a: &'static [i32],
    pub b: &'static [i32],
}

pub const TALLY_SAMPLES: [&str; 1] = ["a:3, b:4, a:6, f:0, h:2, b:10"];

pub const SQUARES_SAMPLES: [SquaresSample; 3] = [
    SquaresSample {
        header: Some("Ejecutando ejercicio 2 - success"),
        a: &[1, 2, 3, 4, 5],
        b: &[4, 25, 9, 1, 16],
    },
    SquaresSample {
        header: Some("Ejecutando ejercicio 2 - failed"),
        a: &[1, 2, 3, 4, 5],
        b: &[1, 3, 100, 34, 9],
    },
    SquaresSample {
        header: None,
        a: &[1, 2, 3, 4, 5],
        b: &[],
    },
];

pub const ODD_FREQUENCY_SAMPLES: [&[i32]; 2] = [
    &[1, 10, 9, 1, 2, 3, 2, 7, 2, 1, 10, 3, 7, 1],
    &[2, 3, 4, 3, 4, 2, 5, 2, 5],
];

pub const ROMAN_SAMPLES: [i64; 4] = [25, 31, 50, 2045];

/// Exercise selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    Tally,
    Squares,
    OddFrequency,
    Roman,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Tally,
        Exercise::Squares,
        Exercise::OddFrequency,
        Exercise::Roman,
    ];

    /// Exercise number used in the console headers
    pub fn number(self) -> u8 {
        match self {
            Exercise::Tally => 1,
            Exercise::Squares => 2,
            Exercise::OddFrequency => 3,
            Exercise::Roman => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Exercise::Tally => "tally",
            Exercise::Squares => "squares",
            Exercise::OddFrequency => "odd",
            Exercise::Roman => "roman",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = KatasError;

    /// Accepts the exercise name or its number
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Exercise::ALL
            .into_iter()
            .find(|e| s.eq_ignore_ascii_case(e.name()) || s == e.number().to_string())
            .ok_or_else(|| KatasError::UnknownExercise(s.to_string()))
    }
}

/// Render one tally run
pub fn render_tally(input: &str) -> Result<Vec<String>> {
    let totals = aggregate(input)?;
    Ok(vec![
        format!("Cadena: {}", input),
        format!("Respuesta: [{}]", totals.join(", ")),
    ])
}

/// Render one squared membership run
///
/// A failed check on sequences of equal length also names the first value
/// whose square is missing.
pub fn render_squares(a: &[i32], b: &[i32]) -> Vec<String> {
    let mut lines = vec![format!("{:?} - {:?}", a, b)];

    if all_squares_present(a, b) {
        lines.push(
            ":) Todos los elementos del arreglo #1 estan en el arreglo #2 elevados al cuadrado."
                .to_string(),
        );
        return lines;
    }

    lines.push(
        ":( No todos los elementos del arreglo #1 estan en el arreglo #2 elevados al cuadrado."
            .to_string(),
    );
    if a.len() == b.len() {
        if let Some(v) = first_missing_square(a, b) {
            let v = i64::from(v);
            lines.push(format!("   {} al cuadrado ({}) no esta en el arreglo #2.", v, v * v));
        }
    }
    lines
}

/// Render one odd frequency run: the diagnostic lines, then the answer
pub fn render_odd_frequency(values: &[i32]) -> Result<Vec<String>> {
    let found = first_odd_frequency(values)?;
    let mut lines = found.diagnostics;
    lines.push(format!("respuesta: {}", found.value));
    Ok(lines)
}

/// Render one Roman numeral run
pub fn render_roman(n: i64) -> Result<String> {
    Ok(format!("{} a romano: {}", n, to_roman(n)?))
}

/// Run every sample of one exercise
///
/// The first line is the exercise header; runs of the same exercise are
/// separated by blank lines where the console layout calls for it.
pub fn run_exercise(exercise: Exercise) -> Result<Vec<String>> {
    debug!(%exercise, "running samples");

    let header = format!("Ejecutando ejercicio {}", exercise.number());
    let mut lines = Vec::new();

    match exercise {
        Exercise::Tally => {
            lines.push(header);
            for input in TALLY_SAMPLES {
                lines.extend(render_tally(input)?);
            }
        }
        Exercise::Squares => {
            // Sample headers replace the generic one
            for sample in SQUARES_SAMPLES {
                if let Some(h) = sample.header {
                    lines.push(h.to_string());
                }
                lines.extend(render_squares(sample.a, sample.b));
            }
        }
        Exercise::OddFrequency => {
            lines.push(header);
            for (i, values) in ODD_FREQUENCY_SAMPLES.into_iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(render_odd_frequency(values)?);
            }
        }
        Exercise::Roman => {
            lines.push(header);
            for n in ROMAN_SAMPLES {
                lines.push(render_roman(n)?);
            }
        }
    }

    Ok(lines)
}

/// Run every exercise in order, one section per exercise
pub fn run_all() -> Result<Vec<Vec<String>>> {
    Exercise::ALL.into_iter().map(run_exercise).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_from_str() {
        assert_eq!("tally".parse::<Exercise>().unwrap(), Exercise::Tally);
        assert_eq!("ODD".parse::<Exercise>().unwrap(), Exercise::OddFrequency);
        assert_eq!("4".parse::<Exercise>().unwrap(), Exercise::Roman);
        assert_eq!(
            "fizzbuzz".parse::<Exercise>(),
            Err(KatasError::UnknownExercise("fizzbuzz".to_string()))
        );
    }

    #[test]
    fn test_exercise_name_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(exercise.to_string().parse::<Exercise>().unwrap(), exercise);
        }
    }

    #[test]
    fn test_render_tally() {
        let lines = render_tally(TALLY_SAMPLES[0]).unwrap();
        assert_eq!(
            lines,
            vec![
                "Cadena: a:3, b:4, a:6, f:0, h:2, b:10",
                "Respuesta: [a:9, b:14, f:0, h:2]",
            ]
        );
    }

    #[test]
    fn test_render_tally_error() {
        assert!(matches!(
            render_tally("a:x"),
            Err(KatasError::Tally(_))
        ));
    }

    #[test]
    fn test_render_squares() {
        let lines = render_squares(&[1, 2], &[4, 1]);
        assert_eq!(lines[0], "[1, 2] - [4, 1]");
        assert!(lines[1].starts_with(":)"));

        let lines = render_squares(&[1, 2, 3, 4, 5], &[]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[1, 2, 3, 4, 5] - []");
        assert!(lines[1].starts_with(":("));
    }

    #[test]
    fn test_render_squares_names_missing_value() {
        let lines = render_squares(&[1, 2, 3, 4, 5], &[1, 3, 100, 34, 9]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(":("));
        assert_eq!(lines[2], "   2 al cuadrado (4) no esta en el arreglo #2.");

        // Length mismatch fails before any lookup
        let lines = render_squares(&[1, 2], &[1, 4, 9]);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_odd_frequency() {
        let lines = render_odd_frequency(ODD_FREQUENCY_SAMPLES[1]).unwrap();
        assert_eq!(
            lines,
            vec![
                "[2, 3, 4, 3, 4, 2, 5, 2, 5] -> El numero 2, aparece de formar impar 3 veces.",
                "respuesta: 2",
            ]
        );
    }

    #[test]
    fn test_render_odd_frequency_not_found() {
        assert!(matches!(
            render_odd_frequency(&[1, 1]),
            Err(KatasError::OddFrequency(_))
        ));
    }

    #[test]
    fn test_render_roman() {
        assert_eq!(render_roman(2045).unwrap(), "2045 a romano: MMXLV");
        assert!(matches!(render_roman(-3), Err(KatasError::Roman(_))));
    }

    #[test]
    fn test_run_all_sections() {
        let sections = run_all().unwrap();
        assert_eq!(sections.len(), Exercise::ALL.len());
        assert_eq!(sections[0][0], "Ejecutando ejercicio 1");
        assert_eq!(sections[1][0], "Ejecutando ejercicio 2 - success");
        assert_eq!(sections[2][0], "Ejecutando ejercicio 3");
        assert_eq!(sections[3][0], "Ejecutando ejercicio 4");
    }
}
