use katas::KatasError;
use katas::app::showcase::{
    Exercise, ODD_FREQUENCY_SAMPLES, ROMAN_SAMPLES, SQUARES_SAMPLES, run_exercise,
};
use katas::domain::squares::all_squares_present;

#[test]
fn test_tally_section() {
    let lines = run_exercise(Exercise::Tally).unwrap();
    assert_eq!(
        lines,
        vec![
            "Ejecutando ejercicio 1",
            "Cadena: a:3, b:4, a:6, f:0, h:2, b:10",
            "Respuesta: [a:9, b:14, f:0, h:2]",
        ]
    );
}

#[test]
fn test_squares_samples_verdicts() {
    let verdicts: Vec<bool> = SQUARES_SAMPLES
        .iter()
        .map(|s| all_squares_present(s.a, s.b))
        .collect();
    assert_eq!(verdicts, vec![true, false, false]);
}

#[test]
fn test_squares_section() {
    let lines = run_exercise(Exercise::Squares).unwrap();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Ejecutando ejercicio 2 - success");
    assert_eq!(lines[1], "[1, 2, 3, 4, 5] - [4, 25, 9, 1, 16]");
    assert!(lines[2].starts_with(":) Todos"));
    assert_eq!(lines[3], "Ejecutando ejercicio 2 - failed");
    assert!(lines[5].starts_with(":( No todos"));
    assert_eq!(lines[6], "   2 al cuadrado (4) no esta en el arreglo #2.");
    assert_eq!(lines[7], "[1, 2, 3, 4, 5] - []");
    assert!(lines[8].starts_with(":( No todos"));
}

#[test]
fn test_odd_frequency_section() {
    let lines = run_exercise(Exercise::OddFrequency).unwrap();
    let sample = format!("{:?}", ODD_FREQUENCY_SAMPLES[0]);
    assert_eq!(
        lines,
        vec![
            "Ejecutando ejercicio 3".to_string(),
            format!("{} -> El numero 9, aparece de formar impar 1 veces.", sample),
            format!("{} -> El numero 2, aparece de formar impar 3 veces.", sample),
            "respuesta: 9".to_string(),
            String::new(),
            "[2, 3, 4, 3, 4, 2, 5, 2, 5] -> El numero 2, aparece de formar impar 3 veces."
                .to_string(),
            "respuesta: 2".to_string(),
        ]
    );
}

#[test]
fn test_roman_section() {
    let lines = run_exercise(Exercise::Roman).unwrap();
    assert_eq!(lines.len(), ROMAN_SAMPLES.len() + 1);
    assert_eq!(
        &lines[1..],
        &[
            "25 a romano: XXV",
            "31 a romano: XXXI",
            "50 a romano: L",
            "2045 a romano: MMXLV",
        ]
    );
}

#[test]
fn test_unknown_exercise() {
    assert!(matches!(
        "fizz".parse::<Exercise>(),
        Err(KatasError::UnknownExercise(_))
    ));
}
