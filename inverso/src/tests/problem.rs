use crate::algebra::Mobius;
use crate::{InversoError, Problem, QuizConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_problem_new_validates() {
    assert!(Problem::new(2, 1, 3, -1).is_ok());

    match Problem::new(1, 2, 0, 3) {
        Err(InversoError::InvalidProblem(msg)) => assert!(msg.contains("c = 0")),
        other => panic!("Expected invalid problem, got {:?}", other),
    }
    match Problem::new(2, 4, 1, 2) {
        Err(InversoError::InvalidProblem(msg)) => assert!(msg.contains("ad - bc = 0")),
        other => panic!("Expected invalid problem, got {:?}", other),
    }
    assert!(Problem::new(i64::MIN, 0, 1, 1).is_err());
}

#[test]
fn test_canonical_inverse() {
    let problem = Problem::new(2, 1, 3, -1).unwrap();
    assert_eq!(problem.canonical_inverse(), Mobius::new(1, 1, 3, -2));
    assert_eq!(problem.to_string(), "f(x) = (2x + 1)/(3x - 1)");
    assert_eq!(problem.to_latex(), "f(x) = \\frac{2x + 1}{3x - 1}");
}

#[test]
fn test_generate_respects_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = QuizConfig::default();
    for _ in 0..500 {
        let problem = Problem::generate(&mut rng, &config).unwrap();
        assert_ne!(problem.c(), 0);
        assert!(!problem.function().is_degenerate());
        for value in problem.function().to_array() {
            assert!((-5..=5).contains(&value));
        }
    }
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let config = QuizConfig::default();
    let first = Problem::generate(&mut StdRng::seed_from_u64(42), &config).unwrap();
    let second = Problem::generate(&mut StdRng::seed_from_u64(42), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_with_positive_range() {
    let config = QuizConfig {
        min_coefficient: 1,
        max_coefficient: 3,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let problem = Problem::generate(&mut rng, &config).unwrap();
        assert!((1..=3).contains(&problem.c()));
    }
}

#[test]
fn test_generate_rejects_bad_config() {
    let mut rng = StdRng::seed_from_u64(1);

    let empty = QuizConfig {
        min_coefficient: 3,
        max_coefficient: -3,
        ..QuizConfig::default()
    };
    assert!(matches!(
        Problem::generate(&mut rng, &empty),
        Err(InversoError::Config(_))
    ));

    let only_zero = QuizConfig {
        min_coefficient: 0,
        max_coefficient: 0,
        ..QuizConfig::default()
    };
    assert!(matches!(
        Problem::generate(&mut rng, &only_zero),
        Err(InversoError::Config(_))
    ));
}

#[test]
fn test_generate_gives_up_when_nothing_is_invertible() {
    // Every draw is (1, 1, 1, 1), which is constant
    let config = QuizConfig {
        min_coefficient: 1,
        max_coefficient: 1,
        max_generation_attempts: 20,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    match Problem::generate(&mut rng, &config) {
        Err(InversoError::Engine(msg)) => assert!(msg.contains("20 attempts")),
        other => panic!("Expected engine error, got {:?}", other),
    }
}

#[test]
fn test_problem_serde() {
    let problem = Problem::new(2, 1, 3, -1).unwrap();
    let json = serde_json::to_string(&problem).unwrap();
    assert_eq!(json, r#"{"a":2,"b":1,"c":3,"d":-1}"#);

    let back: Problem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, problem);

    assert!(serde_json::from_str::<Problem>(r#"{"a":1,"b":2,"c":0,"d":1}"#).is_err());
    assert!(serde_json::from_str::<Problem>(r#"{"a":2,"b":4,"c":1,"d":2}"#).is_err());
}

#[test]
fn test_config_validation() {
    assert!(QuizConfig::default().validate().is_ok());

    let no_samples = QuizConfig {
        samples_per_branch: 1,
        ..QuizConfig::default()
    };
    assert!(no_samples.validate().is_err());

    let flat_margin = QuizConfig {
        vertical_margin: 0.0,
        ..QuizConfig::default()
    };
    assert!(flat_margin.validate().is_err());

    let no_tickets = QuizConfig {
        max_lotto_tickets: 0,
        ..QuizConfig::default()
    };
    assert!(no_tickets.validate().is_err());
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: QuizConfig = serde_json::from_str(r#"{"max_coefficient": 9}"#).unwrap();
    assert_eq!(config.max_coefficient, 9);
    assert_eq!(config.min_coefficient, -5);
    assert_eq!(config.samples_per_branch, 300);
}
