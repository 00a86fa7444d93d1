use crate::quadratic::{
    check_convexity, check_width, convexity_feedback, width_feedback, Convexity, Parabola,
    QuizVerdict, DEFAULT_SAMPLES, WINDOW,
};

#[test]
fn test_parabola_range() {
    assert!(Parabola::new(5.0).is_ok());
    assert!(Parabola::new(-5.0).is_ok());
    assert!(Parabola::new(5.1).is_err());
    assert!(Parabola::new(f64::NAN).is_err());
}

#[test]
fn test_parabola_shape() {
    assert_eq!(Parabola::new(2.0).unwrap().shape(), Convexity::OpensUpward);
    assert_eq!(Parabola::new(-0.5).unwrap().shape(), Convexity::OpensDownward);
    assert_eq!(Parabola::new(0.0).unwrap().shape(), Convexity::Flat);
}

#[test]
fn test_parabola_sampling() {
    let parabola = Parabola::new(0.5).unwrap();
    let points = parabola.sample(DEFAULT_SAMPLES);
    assert_eq!(points.len(), 400);
    assert_eq!(points[0].x, WINDOW.x_min);
    assert_eq!(points[0].y, 50.0);
    assert!((points[399].x - WINDOW.x_max).abs() < 1e-9);
    assert!(parabola.sample(0).is_empty());
}

#[test]
fn test_convexity_question() {
    assert_eq!(check_convexity(Convexity::OpensUpward), QuizVerdict::Correct);
    assert_eq!(check_convexity(Convexity::OpensDownward), QuizVerdict::Incorrect);
    assert_eq!(check_convexity(Convexity::Flat), QuizVerdict::Incorrect);
    assert!(convexity_feedback(QuizVerdict::Correct).starts_with("Correct!"));
}

#[test]
fn test_convexity_choices_parse() {
    assert_eq!("UP".parse::<Convexity>().unwrap(), Convexity::OpensUpward);
    assert_eq!("아래로 볼록".parse::<Convexity>().unwrap(), Convexity::OpensUpward);
    assert_eq!("위로 볼록".parse::<Convexity>().unwrap(), Convexity::OpensDownward);
    assert_eq!("flat".parse::<Convexity>().unwrap(), Convexity::Flat);
    assert!("sideways".parse::<Convexity>().is_err());
}

#[test]
fn test_width_question() {
    assert_eq!(check_width("좁아진다"), QuizVerdict::Correct);
    assert_eq!(check_width("폭이 좁아 진다"), QuizVerdict::Correct);
    assert_eq!(check_width("It gets Narrower"), QuizVerdict::Correct);
    assert_eq!(check_width("넓어진다"), QuizVerdict::Misconception);
    assert_eq!(check_width("  Wider "), QuizVerdict::Misconception);
    assert_eq!(check_width("it gets wider"), QuizVerdict::Incorrect);
    assert_eq!(check_width(""), QuizVerdict::Incorrect);
}

#[test]
fn test_width_feedback_distinguishes_misconception() {
    assert_ne!(
        width_feedback(QuizVerdict::Misconception),
        width_feedback(QuizVerdict::Incorrect)
    );
    assert!(width_feedback(QuizVerdict::Correct).contains("narrower"));
}
