use crate::lotto::{generate_tickets, LottoDraw, Rank, Ticket};
use crate::{InversoError, QuizConfig};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ticket(numbers: [u8; 6]) -> Ticket {
    Ticket::new(numbers).unwrap()
}

#[test]
fn test_latest_draw() {
    let draw = LottoDraw::latest();
    assert_eq!(draw.round, 1195);
    assert_eq!(draw.date, NaiveDate::from_ymd_opt(2025, 10, 25).unwrap());
    assert_eq!(draw.numbers.numbers(), &[3, 15, 27, 33, 34, 36]);
    assert_eq!(draw.bonus, 37);
}

#[test]
fn test_rank_table() {
    let draw = LottoDraw::latest();
    let cases = [
        ([3, 15, 27, 33, 34, 36], Rank::First, 6, false),
        ([3, 15, 27, 33, 34, 37], Rank::Second, 5, true),
        ([3, 15, 27, 33, 34, 1], Rank::Third, 5, false),
        ([3, 15, 27, 33, 1, 37], Rank::Fourth, 4, true),
        ([3, 15, 27, 1, 2, 4], Rank::Fifth, 3, false),
        ([3, 15, 1, 2, 4, 37], Rank::NoPrize, 2, true),
        ([1, 2, 4, 5, 6, 7], Rank::NoPrize, 0, false),
    ];
    for (numbers, rank, matched, bonus_matched) in cases {
        let result = draw.check(&ticket(numbers));
        assert_eq!(result.rank, rank, "ticket {:?}", numbers);
        assert_eq!(result.matched, matched);
        assert_eq!(result.bonus_matched, bonus_matched);
    }
}

#[test]
fn test_ticket_validation() {
    assert_eq!(ticket([36, 3, 27, 15, 34, 33]).numbers(), &[3, 15, 27, 33, 34, 36]);
    assert!(Ticket::new([1, 1, 2, 3, 4, 5]).is_err());
    assert!(Ticket::new([0, 1, 2, 3, 4, 5]).is_err());
    assert!(Ticket::new([1, 2, 3, 4, 5, 46]).is_err());
}

#[test]
fn test_generated_tickets_are_valid() {
    let mut rng = StdRng::seed_from_u64(1195);
    for _ in 0..200 {
        let t = Ticket::generate(&mut rng);
        let numbers = t.numbers();
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(numbers.iter().all(|n| (1..=45).contains(n)));
    }
}

#[test]
fn test_generate_tickets_count_limits() {
    let mut rng = StdRng::seed_from_u64(2);
    let config = QuizConfig::default();

    assert_eq!(generate_tickets(&mut rng, 5, &config).unwrap().len(), 5);
    assert_eq!(generate_tickets(&mut rng, 1, &config).unwrap().len(), 1);
    assert!(matches!(
        generate_tickets(&mut rng, 0, &config),
        Err(InversoError::Config(_))
    ));
    assert!(matches!(
        generate_tickets(&mut rng, 6, &config),
        Err(InversoError::Config(_))
    ));
}

#[test]
fn test_ticket_display_and_serde() {
    let t = ticket([3, 15, 27, 33, 34, 36]);
    assert_eq!(t.to_string(), "3 | 15 | 27 | 33 | 34 | 36");
    assert_eq!(serde_json::to_string(&t).unwrap(), "[3,15,27,33,34,36]");
    assert!(serde_json::from_str::<Ticket>("[1,1,2,3,4,5]").is_err());
    assert!(serde_json::from_str::<Ticket>("[1,2,3]").is_err());
}

#[test]
fn test_rank_ordering() {
    assert!(Rank::First < Rank::Second);
    assert!(Rank::Fifth < Rank::NoPrize);
    assert_eq!(Rank::Second.to_string(), "2nd prize (5 matches + bonus)");
}
