//! 6/45 lottery tickets and ranking against a published draw

use crate::{InversoError, InversoResult, QuizConfig};
use chrono::NaiveDate;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LOWEST_NUMBER: u8 = 1;
pub const HIGHEST_NUMBER: u8 = 45;
pub const NUMBERS_PER_TICKET: usize = 6;

/// Six distinct numbers in `1..=45`, ascending
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    pub fn new(numbers: [u8; NUMBERS_PER_TICKET]) -> InversoResult<Self> {
        let mut sorted = numbers;
        sorted.sort_unstable();
        if let Some(&bad) = sorted
            .iter()
            .find(|&&n| !(LOWEST_NUMBER..=HIGHEST_NUMBER).contains(&n))
        {
            return Err(InversoError::Engine(format!(
                "Lottery number {} is outside {}..={}",
                bad, LOWEST_NUMBER, HIGHEST_NUMBER
            )));
        }
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(InversoError::Engine(
                "Lottery numbers must be distinct".to_string(),
            ));
        }
        Ok(Self { numbers: sorted })
    }

    /// Draw six distinct numbers uniformly
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers = [0u8; NUMBERS_PER_TICKET];
        let picks = index::sample(rng, HIGHEST_NUMBER as usize, NUMBERS_PER_TICKET);
        for (slot, pick) in numbers.iter_mut().zip(picks.iter()) {
            *slot = pick as u8 + LOWEST_NUMBER;
        }
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8; NUMBERS_PER_TICKET] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = InversoError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        let count = numbers.len();
        let numbers: [u8; NUMBERS_PER_TICKET] = numbers.try_into().map_err(|_| {
            InversoError::Engine(format!(
                "A ticket has {} numbers, got {}",
                NUMBERS_PER_TICKET, count
            ))
        })?;
        Ticket::new(numbers)
    }
}

impl From<Ticket> for Vec<u8> {
    fn from(ticket: Ticket) -> Self {
        ticket.numbers.to_vec()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(" | "))
    }
}

/// Generate `count` tickets, between 1 and the configured maximum
pub fn generate_tickets<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    config: &QuizConfig,
) -> InversoResult<Vec<Ticket>> {
    if count == 0 || count > config.max_lotto_tickets {
        return Err(InversoError::Config(format!(
            "Ticket count must be between 1 and {}, got {}",
            config.max_lotto_tickets, count
        )));
    }
    Ok((0..count).map(|_| Ticket::generate(rng)).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoPrize,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::First => "1st prize (6 matches)",
            Rank::Second => "2nd prize (5 matches + bonus)",
            Rank::Third => "3rd prize (5 matches)",
            Rank::Fourth => "4th prize (4 matches)",
            Rank::Fifth => "5th prize (3 matches)",
            Rank::NoPrize => "no prize (2 or fewer matches)",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResult {
    pub rank: Rank,
    pub matched: usize,
    pub bonus_matched: bool,
}

/// A published draw: six winning numbers and a bonus number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LottoDraw {
    pub round: u32,
    pub date: NaiveDate,
    pub numbers: Ticket,
    pub bonus: u8,
}

impl LottoDraw {
    /// Round 1195, drawn on 2025-10-25
    pub fn latest() -> Self {
        Self {
            round: 1195,
            date: NaiveDate::from_ymd_opt(2025, 10, 25).unwrap_or_default(),
            numbers: Ticket {
                numbers: [3, 15, 27, 33, 34, 36],
            },
            bonus: 37,
        }
    }

    pub fn check(&self, ticket: &Ticket) -> TicketResult {
        let matched = ticket
            .numbers()
            .iter()
            .filter(|&&n| self.numbers.contains(n))
            .count();
        let bonus_matched = ticket.contains(self.bonus);

        let rank = match (matched, bonus_matched) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::NoPrize,
        };

        TicketResult {
            rank,
            matched,
            bonus_matched,
        }
    }
}
