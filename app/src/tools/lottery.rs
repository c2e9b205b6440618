//! FILENAME: app/src/tools/lottery.rs
//! PURPOSE: Mock lottery draw results.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of past draws shown per game.
pub const DRAW_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LotteryGame {
    #[serde(rename = "powerball")]
    Powerball,
    #[serde(rename = "megamillions")]
    MegaMillions,
}

impl LotteryGame {
    pub fn as_str(self) -> &'static str {
        match self {
            LotteryGame::Powerball => "powerball",
            LotteryGame::MegaMillions => "megamillions",
        }
    }

    /// Powerball draws 6 numbers, Mega Millions 7.
    pub fn number_count(self) -> usize {
        match self {
            LotteryGame::Powerball => 6,
            LotteryGame::MegaMillions => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryDraw {
    pub id: String,
    pub date: NaiveDate,
    pub numbers: Vec<u32>,
    pub jackpot: String,
    pub winners: u32,
}

/// Fabricates the last `DRAW_COUNT` draws, newest first, three days
/// apart. Numbers are 1..=69, jackpots $50M..$549M, 0..=4 winners.
pub fn generate_draws(rng: &mut impl Rng, game: LotteryGame) -> Vec<LotteryDraw> {
    let today = Utc::now().date_naive();

    (0..DRAW_COUNT)
        .map(|i| {
            let date = today - Duration::days(3 * i as i64);
            let numbers = (0..game.number_count())
                .map(|_| rng.random_range(1..=69))
                .collect();
            LotteryDraw {
                id: format!("{}-{}", game.as_str(), date),
                date,
                numbers,
                jackpot: format!("${}M", rng.random_range(50..550)),
                winners: rng.random_range(0..5),
            }
        })
        .collect()
}
