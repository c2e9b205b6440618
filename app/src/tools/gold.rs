//! FILENAME: app/src/tools/gold.rs
//! PURPOSE: Mock gold price series for the price tracker tool.
//! CONTEXT: A clamped random walk, one point per day over the selected
//! timeframe. Refresh re-rolls only the latest point, like the original
//! page did behind its fake loading delay.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const FLOOR: f64 = 1700.0;
const CEILING: f64 = 2100.0;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Timeframe {
    pub fn days(self) -> i64 {
        match self {
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 90,
            Timeframe::SixMonths => 180,
            Timeframe::OneYear => 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldStats {
    pub current_price: f64,
    pub daily_change: f64,
    pub daily_change_pct: f64,
}

// ============================================================================
// GENERATION
// ============================================================================

/// One point per day, oldest first, ending today. The walk starts at
/// 1800 + [0, 200) and steps by +/-10 a day, bounced back inside
/// [1700, 2100].
pub fn generate_series(rng: &mut impl Rng, timeframe: Timeframe) -> Vec<GoldPricePoint> {
    let today = Utc::now().date_naive();
    let days = timeframe.days();

    let mut price = 1800.0 + rng.random_range(0.0..200.0);
    let mut series = Vec::with_capacity(days as usize + 1);

    for i in (0..=days).rev() {
        price += rng.random_range(-10.0..10.0);
        if price < FLOOR {
            price = FLOOR + rng.random_range(0.0..50.0);
        }
        if price > CEILING {
            price = CEILING - rng.random_range(0.0..50.0);
        }
        series.push(GoldPricePoint {
            date: today - Duration::days(i),
            price: round_cents(price),
        });
    }

    series
}

/// Re-rolls only the latest point by +/-5, keeping the rest of the
/// series untouched.
pub fn refresh_latest(rng: &mut impl Rng, series: &mut [GoldPricePoint]) {
    if let Some(last) = series.last_mut() {
        last.price = round_cents(last.price + rng.random_range(-5.0..5.0));
    }
}

/// Current price plus day-over-day change. None for an empty series;
/// changes are zero when there is only one point.
pub fn stats(series: &[GoldPricePoint]) -> Option<GoldStats> {
    let last = series.last()?;
    match series.len() {
        1 => Some(GoldStats {
            current_price: last.price,
            daily_change: 0.0,
            daily_change_pct: 0.0,
        }),
        _ => {
            let previous = &series[series.len() - 2];
            let change = last.price - previous.price;
            Some(GoldStats {
                current_price: last.price,
                daily_change: change,
                daily_change_pct: change / previous.price * 100.0,
            })
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
