//! Spot-price collaborator: fetch today's Agile half-hour rates and reduce
//! them to day-level statistics.
//!
//! The fetch is best effort. Absence or error from the rate source yields an
//! empty record set, which the summarizer turns into the explicit no-data
//! summary; nothing here ever fails the run.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Europe::London;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{SpotPrice, SpotPriceSummary};
use crate::util::round_dp;

/// How many of the cheapest slots to surface in the summary.
const CHEAPEST_SLOT_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RatesPage {
    results: Vec<RateRow>,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    valid_from: DateTime<Utc>,
    valid_to: DateTime<Utc>,
    value_inc_vat: f64,
}

/// Fetch the spot unit rates covering the current UK local day. Any network,
/// HTTP or decode failure is reported and swallowed into an empty vec.
pub fn fetch_spot_prices(rates_url: &str, timeout: Duration) -> Vec<SpotPrice> {
    match try_fetch(rates_url, timeout) {
        Ok(prices) => prices,
        Err(e) => {
            eprintln!("Spot price fetch failed: {e}; continuing without spot data");
            Vec::new()
        }
    }
}

fn try_fetch(rates_url: &str, timeout: Duration) -> Result<Vec<SpotPrice>> {
    let (period_from, period_to) = london_day_window().unwrap_or_else(utc_day_window);

    let client = Client::builder().timeout(timeout).build()?;
    let page: RatesPage = client
        .get(rates_url)
        .query(&[
            ("period_from", period_from.to_rfc3339()),
            ("period_to", period_to.to_rfc3339()),
            ("page_size", "5000".to_string()),
        ])
        .send()?
        .error_for_status()?
        .json()?;

    Ok(page
        .results
        .into_iter()
        .map(|row| SpotPrice {
            valid_from: row.valid_from,
            valid_to: row.valid_to,
            price_p_per_kwh: row.value_inc_vat,
        })
        .collect())
}

/// UTC bounds of the current calendar day in Europe/London.
fn london_day_window() -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let today = Utc::now().with_timezone(&London).date_naive();
    let start = today
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(London)
        .earliest()?;
    let end = start + chrono::Duration::days(1);
    Some((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

fn utc_day_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();
    (start, start + chrono::Duration::days(1))
}

// ---------------------------------------------------------------------------
// Summarize
// ---------------------------------------------------------------------------

/// Reduce a day's spot records to average/min/max (3 dp) and the cheapest
/// slot lines. Empty input yields the no-data summary. Slots tied on price
/// keep their chronological order (stable sort).
pub fn summarize(prices: &[SpotPrice]) -> SpotPriceSummary {
    if prices.is_empty() {
        return SpotPriceSummary::no_data();
    }

    let values: Vec<f64> = prices.iter().map(|p| p.price_p_per_kwh).collect();
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average = values.iter().sum::<f64>() / values.len() as f64;

    let mut ranked: Vec<&SpotPrice> = prices.iter().collect();
    ranked.sort_by(|a, b| a.price_p_per_kwh.total_cmp(&b.price_p_per_kwh));

    let cheapest_slots = ranked
        .iter()
        .take(CHEAPEST_SLOT_COUNT)
        .map(|p| render_slot(p))
        .collect();

    SpotPriceSummary {
        has_data: true,
        average: Some(round_dp(average, 3)),
        low: Some(round_dp(low, 3)),
        high: Some(round_dp(high, 3)),
        cheapest_slots,
    }
}

fn render_slot(price: &SpotPrice) -> String {
    format!(
        "{} — {} · {:.2} p/kWh",
        price.valid_from.format("%Y-%m-%d %H:%M"),
        price.valid_to.format("%Y-%m-%d %H:%M"),
        price.price_p_per_kwh,
    )
}
