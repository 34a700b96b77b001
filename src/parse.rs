//! Parsers for the cap period sentence and the per-fuel rate tables.
//!
//! The source page's wording is not contractually stable, so both parsers are
//! allowed to fail cheaply with [`ReportError::Parse`]; reliability comes from
//! the resolver's fallback ladder, not from parser robustness.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{ReportError, Result};

/// Suffix appended to every parsed period label.
pub const PERIOD_LABEL_SUFFIX: &str = " (default tariff cap)";

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Between\s+(\d{1,2})\s+([A-Za-z]+)\s+and\s+(\d{1,2})\s+([A-Za-z]+)\s+(\d{4}),\s+the energy price cap is set at £\s*([\d,]+(?:\.\d+)?)\s*per year",
    )
    .expect("valid period regex")
});

static ELEC_RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Electricity\s+([\d.]+)\s+pence per (?:kilowatt hour\s*\(kWh\)|kWh)\s+([\d.]+)\s+pence daily standing charge",
    )
    .expect("valid electricity rate regex")
});

static GAS_RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Gas\s+([\d.]+)\s+pence per (?:kilowatt hour\s*\(kWh\)|kWh)\s+([\d.]+)\s+pence daily standing charge",
    )
    .expect("valid gas rate regex")
});

// ---------------------------------------------------------------------------
// CapPeriod
// ---------------------------------------------------------------------------

/// The active cap's date range and headline annual figure, parsed from a
/// sentence like "Between 1 October and 31 December 2025, the energy price
/// cap is set at £1,755 per year ...".
#[derive(Debug, Clone, PartialEq)]
pub struct CapPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Headline annual cap figure in £ for a typical household.
    pub annual_gbp: f64,
    /// Display label, e.g. "1 Oct 2025 – 31 Dec 2025 (default tariff cap)".
    pub label: String,
}

/// Locate and parse the cap period sentence in extracted page text.
///
/// The sentence's year applies to the end date and, since the page never
/// attaches one to it, to the start date as well. Month names may be full or
/// abbreviated.
pub fn parse_period(text: &str) -> Result<CapPeriod> {
    let caps = PERIOD_RE.captures(text).ok_or_else(|| {
        ReportError::Parse(
            "could not find 'Between ... the energy price cap is set at £...' sentence".to_string(),
        )
    })?;

    let year: i32 = caps[5]
        .parse()
        .map_err(|_| ReportError::Parse(format!("invalid year: {}", &caps[5])))?;
    let start = parse_day_month(&caps[1], &caps[2], year)?;
    let end = parse_day_month(&caps[3], &caps[4], year)?;
    let annual_gbp: f64 = caps[6]
        .replace(',', "")
        .parse()
        .map_err(|_| ReportError::Parse(format!("invalid annual figure: {}", &caps[6])))?;

    let label = format!(
        "{} {} – {} {}{}",
        start.day(),
        start.format("%b %Y"),
        end.day(),
        end.format("%b %Y"),
        PERIOD_LABEL_SUFFIX,
    );

    Ok(CapPeriod {
        start,
        end,
        annual_gbp,
        label,
    })
}

fn parse_day_month(day: &str, month: &str, year: i32) -> Result<NaiveDate> {
    let input = format!("{day} {month} {year}");
    // %B accepts both full and abbreviated month names when parsing.
    NaiveDate::parse_from_str(&input, "%d %B %Y")
        .map_err(|_| ReportError::Parse(format!("invalid date: {input}")))
}

// ---------------------------------------------------------------------------
// CapRates
// ---------------------------------------------------------------------------

/// Per-fuel unit rates and standing charges for the current cap period.
/// Standing charges are still in pence per day here; conversion to £/day
/// happens when the resolver builds the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CapRates {
    pub electricity_unit_p: f64,
    pub electricity_standing_p: f64,
    pub gas_unit_p: f64,
    pub gas_standing_p: f64,
}

/// Extract the current per-fuel rate pairs from extracted page text.
///
/// The page lists superseded periods before the current one, so document
/// order encodes chronology and the last pair per fuel is the current cap.
/// This ordering assumption is a precondition on the source page, not a
/// general algorithm; zero matches for either fuel is a parse failure.
pub fn parse_rates(text: &str) -> Result<CapRates> {
    let (electricity_unit_p, electricity_standing_p) =
        last_rate_pair(&ELEC_RATE_RE, text, "electricity")?;
    let (gas_unit_p, gas_standing_p) = last_rate_pair(&GAS_RATE_RE, text, "gas")?;

    Ok(CapRates {
        electricity_unit_p,
        electricity_standing_p,
        gas_unit_p,
        gas_standing_p,
    })
}

fn last_rate_pair(re: &Regex, text: &str, fuel: &str) -> Result<(f64, f64)> {
    // captures_iter yields non-overlapping matches at strictly increasing
    // positions, so "last" is well defined.
    let caps = re.captures_iter(text).last().ok_or_else(|| {
        ReportError::Parse(format!("no {fuel} rate pair found in cap page text"))
    })?;

    let unit: f64 = caps[1]
        .parse()
        .map_err(|_| ReportError::Parse(format!("invalid {fuel} unit rate: {}", &caps[1])))?;
    let standing: f64 = caps[2]
        .parse()
        .map_err(|_| ReportError::Parse(format!("invalid {fuel} standing charge: {}", &caps[2])))?;

    Ok((unit, standing))
}
