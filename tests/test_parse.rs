//! Unit tests for the cap period and rate parsers.

use chrono::NaiveDate;
use energy_cap_report::parse::{parse_period, parse_rates};
use energy_cap_report::ReportError;

// ---------------------------------------------------------------------------
// Period parsing
// ---------------------------------------------------------------------------

const PERIOD_SENTENCE: &str = "Between 1 October and 31 December 2025, \
the energy price cap is set at £1,755 per year for a typical household.";

#[test]
fn period_label_matches_input_dates() {
    let period = parse_period(PERIOD_SENTENCE).unwrap();
    assert_eq!(
        period.label,
        "1 Oct 2025 – 31 Dec 2025 (default tariff cap)"
    );
}

#[test]
fn start_date_borrows_the_sentence_year() {
    let period = parse_period(PERIOD_SENTENCE).unwrap();
    assert_eq!(period.start, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    assert_eq!(period.end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
}

#[test]
fn abbreviated_month_names_parse() {
    let text = "Between 1 Oct and 31 Dec 2025, the energy price cap is set at £1755 per year.";
    let period = parse_period(text).unwrap();
    assert_eq!(
        period.label,
        "1 Oct 2025 – 31 Dec 2025 (default tariff cap)"
    );
}

#[test]
fn headline_annual_figure_parsed_with_thousands_separator() {
    let period = parse_period(PERIOD_SENTENCE).unwrap();
    assert_eq!(period.annual_gbp, 1755.0);
}

#[test]
fn missing_period_sentence_is_parse_error() {
    let err = parse_period("The price cap has changed recently.").unwrap_err();
    assert!(matches!(err, ReportError::Parse(_)));
}

#[test]
fn nonsense_month_name_is_parse_error() {
    let text = "Between 1 Octember and 31 December 2025, the energy price cap is set at £1755 per year.";
    assert!(matches!(
        parse_period(text).unwrap_err(),
        ReportError::Parse(_)
    ));
}

// ---------------------------------------------------------------------------
// Rate parsing
// ---------------------------------------------------------------------------

const SINGLE_PERIOD_RATES: &str = "Electricity 25.73 pence per kilowatt hour (kWh) \
51.37 pence daily standing charge Gas 6.33 pence per kWh \
29.82 pence daily standing charge";

#[test]
fn extracts_both_fuels() {
    let rates = parse_rates(SINGLE_PERIOD_RATES).unwrap();
    assert_eq!(rates.electricity_unit_p, 25.73);
    assert_eq!(rates.electricity_standing_p, 51.37);
    assert_eq!(rates.gas_unit_p, 6.33);
    assert_eq!(rates.gas_standing_p, 29.82);
}

#[test]
fn last_rate_pair_wins_per_fuel() {
    // Superseded period listed first; document order encodes chronology.
    let text = "Electricity 27.03 pence per kWh 53.80 pence daily standing charge \
                Gas 6.99 pence per kWh 32.67 pence daily standing charge \
                Electricity 25.73 pence per kWh 51.37 pence daily standing charge \
                Gas 6.33 pence per kWh 29.82 pence daily standing charge";
    let rates = parse_rates(text).unwrap();
    assert_eq!(rates.electricity_unit_p, 25.73);
    assert_eq!(rates.electricity_standing_p, 51.37);
    assert_eq!(rates.gas_unit_p, 6.33);
    assert_eq!(rates.gas_standing_p, 29.82);
}

#[test]
fn spelled_out_kilowatt_hour_unit_matches() {
    let text = "Electricity 25.73 pence per kilowatt hour (kWh) 51.37 pence daily standing charge \
                Gas 6.33 pence per kilowatt hour (kWh) 29.82 pence daily standing charge";
    assert!(parse_rates(text).is_ok());
}

#[test]
fn missing_gas_pair_is_parse_error() {
    let text = "Electricity 25.73 pence per kWh 51.37 pence daily standing charge";
    assert!(matches!(
        parse_rates(text).unwrap_err(),
        ReportError::Parse(_)
    ));
}

#[test]
fn missing_electricity_pair_is_parse_error() {
    let text = "Gas 6.33 pence per kWh 29.82 pence daily standing charge";
    assert!(matches!(
        parse_rates(text).unwrap_err(),
        ReportError::Parse(_)
    ));
}
