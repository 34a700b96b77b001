use std::path::PathBuf;

use crate::models::{CapSnapshot, HistoryRecord, Provenance};

/// The regulator's "price cap explained" page, the single live source for cap data.
pub const CAP_PAGE_URL: &str =
    "https://www.ofgem.gov.uk/information-consumers/energy-advice-households/energy-price-cap-explained";

pub const AGILE_API_BASE: &str = "https://api.octopus.energy/v1";
pub const AGILE_PRODUCT_CODE: &str = "AGILE-FLEX-22-11-25";
pub const AGILE_TARIFF_CODE: &str = "E-1R-AGILE-FLEX-22-11-25-C";

// Ofgem "typical household" annual usage (TDCV), dual fuel, Direct Debit.
pub const TDCV_ELEC_KWH: u32 = 2700;
pub const TDCV_GAS_KWH: u32 = 11500;

pub fn agile_rates_url() -> String {
    format!(
        "{}/products/{}/electricity-tariffs/{}/standard-unit-rates/",
        AGILE_API_BASE, AGILE_PRODUCT_CODE, AGILE_TARIFF_CODE
    )
}

/// Last-resort cap snapshot, used when both the live fetch and the cached
/// previous report are unusable. Passed into the resolver at construction so
/// tests can substitute their own values.
pub fn fallback_cap() -> CapSnapshot {
    CapSnapshot {
        period: "1 Oct 2025 – 31 Dec 2025 (default tariff cap)".to_string(),
        electricity_unit_p: 25.73,
        gas_unit_p: 6.33,
        electricity_standing_gbp: 0.51,
        gas_standing_gbp: 0.30,
        source: Provenance::Fallback,
        source_urls: vec![CAP_PAGE_URL.to_string()],
    }
}

/// Built-in record of recent cap periods (GB average, Direct Debit, incl. VAT),
/// used to seed the trend file on first run. Update when new caps are announced
/// so the comparisons stay useful on fresh installs.
pub fn seed_history() -> Vec<HistoryRecord> {
    let entries: [(&str, &str, f64, f64); 5] = [
        ("1 Jul 2023 – 30 Sep 2023", "Jul–Sep 2023", 30.11, 7.51),
        ("1 Oct 2023 – 31 Dec 2023", "Oct–Dec 2023", 27.35, 6.89),
        ("1 Jan 2024 – 31 Mar 2024", "Jan–Mar 2024", 28.62, 7.42),
        ("1 Apr 2024 – 30 Jun 2024", "Apr–Jun 2024", 24.50, 6.04),
        ("1 Jul 2024 – 30 Sep 2024", "Jul–Sep 2024", 22.36, 5.48),
    ];
    entries
        .into_iter()
        .map(|(period, label, elec, gas)| HistoryRecord {
            period: period.to_string(),
            label: label.to_string(),
            electricity_unit_p: Some(elec),
            gas_unit_p: Some(gas),
        })
        .collect()
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("energy-cap-report")
    } else {
        PathBuf::from(".energy-cap-report-data")
    }
}
