//! Shared fixtures for the energy-cap-report integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use energy_cap_report::{
    CapSnapshot, DailyReport, Provenance, SpotPrice, SpotPriceSummary,
};

/// Cap page fixture with one superseded and one current rate pair per fuel,
/// mirroring the real page's superseded-periods-first table order.
pub const SAMPLE_CAP_PAGE: &str = r#"<html>
<head>
  <style>body { color: #111; }</style>
  <script>var tracker = "Electricity 99.99 pence";</script>
</head>
<body>
  <h1>Energy price cap explained</h1>
  <p>Between 1 October and 31 December 2025, the energy price cap is set at
  £1,755 per year for a typical household.</p>
  <h2>1 July to 30 September 2025</h2>
  <table>
    <tr><td>Electricity</td><td>27.03 pence per kilowatt hour (kWh)</td>
        <td>53.80 pence daily standing charge</td></tr>
    <tr><td>Gas</td><td>6.99 pence per kilowatt hour (kWh)</td>
        <td>32.67 pence daily standing charge</td></tr>
  </table>
  <h2>1 October to 31 December 2025</h2>
  <table>
    <tr><td>Electricity</td><td>25.73 pence per kWh</td>
        <td>51.37 pence daily standing charge</td></tr>
    <tr><td>Gas</td><td>6.33 pence per kWh</td>
        <td>29.82 pence daily standing charge</td></tr>
  </table>
</body>
</html>"#;

/// Snapshot with the current values from `SAMPLE_CAP_PAGE`.
pub fn sample_snapshot(source: Provenance) -> CapSnapshot {
    CapSnapshot {
        period: "1 Oct 2025 – 31 Dec 2025 (default tariff cap)".to_string(),
        electricity_unit_p: 25.73,
        gas_unit_p: 6.33,
        electricity_standing_gbp: 0.51,
        gas_standing_gbp: 0.30,
        source,
        source_urls: vec!["https://example.test/cap".to_string()],
    }
}

/// Minimal daily report wrapping the given cap, for seeding `latest.json`.
pub fn report_with_cap(cap: CapSnapshot) -> DailyReport {
    DailyReport {
        date: "2025-10-01".to_string(),
        generated_at_utc: "2025-10-01 06:00 UTC".to_string(),
        cap,
        trend: None,
        typical_bill: None,
        spot: SpotPriceSummary::no_data(),
    }
}

/// Half-hour spot slot on 1 Oct 2025 starting at `hour:minute` UTC.
pub fn slot(hour: u32, minute: u32, price: f64) -> SpotPrice {
    let valid_from = Utc.with_ymd_and_hms(2025, 10, 1, hour, minute, 0).unwrap();
    SpotPrice {
        valid_from,
        valid_to: valid_from + chrono::Duration::minutes(30),
        price_p_per_kwh: price,
    }
}
