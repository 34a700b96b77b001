use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpotPrice — one sub-daily price record
// ---------------------------------------------------------------------------

/// A price applicable to one short time window within a day, e.g. an Agile
/// half-hour slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotPrice {
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    /// Unit price in pence per kWh, including VAT.
    pub price_p_per_kwh: f64,
}

// ---------------------------------------------------------------------------
// SpotPriceSummary — day-level statistics over spot records
// ---------------------------------------------------------------------------

/// Summary statistics for one day of spot prices. The absent-data state is a
/// first-class value: `has_data == false` with null statistics, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotPriceSummary {
    pub has_data: bool,
    /// Arithmetic mean in p/kWh, 3 dp.
    pub average: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
    /// Up to five rendered slot lines, cheapest first.
    pub cheapest_slots: Vec<String>,
}

impl SpotPriceSummary {
    pub fn no_data() -> Self {
        Self {
            has_data: false,
            average: None,
            low: None,
            high: None,
            cheapest_slots: Vec::new(),
        }
    }
}
