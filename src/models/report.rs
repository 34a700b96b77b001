use serde::{Deserialize, Serialize};

use crate::models::cap::{CapSnapshot, TrendDelta};
use crate::models::spot::SpotPriceSummary;

// ---------------------------------------------------------------------------
// TypicalBill — estimated annual/monthly bill for a reference household
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tdcv {
    pub electricity_kwh: u32,
    pub gas_kwh: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypicalBill {
    pub tdcv: Tdcv,
    pub electricity_annual_gbp: f64,
    pub gas_annual_gbp: f64,
    pub dual_annual_gbp: f64,
    pub dual_monthly_gbp: f64,
    pub note: String,
}

// ---------------------------------------------------------------------------
// DailyReport — one persisted snapshot per calendar day
// ---------------------------------------------------------------------------

/// The combined daily artifact. Created once per calendar day; a re-run on
/// the same day overwrites the existing report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    /// ISO calendar date, e.g. "2025-10-01".
    pub date: String,
    pub generated_at_utc: String,
    pub cap: CapSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_bill: Option<TypicalBill>,
    pub spot: SpotPriceSummary,
}

// ---------------------------------------------------------------------------
// ArchiveIndex — append-only, newest-first listing of daily reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub date: String,
    /// One-line metadata summary shown next to the report link.
    pub summary: String,
}

/// Ordered-by-recency list of archive entries, persisted as structured JSON.
/// Rendering to the browsable HTML listing is a separate stateless step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveIndex {
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveIndex {
    /// Insert an entry at the head unless the date is already indexed.
    /// Returns whether the entry was inserted. Existing entries are never
    /// mutated or removed.
    pub fn insert(&mut self, entry: ArchiveEntry) -> bool {
        if self.entries.iter().any(|e| e.date == entry.date) {
            return false;
        }
        self.entries.insert(0, entry);
        true
    }
}
