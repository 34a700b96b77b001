use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provenance — which fallback tier produced a cap snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "live")]
    Live,
    #[serde(rename = "live-cache")]
    LiveCache,
    #[serde(rename = "fallback")]
    Fallback,
}

impl Provenance {
    /// Whether a previously persisted snapshot with this provenance may be
    /// re-served from cache. Fallback snapshots must not be, or a dead live
    /// source would silently freeze the pipeline on stale constants.
    pub fn is_cacheable(self) -> bool {
        matches!(self, Provenance::Live | Provenance::LiveCache)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provenance::Live => "live",
            Provenance::LiveCache => "live-cache",
            Provenance::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// CapSnapshot — resolved default tariff cap for one period
// ---------------------------------------------------------------------------

/// A fully resolved cap snapshot. All four numeric fields are always present;
/// partially parsed data never reaches this type (see [`RawCap::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapSnapshot {
    /// Human-readable period label, e.g. "1 Oct 2025 – 31 Dec 2025 (default tariff cap)".
    pub period: String,
    /// Electricity unit rate in pence per kWh, 2 dp.
    pub electricity_unit_p: f64,
    /// Gas unit rate in pence per kWh, 2 dp.
    pub gas_unit_p: f64,
    /// Electricity standing charge in £ per day, 2 dp.
    pub electricity_standing_gbp: f64,
    /// Gas standing charge in £ per day, 2 dp.
    pub gas_standing_gbp: f64,
    pub source: Provenance,
    pub source_urls: Vec<String>,
}

// ---------------------------------------------------------------------------
// RawCap — loosely typed cap as read back from a persisted report
// ---------------------------------------------------------------------------

/// Cap data as deserialized from a previously persisted report, where any
/// field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCap {
    pub period: Option<String>,
    pub electricity_unit_p: Option<f64>,
    pub gas_unit_p: Option<f64>,
    pub electricity_standing_gbp: Option<f64>,
    pub gas_standing_gbp: Option<f64>,
    pub source: Option<Provenance>,
    pub source_urls: Option<Vec<String>>,
}

impl RawCap {
    /// Promote to a [`CapSnapshot`] if the period and all four numeric fields
    /// are present. A snapshot missing any of them is discarded wholesale so
    /// that resolution falls through to the next tier.
    pub fn validate(self) -> Option<CapSnapshot> {
        Some(CapSnapshot {
            period: self.period?,
            electricity_unit_p: self.electricity_unit_p?,
            gas_unit_p: self.gas_unit_p?,
            electricity_standing_gbp: self.electricity_standing_gbp?,
            gas_standing_gbp: self.gas_standing_gbp?,
            source: self.source?,
            source_urls: self.source_urls.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// HistoryRecord — one cap period in the append-only trend file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique period key; a period appears in the history at most once.
    pub period: String,
    /// Short display label, e.g. "Oct–Dec 2025".
    pub label: String,
    pub electricity_unit_p: Option<f64>,
    pub gas_unit_p: Option<f64>,
}

// ---------------------------------------------------------------------------
// TrendDelta — derived period-over-period and peak-relative changes
// ---------------------------------------------------------------------------

/// Percentage changes of the current cap period versus the previous period
/// and versus the all-time peak electricity rate in the tracked history.
/// Recomputed fresh each run, never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDelta {
    pub previous_label: String,
    /// 1 dp; `None` when the previous rate is zero or negative.
    pub electricity_vs_previous_pct: Option<f64>,
    pub gas_vs_previous_pct: Option<f64>,
    pub peak_label: String,
    pub electricity_vs_peak_pct: Option<f64>,
}
