//! Cap period history bookkeeping and trend deltas.

use crate::models::{CapSnapshot, HistoryRecord, TrendDelta};
use crate::parse::PERIOD_LABEL_SUFFIX;
use crate::util::round_dp;

/// Append the snapshot's period to the history unless its period key is
/// already present. Records are never mutated or removed; a distinct
/// regulatory period enters the history exactly once.
pub fn append_current(mut history: Vec<HistoryRecord>, cap: &CapSnapshot) -> Vec<HistoryRecord> {
    if history.iter().any(|r| r.period == cap.period) {
        return history;
    }
    history.push(HistoryRecord {
        period: cap.period.clone(),
        label: cap
            .period
            .trim_end_matches(PERIOD_LABEL_SUFFIX)
            .to_string(),
        electricity_unit_p: Some(cap.electricity_unit_p),
        gas_unit_p: Some(cap.gas_unit_p),
    });
    history
}

/// Compute period-over-period and peak-relative percentage changes from the
/// ordered history.
///
/// Records missing either unit price are excluded first; they cannot
/// participate in percentage-change math. Needs at least two usable records,
/// otherwise there is no trend to report. The peak is the record with the
/// highest electricity unit rate; the first occurrence wins on ties.
pub fn compute_changes(history: &[HistoryRecord]) -> Option<TrendDelta> {
    let priced: Vec<(&HistoryRecord, f64, f64)> = history
        .iter()
        .filter_map(|r| match (r.electricity_unit_p, r.gas_unit_p) {
            (Some(elec), Some(gas)) => Some((r, elec, gas)),
            _ => None,
        })
        .collect();

    if priced.len() < 2 {
        return None;
    }

    let (previous, prev_elec, prev_gas) = priced[priced.len() - 2];
    let (_, current_elec, current_gas) = priced[priced.len() - 1];

    let (peak, peak_elec, _) = priced
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })?;

    Some(TrendDelta {
        previous_label: previous.label.clone(),
        electricity_vs_previous_pct: pct_change(current_elec, prev_elec),
        gas_vs_previous_pct: pct_change(current_gas, prev_gas),
        peak_label: peak.label.clone(),
        electricity_vs_peak_pct: pct_change(current_elec, peak_elec),
    })
}

/// `(current − previous) / previous × 100`, 1 dp; undefined when the
/// reference value is zero or negative.
fn pct_change(current: f64, previous: f64) -> Option<f64> {
    if previous <= 0.0 {
        return None;
    }
    Some(round_dp((current - previous) / previous * 100.0, 1))
}
