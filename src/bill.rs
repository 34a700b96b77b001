//! Typical household bill derivation.

use crate::config::{TDCV_ELEC_KWH, TDCV_GAS_KWH};
use crate::models::{CapSnapshot, Tdcv, TypicalBill};
use crate::util::round_dp;

const BILL_NOTE: &str = "Approximate bill for a typical dual-fuel household on the \
GB-average default tariff cap (Direct Debit), based on TDCV reference usage. \
Actual bills vary with usage and region.";

/// Estimate the annual and monthly bill for a reference household under the
/// given cap: unit rate (p/kWh → £/kWh) times TDCV usage, plus a year of
/// standing charges, per fuel. All figures rounded to 2 dp.
///
/// Returns `None` when any input is non-finite; the caller omits the bill
/// section of the report for that run.
pub fn typical_bill(cap: &CapSnapshot) -> Option<TypicalBill> {
    let inputs = [
        cap.electricity_unit_p,
        cap.gas_unit_p,
        cap.electricity_standing_gbp,
        cap.gas_standing_gbp,
    ];
    if inputs.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let electricity_annual = cap.electricity_unit_p / 100.0 * f64::from(TDCV_ELEC_KWH)
        + cap.electricity_standing_gbp * 365.0;
    let gas_annual =
        cap.gas_unit_p / 100.0 * f64::from(TDCV_GAS_KWH) + cap.gas_standing_gbp * 365.0;
    let dual_annual = electricity_annual + gas_annual;

    Some(TypicalBill {
        tdcv: Tdcv {
            electricity_kwh: TDCV_ELEC_KWH,
            gas_kwh: TDCV_GAS_KWH,
        },
        electricity_annual_gbp: round_dp(electricity_annual, 2),
        gas_annual_gbp: round_dp(gas_annual, 2),
        dual_annual_gbp: round_dp(dual_annual, 2),
        dual_monthly_gbp: round_dp(dual_annual / 12.0, 2),
        note: BILL_NOTE.to_string(),
    })
}
