//! Stateless rendering of persisted data to browsable HTML.
//!
//! Rendering is deliberately separated from the structured persistence in
//! [`crate::store`]: the JSON files are the source of truth and the HTML is
//! regenerated from them in full on every run.

use crate::models::{ArchiveIndex, CapSnapshot, DailyReport, SpotPriceSummary, TypicalBill};

/// One-line metadata summary for an archive entry. Sections with no data are
/// simply omitted.
pub fn archive_summary(
    cap: &CapSnapshot,
    bill: Option<&TypicalBill>,
    spot: &SpotPriceSummary,
) -> String {
    let mut parts = vec![format!(
        "Cap: {:.2}p elec / {:.2}p gas",
        cap.electricity_unit_p, cap.gas_unit_p
    )];
    if let Some(bill) = bill {
        parts.push(format!("Typical bill ~£{:.0}/yr", bill.dual_annual_gbp));
    }
    if let Some(average) = spot.average {
        parts.push(format!("Spot avg {average:.2}p"));
    }
    parts.join(" · ")
}

/// Render a standalone HTML page for one daily report.
pub fn render_daily_report(report: &DailyReport) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".into(),
        "<html lang=\"en\">".into(),
        "<head>".into(),
        "  <meta charset=\"UTF-8\" />".into(),
        format!("  <title>UK Energy Data – Daily Report {}</title>", report.date),
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />".into(),
        "</head>".into(),
        "<body>".into(),
        format!("<h1>Daily Energy Price Report – {}</h1>", report.date),
        format!(
            "<p>Auto-generated at <code>{}</code>.</p>",
            report.generated_at_utc
        ),
        "<h2>Price cap snapshot</h2>".into(),
        format!("<p><strong>Period:</strong> {}</p>", report.cap.period),
        "<ul>".into(),
        format!(
            "  <li>Electricity unit rate (GB avg): {} p/kWh</li>",
            report.cap.electricity_unit_p
        ),
        format!(
            "  <li>Gas unit rate (GB avg): {} p/kWh</li>",
            report.cap.gas_unit_p
        ),
        format!(
            "  <li>Electricity standing charge (GB avg): £{}/day</li>",
            report.cap.electricity_standing_gbp
        ),
        format!(
            "  <li>Gas standing charge (GB avg): £{}/day</li>",
            report.cap.gas_standing_gbp
        ),
        "</ul>".into(),
    ];

    if let Some(bill) = &report.typical_bill {
        lines.push("<h3>Typical household bill (dual fuel, Direct Debit)</h3>".into());
        lines.push(format!(
            "<p>Approximate annual bill: <strong>£{:.0}</strong> (~£{:.0} per month) \
             based on {} kWh electricity and {} kWh gas per year.</p>",
            bill.dual_annual_gbp,
            bill.dual_monthly_gbp,
            bill.tdcv.electricity_kwh,
            bill.tdcv.gas_kwh,
        ));
    }

    if let Some(trend) = &report.trend {
        lines.push("<h3>Cap trend</h3>".into());
        lines.push("<ul>".into());
        if let Some(pct) = trend.electricity_vs_previous_pct {
            lines.push(format!(
                "  <li>Electricity vs previous period ({}): {pct:+.1}%</li>",
                trend.previous_label
            ));
        }
        if let Some(pct) = trend.gas_vs_previous_pct {
            lines.push(format!(
                "  <li>Gas vs previous period ({}): {pct:+.1}%</li>",
                trend.previous_label
            ));
        }
        if let Some(pct) = trend.electricity_vs_peak_pct {
            lines.push(format!(
                "  <li>Electricity vs peak ({}): {pct:+.1}%</li>",
                trend.peak_label
            ));
        }
        lines.push("</ul>".into());
    }

    lines.push("<h2>Spot electricity prices – today</h2>".into());
    if report.spot.has_data {
        lines.push("<ul>".into());
        if let Some(average) = report.spot.average {
            lines.push(format!("  <li>Average rate: {average:.3} p/kWh</li>"));
        }
        if let Some(low) = report.spot.low {
            lines.push(format!("  <li>Lowest half-hour: {low:.3} p/kWh</li>"));
        }
        if let Some(high) = report.spot.high {
            lines.push(format!("  <li>Highest half-hour: {high:.3} p/kWh</li>"));
        }
        lines.push("</ul>".into());
        lines.push("<p>Cheapest slots:</p>".into());
        lines.push("<ul>".into());
        for slot in &report.spot.cheapest_slots {
            lines.push(format!("  <li>{slot}</li>"));
        }
        lines.push("</ul>".into());
    } else {
        lines.push("<p>Spot price data not available for this day.</p>".into());
    }

    lines.extend([
        "<h2>Notes</h2>".into(),
        "<ul>".into(),
        "<li>All values are approximate and for informational use only.</li>".into(),
        "<li>Cap figures are scraped from official publications; cross-check before quoting.</li>"
            .into(),
        "</ul>".into(),
        "<p><a href=\"index.html\">&larr; Back to all reports</a></p>".into(),
        "</body>".into(),
        "</html>".into(),
    ]);

    lines.join("\n")
}

/// Render the archive index as a browsable listing, newest first, one link
/// per day with its metadata summary alongside.
pub fn render_archive_index(index: &ArchiveIndex) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".into(),
        "<html lang=\"en\">".into(),
        "<head>".into(),
        "  <meta charset=\"UTF-8\" />".into(),
        "  <title>UK Energy Data – Daily Reports Archive</title>".into(),
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />".into(),
        "</head>".into(),
        "<body>".into(),
        "<h1>UK Energy Data – Daily Reports</h1>".into(),
        "<p>Auto-generated daily snapshots of the default tariff cap and spot prices.</p>".into(),
        "<ul>".into(),
    ];

    for entry in &index.entries {
        lines.push(format!(
            "  <li><a href=\"{date}.html\">{date} – Daily report</a> <span class=\"meta\">{summary}</span></li>",
            date = entry.date,
            summary = entry.summary,
        ));
    }

    lines.extend(["</ul>".into(), "</body>".into(), "</html>".into()]);
    lines.join("\n")
}
