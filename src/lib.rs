//! Daily UK energy pricing snapshot pipeline.
//!
//! Resolves the current default tariff cap from the regulator's page via a
//! layered fallback (live fetch, cached prior live value, static constant),
//! derives a typical household bill, tracks cap periods across runs to
//! compute trend deltas, summarizes today's Agile spot prices, and persists
//! the combined daily report plus a browsable archive.
//!
//! # Quick start
//!
//! ```no_run
//! use energy_cap_report::ReportPipeline;
//!
//! let pipeline = ReportPipeline::builder().build().unwrap();
//! let outcome = pipeline.run().unwrap();
//!
//! println!("cap period: {}", outcome.report.cap.period);
//! println!("report written to {}", outcome.report_path.display());
//! ```

pub mod bill;
pub mod config;
pub mod error;
pub mod extract;
pub mod history;
pub mod models;
pub mod parse;
pub mod render;
pub mod resolver;
pub mod spot;
pub mod store;
mod util;

pub use error::{ReportError, Result};
pub use models::{
    ArchiveEntry, ArchiveIndex, CapSnapshot, DailyReport, HistoryRecord, Provenance, SpotPrice,
    SpotPriceSummary, TrendDelta, TypicalBill,
};
pub use resolver::{CapResolver, Tier};
pub use store::Store;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;

// ---------------------------------------------------------------------------
// ReportPipelineBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ReportPipeline`].
///
/// Use [`ReportPipeline::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ReportPipelineBuilder::build).
pub struct ReportPipelineBuilder {
    data_dir: Option<PathBuf>,
    cap_url: String,
    spot_url: String,
    timeout: Duration,
    fallback_cap: CapSnapshot,
}

impl Default for ReportPipelineBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            cap_url: config::CAP_PAGE_URL.to_string(),
            spot_url: config::agile_rates_url(),
            timeout: Duration::from_secs(15),
            fallback_cap: config::fallback_cap(),
        }
    }
}

impl ReportPipelineBuilder {
    /// Set a custom data directory for reports, the trend file and the
    /// archive index. Defaults to the platform data directory.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the cap source page URL.
    pub fn cap_url(mut self, url: &str) -> Self {
        self.cap_url = url.to_string();
        self
    }

    /// Override the spot-price rates endpoint URL.
    pub fn spot_url(mut self, url: &str) -> Self {
        self.spot_url = url.to_string();
        self
    }

    /// Set the HTTP timeout applied to both fetches. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Substitute the terminal fallback cap snapshot served when both the
    /// live fetch and the cached prior value are unusable.
    pub fn fallback_cap(mut self, cap: CapSnapshot) -> Self {
        self.fallback_cap = cap;
        self
    }

    /// Build the pipeline, creating the data directory layout if missing.
    pub fn build(self) -> Result<ReportPipeline> {
        let store = Store::new(self.data_dir)?;
        Ok(ReportPipeline {
            store,
            cap_url: self.cap_url,
            spot_url: self.spot_url,
            timeout: self.timeout,
            fallback_cap: self.fallback_cap,
        })
    }
}

// ---------------------------------------------------------------------------
// ReportPipeline
// ---------------------------------------------------------------------------

/// Result of one pipeline run.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: DailyReport,
    /// Path of the persisted per-day report.
    pub report_path: PathBuf,
    /// Whether a new entry was appended to the archive index (false when the
    /// date was already indexed, i.e. a same-day re-run).
    pub archive_appended: bool,
}

/// The daily report assembler and main entry point.
///
/// Intended for one invocation per calendar day from an external scheduler;
/// the pipeline is synchronous and blocking throughout, and the persisted
/// files assume a single serialized run at a time.
pub struct ReportPipeline {
    store: Store,
    cap_url: String,
    spot_url: String,
    timeout: Duration,
    fallback_cap: CapSnapshot,
}

impl ReportPipeline {
    /// Create a new builder for configuring the pipeline.
    pub fn builder() -> ReportPipelineBuilder {
        ReportPipelineBuilder::default()
    }

    /// Produce and persist today's report.
    ///
    /// Cap resolution cannot fail (it degrades through its tiers) and spot
    /// data is best effort; the only fatal errors are storage failures.
    pub fn run(&self) -> Result<RunOutcome> {
        let resolver = CapResolver::new(
            &self.cap_url,
            self.timeout,
            self.fallback_cap.clone(),
            &self.store,
        );
        let cap = resolver.resolve();
        let typical_bill = bill::typical_bill(&cap);

        let mut cap_history = self.store.load_history()?;
        cap_history = history::append_current(cap_history, &cap);
        self.store.save_history(&cap_history)?;
        let trend = history::compute_changes(&cap_history);

        let records = spot::fetch_spot_prices(&self.spot_url, self.timeout);
        let spot_summary = spot::summarize(&records);

        let now = Utc::now();
        let report = DailyReport {
            date: now.date_naive().to_string(),
            generated_at_utc: now.format("%Y-%m-%d %H:%M UTC").to_string(),
            cap,
            trend,
            typical_bill,
            spot: spot_summary,
        };

        let report_path = self.store.save_daily_report(&report)?;
        self.store.save_latest(&report)?;

        let mut archive = self.store.load_archive()?;
        let archive_appended = archive.insert(ArchiveEntry {
            date: report.date.clone(),
            summary: render::archive_summary(
                &report.cap,
                report.typical_bill.as_ref(),
                &report.spot,
            ),
        });
        if archive_appended {
            self.store.save_archive(&archive)?;
        }

        self.store
            .save_report_html(&report.date, &render::render_daily_report(&report))?;
        self.store
            .save_index_html(&render::render_archive_index(&archive))?;

        eprintln!("[ok] generated report {}", report_path.display());

        Ok(RunOutcome {
            report,
            report_path,
            archive_appended,
        })
    }

    /// Return the store backing this pipeline, for inspection.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl fmt::Display for ReportPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReportPipeline(data_dir={}, cap_url={})",
            self.store.data_dir().display(),
            self.cap_url
        )
    }
}
