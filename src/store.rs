//! On-disk persistence for reports, the trend file and the archive index.
//!
//! Everything lives under one data directory:
//!
//! ```text
//! <data_dir>/latest.json        most recent daily report
//! <data_dir>/history.json       append-only cap period history
//! <data_dir>/archive.json       structured archive index
//! <data_dir>/reports/<date>.json   per-day report snapshots
//! <data_dir>/reports/<date>.html   rendered per-day reports
//! <data_dir>/reports/index.html    rendered archive listing
//! ```
//!
//! All writes go through a temp-file-then-rename so an interrupted run never
//! leaves a corrupt partial file behind. Storage failures here are the only
//! errors that terminate a run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config;
use crate::error::Result;
use crate::models::{ArchiveIndex, DailyReport, HistoryRecord, RawCap};

pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `data_dir`, creating the directory layout if
    /// missing. If `data_dir` is `None`, uses the platform-appropriate
    /// default data directory.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(dir.join("reports"))?;
        Ok(Self { data_dir: dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join("reports")
    }

    // -- daily report -------------------------------------------------------

    /// Persist the per-day report, overwriting any existing report for the
    /// same date. Returns the path written.
    pub fn save_daily_report(&self, report: &DailyReport) -> Result<PathBuf> {
        let path = self.reports_dir().join(format!("{}.json", report.date));
        self.write_json(&path, report)?;
        Ok(path)
    }

    /// Persist the report as `latest.json`, the file the cache tier reads on
    /// the next run.
    pub fn save_latest(&self, report: &DailyReport) -> Result<()> {
        self.write_json(&self.data_dir.join("latest.json"), report)
    }

    /// Read the cap embedded in the most recently persisted report, without
    /// judging whether its fields are usable. Any missing, unreadable or
    /// malformed file yields `None`; the cache tier must fail soft.
    pub fn load_cached_cap(&self) -> Option<RawCap> {
        let contents = fs::read_to_string(self.data_dir.join("latest.json")).ok()?;
        let latest: serde_json::Value = serde_json::from_str(&contents).ok()?;
        serde_json::from_value(latest.get("cap")?.clone()).ok()
    }

    // -- history ------------------------------------------------------------

    /// Load the cap period history, seeding from the built-in table when no
    /// trend file exists yet. A corrupt trend file is reported and replaced
    /// by the seed rather than terminating the run.
    pub fn load_history(&self) -> Result<Vec<HistoryRecord>> {
        let path = self.data_dir.join("history.json");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(config::seed_history());
            }
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(history) => Ok(history),
            Err(e) => {
                eprintln!("Corrupt trend file {}: {e} -- reseeding", path.display());
                Ok(config::seed_history())
            }
        }
    }

    pub fn save_history(&self, history: &[HistoryRecord]) -> Result<()> {
        self.write_json(&self.data_dir.join("history.json"), &history)
    }

    // -- archive index ------------------------------------------------------

    /// Load the archive index; a missing file is an empty index.
    pub fn load_archive(&self) -> Result<ArchiveIndex> {
        let path = self.data_dir.join("archive.json");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ArchiveIndex::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_archive(&self, index: &ArchiveIndex) -> Result<()> {
        self.write_json(&self.data_dir.join("archive.json"), index)
    }

    // -- rendered artifacts -------------------------------------------------

    pub fn save_report_html(&self, date: &str, html: &str) -> Result<()> {
        self.write_atomic(&self.reports_dir().join(format!("{date}.html")), html.as_bytes())
    }

    pub fn save_index_html(&self, html: &str) -> Result<()> {
        self.write_atomic(&self.reports_dir().join("index.html"), html.as_bytes())
    }

    // -- low-level writes ---------------------------------------------------

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Write to a temp file next to the destination and rename into place.
    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let tmp = path.with_extension(format!(
            "{}.tmp",
            path.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let result = (|| -> Result<()> {
            fs::write(&tmp, bytes)?;
            fs::rename(&tmp, path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }

        result
    }
}
