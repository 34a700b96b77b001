//! Three-tier cap resolution: live fetch, cached prior live value, static
//! fallback.
//!
//! Network and parse failures are converted into tier transitions at this
//! boundary and never surface to the caller; the resolver's public contract
//! is that it always returns a usable snapshot.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::error::Result;
use crate::extract::extract_text;
use crate::models::{CapSnapshot, Provenance};
use crate::parse::{parse_period, parse_rates};
use crate::store::Store;
use crate::util::round_dp;

// ---------------------------------------------------------------------------
// Tier — resolution state machine
// ---------------------------------------------------------------------------

/// Resolution states, tried in declaration order. `Fallback` is the terminal
/// safety net and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Live,
    LiveCache,
    Fallback,
}

impl Tier {
    /// The tier to fall through to when this one is unavailable.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Live => Some(Tier::LiveCache),
            Tier::LiveCache => Some(Tier::Fallback),
            Tier::Fallback => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Live => "live",
            Tier::LiveCache => "live-cache",
            Tier::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// CapResolver
// ---------------------------------------------------------------------------

/// Resolves the current cap snapshot via the tier ladder. The fallback
/// snapshot is injected at construction so callers and tests control the
/// terminal value.
pub struct CapResolver<'a> {
    url: String,
    timeout: Duration,
    fallback: CapSnapshot,
    store: &'a Store,
}

impl<'a> CapResolver<'a> {
    pub fn new(url: &str, timeout: Duration, fallback: CapSnapshot, store: &'a Store) -> Self {
        Self {
            url: url.to_string(),
            timeout,
            fallback,
            store,
        }
    }

    /// Walk the tier ladder until a snapshot is produced. Never fails.
    pub fn resolve(&self) -> CapSnapshot {
        let mut tier = Tier::Live;
        loop {
            if let Some(snapshot) = self.attempt(tier) {
                return snapshot;
            }
            // Fallback always yields, so there is always a next tier here.
            let Some(next) = tier.next() else {
                return self.fallback.clone();
            };
            eprintln!("Cap tier '{tier}' unavailable; trying '{next}'");
            tier = next;
        }
    }

    fn attempt(&self, tier: Tier) -> Option<CapSnapshot> {
        match tier {
            Tier::Live => match self.try_live() {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    eprintln!("Live cap fetch failed: {e}");
                    None
                }
            },
            Tier::LiveCache => self.try_cache(),
            Tier::Fallback => Some(self.fallback.clone()),
        }
    }

    /// Fetch the source page, extract text and parse period and rates into a
    /// `live` snapshot. Standing charges arrive in pence per day and are
    /// converted to £ per day here.
    fn try_live(&self) -> Result<CapSnapshot> {
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(Policy::limited(10))
            .build()?;
        let html = client.get(&self.url).send()?.error_for_status()?.text()?;
        let text = extract_text(&html);

        let period = parse_period(&text)?;
        let rates = parse_rates(&text)?;

        Ok(CapSnapshot {
            period: period.label,
            electricity_unit_p: round_dp(rates.electricity_unit_p, 2),
            gas_unit_p: round_dp(rates.gas_unit_p, 2),
            electricity_standing_gbp: round_dp(rates.electricity_standing_p / 100.0, 2),
            gas_standing_gbp: round_dp(rates.gas_standing_p / 100.0, 2),
            source: Provenance::Live,
            source_urls: vec![self.url.clone()],
        })
    }

    /// Reuse the cap from the most recently persisted report, if it came from
    /// a live fetch originally and all fields validate.
    fn try_cache(&self) -> Option<CapSnapshot> {
        let raw = self.store.load_cached_cap()?;
        if !raw.source.is_some_and(Provenance::is_cacheable) {
            return None;
        }
        let snapshot = raw.validate()?;
        eprintln!("Reusing previous live cap (source=live-cache)");
        Some(CapSnapshot {
            source: Provenance::LiveCache,
            ..snapshot
        })
    }
}
