use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::core::classify::classify;
use crate::core::history::{summarize, DaySummary};
use crate::error::{Error, Result};
use crate::models::{Direction, TradePlan};
use crate::store::LedgerStore;

/// Caller-supplied fields of a new plan. The journal validates the levels
/// and fills in the result.
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    pub name: String,
    pub direction: Direction,
    pub tp: f64,
    pub sl: f64,
    pub note: String,
}

/// Facade over the store and the pure rules. The presentation layer talks
/// to this surface only; rendering code never reimplements classification
/// or aggregation.
pub struct Journal {
    store: LedgerStore,
    /// Serializes load→mutate→save within the process so interleaved
    /// requests cannot tear the whole-file overwrite. Writers in other
    /// processes can still race; last writer wins.
    lock: Mutex<()>,
}

impl Journal {
    pub fn new(cfg: &Config) -> Self {
        Self::open(cfg.data_file.clone())
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: LedgerStore::new(path),
            lock: Mutex::new(()),
        }
    }

    /// Plans recorded for `date`, in entry order. Unknown dates are empty.
    pub fn plans_for(&self, date: NaiveDate) -> Result<Vec<TradePlan>> {
        let _guard = self.guard();
        let ledger = self.store.load()?;
        Ok(ledger
            .get(&date)
            .map(|day| day.trades.clone())
            .unwrap_or_default())
    }

    /// Validate, classify and persist a new plan, returning the stored
    /// record. Non-finite tp/sl are rejected before anything is written.
    pub fn add_plan(&self, date: NaiveDate, draft: PlanDraft) -> Result<TradePlan> {
        validate_level("tp", draft.tp)?;
        validate_level("sl", draft.sl)?;

        let plan = TradePlan {
            name: draft.name,
            direction: draft.direction,
            tp: draft.tp,
            sl: draft.sl,
            result: classify(draft.tp, draft.sl),
            note: draft.note,
        };

        let _guard = self.guard();
        self.store.append(date, plan.clone())?;
        info!(
            "saved plan '{}' for {} ({})",
            plan.display_name(),
            date,
            plan.result
        );
        Ok(plan)
    }

    /// Rolling daily summaries ending at `reference`, newest first.
    pub fn history(&self, reference: NaiveDate, window: usize) -> Result<Vec<DaySummary>> {
        let _guard = self.guard();
        let ledger = self.store.load()?;
        Ok(summarize(&ledger, reference, window))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // Recover from poisoning; the on-disk state is still consistent.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn validate_level(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidNumber { field, value })
    }
}
