use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TradePlan;

/// Full on-disk mapping: calendar date → that day's plans.
pub type Ledger = BTreeMap<NaiveDate, DayEntry>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub trades: Vec<TradePlan>,
}

/// File-backed ledger. The file is the single source of truth: every
/// operation reloads it, nothing is cached between calls.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ledger. A missing file is an empty ledger, not an error.
    pub fn load(&self) -> Result<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("ledger {} not found, starting empty", self.path.display());
                return Ok(Ledger::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| Error::StoreCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the backing file with the complete ledger, pretty-printed
    /// for hand inspection. Writes a sibling temp file and renames it into
    /// place so a reader never observes a half-written file.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!("saved ledger to {}", self.path.display());
        Ok(())
    }

    /// load → push onto the date's list → save.
    pub fn append(&self, date: NaiveDate, plan: TradePlan) -> Result<()> {
        let mut ledger = self.load()?;
        ledger.entry(date).or_default().trades.push(plan);
        self.save(&ledger)
    }
}
