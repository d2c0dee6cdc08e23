use super::{Classification, ContractViolation, Filter, PriceSnapshot, StockEntry};
use crate::api::WatchlistRecord;

/// Per-classification tallies shown on the filter chips
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub all: usize,
    pub halal: usize,
    pub doubtful: usize,
    pub haram: usize,
}

impl Counts {
    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Halal => self.halal,
            Filter::Doubtful => self.doubtful,
            Filter::Haram => self.haram,
        }
    }
}

/// Tally `entries` by classification; `all` is always the sum of the rest
pub fn aggregate(entries: &[StockEntry]) -> Counts {
    entries.iter().fold(Counts::default(), |mut counts, entry| {
        match entry.classification {
            Classification::Halal => counts.halal += 1,
            Classification::Doubtful => counts.doubtful += 1,
            Classification::Haram => counts.haram += 1,
        }
        counts.all += 1;
        counts
    })
}

/// The fetched collection of watched stocks
///
/// Symbols are trusted to be unique; the backend owns that invariant.
#[derive(Clone, Debug, Default)]
pub struct Watchlist {
    entries: Vec<StockEntry>,
    counts: Counts,
    violations: Vec<ContractViolation>,
}

impl Watchlist {
    pub fn new(entries: Vec<StockEntry>) -> Self {
        let counts = aggregate(&entries);
        Self {
            entries,
            counts,
            violations: vec![],
        }
    }

    /// Normalise backend rows, keeping rows that break the contract aside
    pub fn from_records(records: Vec<WatchlistRecord>) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut violations = vec![];
        for record in records {
            match StockEntry::try_from(record) {
                Ok(entry) => entries.push(entry),
                Err(violation) => {
                    tracing::warn!(%violation, "watchlist row skipped");
                    violations.push(violation);
                }
            }
        }
        Self {
            counts: aggregate(&entries),
            entries,
            violations,
        }
    }

    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn entry(&self, symbol: &str) -> Option<&StockEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop `symbol` from the collection; the only in-place mutation of membership
    pub fn remove(&mut self, symbol: &str) -> Option<StockEntry> {
        let idx = self.entries.iter().position(|e| e.symbol == symbol)?;
        let entry = self.entries.remove(idx);
        self.counts = aggregate(&self.entries);
        Some(entry)
    }

    /// Attach a price snapshot; counts are unaffected
    pub fn attach_price(&mut self, symbol: &str, snapshot: PriceSnapshot) -> bool {
        match self.entries.iter_mut().find(|e| e.symbol == symbol) {
            Some(entry) => {
                entry.price = Some(snapshot);
                true
            }
            None => false,
        }
    }
}
