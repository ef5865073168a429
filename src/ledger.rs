// 📒 Session Ledger - Append-only purchase history with running totals
// Records are immutable once stored; only a bulk reset removes them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impact::ImpactOutcome;

// ============================================================================
// PURCHASE RECORD
// ============================================================================

/// One logged purchase. Created exactly once at submission time, never
/// mutated, owned by the ledger that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Stable identity - never changes
    pub id: String,

    /// Creation timestamp
    pub logged_at: DateTime<Utc>,

    /// Product descriptor as entered (trimmed)
    pub product: String,

    /// Brand, free text
    pub brand: Option<String>,

    /// Price paid, non-negative
    pub price: f64,

    /// Estimated footprint in kg CO2e, rounded to 2 decimals
    pub co2_kg: f64,

    /// Low/High tag for presentation layers
    pub outcome: ImpactOutcome,
}

// ============================================================================
// AGGREGATES
// ============================================================================

/// Point-in-time rollup over the ledger.
///
/// An empty ledger is a valid state: count 0, all sums 0.0, mean 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub count: usize,
    pub total_price: f64,
    pub total_co2: f64,
    pub mean_co2: f64,
}

impl AggregateSnapshot {
    pub fn empty() -> Self {
        AggregateSnapshot {
            count: 0,
            total_price: 0.0,
            total_co2: 0.0,
            mean_co2: 0.0,
        }
    }
}

// ============================================================================
// SESSION LEDGER
// ============================================================================

/// Ordered purchase history for one session.
///
/// Insertion order is chronological order and is never reordered. Running
/// totals are maintained on append so `aggregates()` is O(1).
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    records: Vec<PurchaseRecord>,
    total_price: f64,
    total_co2: f64,
}

impl SessionLedger {
    pub fn new() -> Self {
        SessionLedger::default()
    }

    /// Construct a record and append it, updating the running totals.
    /// Returns a reference to the stored record.
    pub fn append(
        &mut self,
        product: String,
        brand: Option<String>,
        price: f64,
        co2_kg: f64,
        outcome: ImpactOutcome,
    ) -> &PurchaseRecord {
        let record = PurchaseRecord {
            id: uuid::Uuid::new_v4().to_string(),
            logged_at: Utc::now(),
            product,
            brand,
            price,
            co2_kg,
            outcome,
        };

        self.total_price += record.price;
        self.total_co2 += record.co2_kg;
        self.records.push(record);

        self.records
            .last()
            .expect("record was just pushed")
    }

    /// Rollup over the current history
    pub fn aggregates(&self) -> AggregateSnapshot {
        let count = self.records.len();
        if count == 0 {
            return AggregateSnapshot::empty();
        }

        AggregateSnapshot {
            count,
            total_price: self.total_price,
            total_co2: self.total_co2,
            mean_co2: self.total_co2 / count as f64,
        }
    }

    /// Chronological history (oldest first), read-only
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    /// Newest-first view for display; storage order is untouched
    pub fn records_by_recency(&self) -> Vec<&PurchaseRecord> {
        self.records.iter().rev().collect()
    }

    /// Most recently appended record, if any
    pub fn last(&self) -> Option<&PurchaseRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clear all records and totals back to the empty state
    pub fn reset(&mut self) {
        self.records.clear();
        self.total_price = 0.0;
        self.total_co2 = 0.0;
    }
}

// ============================================================================
// TESTS
// ============================================================================
