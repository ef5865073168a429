// 🛒 Session Context - Submission pipeline over one session's state
// validate → resolve → compute → append → award, all synchronous

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::badges::{BadgeId, BadgeRules, BadgeState, ImpactTier};
use crate::catalog::ProductCatalog;
use crate::impact::{ImpactOutcome, ImpactPolicy};
use crate::ledger::{AggregateSnapshot, PurchaseRecord, SessionLedger};

// ============================================================================
// CONFIG
// ============================================================================

/// Whether a zero price is accepted at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Price must be strictly positive
    Enforced,
    /// Price may be zero; negative is still rejected
    Permissive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub policy: ImpactPolicy,
    pub validation: ValidationMode,
    pub badge_rules: BadgeRules,

    /// Factor below this tags a record as a low-impact outcome
    pub low_impact_outcome_factor: f64,

    /// Factor above this triggers green-alternative suggestions
    pub suggestion_factor: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            policy: ImpactPolicy::Linear,
            validation: ValidationMode::Permissive,
            badge_rules: BadgeRules::default(),
            low_impact_outcome_factor: 0.2,
            suggestion_factor: 0.3,
        }
    }
}

// ============================================================================
// REJECTION
// ============================================================================

/// Why a submission was refused. No session state changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Descriptor empty or whitespace-only after trimming
    MissingDescriptor,
    /// Price negative, or non-positive under Enforced validation
    InvalidPrice,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::MissingDescriptor => write!(f, "missing descriptor"),
            RejectionReason::InvalidPrice => write!(f, "non-positive price"),
        }
    }
}

impl std::error::Error for RejectionReason {}

// ============================================================================
// SESSION CONTEXT
// ============================================================================

/// All mutable state for one session, held explicitly (no globals) so
/// multiple independent sessions can coexist in one process.
///
/// Single-threaded by design: every operation runs to completion before the
/// next, so aggregates are never observed mid-update.
#[derive(Debug, Clone)]
pub struct SessionContext {
    catalog: ProductCatalog,
    config: SessionConfig,
    ledger: SessionLedger,
    badges: BadgeState,
    last_outcome: Option<ImpactOutcome>,
    last_factor: Option<f64>,
}

impl SessionContext {
    pub fn new(catalog: ProductCatalog, config: SessionConfig) -> Self {
        SessionContext {
            catalog,
            config,
            ledger: SessionLedger::new(),
            badges: BadgeState::new(),
            last_outcome: None,
            last_factor: None,
        }
    }

    /// Session over the default catalog and config
    pub fn with_defaults() -> Self {
        SessionContext::new(ProductCatalog::with_defaults(), SessionConfig::default())
    }

    /// Log a purchase.
    ///
    /// Validates the input, resolves the emissions factor, computes the CO2
    /// estimate under the configured policy, appends the record and
    /// re-evaluates badges. Returns the stored record, or a typed rejection
    /// with the session left untouched.
    pub fn submit(
        &mut self,
        descriptor: &str,
        brand: Option<&str>,
        price: f64,
    ) -> Result<&PurchaseRecord, RejectionReason> {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return Err(RejectionReason::MissingDescriptor);
        }

        let price_ok = match self.config.validation {
            ValidationMode::Enforced => price > 0.0,
            ValidationMode::Permissive => price >= 0.0,
        };
        if !price_ok {
            return Err(RejectionReason::InvalidPrice);
        }

        let factor = self.catalog.resolve(descriptor);
        let co2_kg = self.config.policy.compute(factor, price);
        let outcome = ImpactOutcome::from_factor(factor, self.config.low_impact_outcome_factor);

        let brand = brand
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        self.ledger
            .append(descriptor.to_string(), brand, price, co2_kg, outcome);

        // Badge evaluation runs against the record just stored
        let record_idx = self.ledger.len() - 1;
        let newest = self.ledger.records()[record_idx].clone();
        self.badges.evaluate(&newest, factor, &self.config.badge_rules);

        self.last_outcome = Some(outcome);
        self.last_factor = Some(factor);

        Ok(&self.ledger.records()[record_idx])
    }

    /// Current rollup; empty session yields a valid zero snapshot
    pub fn aggregates(&self) -> AggregateSnapshot {
        self.ledger.aggregates()
    }

    /// Chronological history, read-only
    pub fn history(&self) -> &[PurchaseRecord] {
        self.ledger.records()
    }

    /// Newest-first view for display
    pub fn records_by_recency(&self) -> Vec<&PurchaseRecord> {
        self.ledger.records_by_recency()
    }

    /// Badges earned so far this session
    pub fn badges(&self) -> &BTreeSet<BadgeId> {
        self.badges.earned()
    }

    /// Current tier from mean CO2; None before the first purchase
    pub fn tier(&self) -> Option<ImpactTier> {
        ImpactTier::from_aggregates(&self.ledger.aggregates())
    }

    /// Outcome tag of the most recent submission (drives the decorative
    /// drawing in presentation layers)
    pub fn last_outcome(&self) -> Option<ImpactOutcome> {
        self.last_outcome
    }

    /// Greener alternatives for the last submission, when its factor was
    /// high enough to warrant them
    pub fn suggestions_for_last(&self) -> Option<&'static [&'static str]> {
        let factor = self.last_factor?;
        if factor <= self.config.suggestion_factor {
            return None;
        }
        let last = self.ledger.last()?;
        self.catalog.suggestions(&last.product)
    }

    /// Tip or quote for the last submission: a tip after a low-impact
    /// purchase, a quote after a high-impact one
    pub fn advice_for_last(&self) -> Option<&'static str> {
        let count = self.ledger.len();
        match self.last_outcome? {
            ImpactOutcome::Low => Some(crate::advice::tip_for(count)),
            ImpactOutcome::High => Some(crate::advice::quote_for(count)),
        }
    }

    /// Clear records, aggregates, badges and the last outcome in one step
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.badges.reset();
        self.last_outcome = None;
        self.last_factor = None;
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

// ============================================================================
// TESTS
// ============================================================================
