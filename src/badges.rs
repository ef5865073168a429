// 🏅 Badges & Tiers - Gamification over the session ledger
// Tier is recomputed fresh from aggregates; event badges award at most once

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ledger::{AggregateSnapshot, PurchaseRecord};

// ============================================================================
// THRESHOLD TIER
// ============================================================================

/// Coarse banding of average impact per purchase. Not tracked over time:
/// every call derives the tier from the current aggregates, overwriting
/// whatever was shown before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactTier {
    /// Mean CO2 per purchase below 10 kg
    EcoSaver,
    /// Mean below 30 kg
    ConsciousConsumer,
    /// Everything above
    HighImpact,
}

impl ImpactTier {
    /// Derive the tier from current aggregates; None for an empty session
    pub fn from_aggregates(agg: &AggregateSnapshot) -> Option<Self> {
        if agg.count == 0 {
            return None;
        }

        Some(if agg.mean_co2 < 10.0 {
            ImpactTier::EcoSaver
        } else if agg.mean_co2 < 30.0 {
            ImpactTier::ConsciousConsumer
        } else {
            ImpactTier::HighImpact
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::EcoSaver => "Eco Saver of the Month",
            ImpactTier::ConsciousConsumer => "Conscious Consumer",
            ImpactTier::HighImpact => "High Impact Shopper",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ImpactTier::EcoSaver => "🍃",
            ImpactTier::ConsciousConsumer => "🏅",
            ImpactTier::HighImpact => "👣",
        }
    }
}

// ============================================================================
// EVENT BADGES
// ============================================================================

/// One-time achievement markers tied to purchase patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeId {
    /// Logged a purchase with a low-impact emissions factor
    EcoShopper,
    /// Bought second-hand
    ThriftKing,
    /// Spent big on something low-impact
    SmartSplurger,
}

impl BadgeId {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeId::EcoShopper => "Eco Shopper",
            BadgeId::ThriftKing => "Thrift King",
            BadgeId::SmartSplurger => "Smart Splurger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BadgeId::EcoShopper => "🌱",
            BadgeId::ThriftKing => "👑",
            BadgeId::SmartSplurger => "💎",
        }
    }
}

/// Thresholds the badge rules evaluate against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRules {
    /// Factor at or below this counts as low-impact
    pub low_impact_factor: f64,

    /// Normalized catalog key that earns ThriftKing
    pub thrift_category: String,

    /// Price above this, combined with a low factor, earns SmartSplurger
    pub splurge_price: f64,
}

impl Default for BadgeRules {
    fn default() -> Self {
        BadgeRules {
            low_impact_factor: 0.2,
            thrift_category: "second-hand/thrift".to_string(),
            splurge_price: 100.0,
        }
    }
}

/// Distinct badges earned this session.
///
/// Awarding is idempotent: a rule that has already fired is skipped, so a
/// badge identifier appears at most once no matter how many qualifying
/// purchases follow.
#[derive(Debug, Clone, Default)]
pub struct BadgeState {
    earned: BTreeSet<BadgeId>,
}

impl BadgeState {
    pub fn new() -> Self {
        BadgeState::default()
    }

    /// Evaluate every rule against the newest record. Returns the badges
    /// newly awarded by this evaluation (possibly empty). Never fails.
    pub fn evaluate(
        &mut self,
        record: &PurchaseRecord,
        factor: f64,
        rules: &BadgeRules,
    ) -> Vec<BadgeId> {
        let mut awarded = Vec::new();

        if factor <= rules.low_impact_factor {
            self.award(BadgeId::EcoShopper, &mut awarded);
        }

        if crate::catalog::normalize(&record.product) == rules.thrift_category {
            self.award(BadgeId::ThriftKing, &mut awarded);
        }

        if record.price > rules.splurge_price && factor <= rules.low_impact_factor {
            self.award(BadgeId::SmartSplurger, &mut awarded);
        }

        awarded
    }

    fn award(&mut self, badge: BadgeId, awarded: &mut Vec<BadgeId>) {
        // Membership check first: each badge fires at most once per session
        if self.earned.insert(badge) {
            awarded.push(badge);
        }
    }

    pub fn earned(&self) -> &BTreeSet<BadgeId> {
        &self.earned
    }

    pub fn has(&self, badge: BadgeId) -> bool {
        self.earned.contains(&badge)
    }

    pub fn reset(&mut self) {
        self.earned.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::ImpactOutcome;
    use chrono::Utc;

    fn record(product: &str, price: f64) -> PurchaseRecord {
        PurchaseRecord {
            id: "test".to_string(),
            logged_at: Utc::now(),
            product: product.to_string(),
            brand: None,
            price,
            co2_kg: 1.0,
            outcome: ImpactOutcome::Low,
        }
    }

    fn snapshot(count: usize, mean_co2: f64) -> AggregateSnapshot {
        AggregateSnapshot {
            count,
            total_price: 0.0,
            total_co2: mean_co2 * count as f64,
            mean_co2,
        }
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(
            ImpactTier::from_aggregates(&snapshot(3, 5.0)),
            Some(ImpactTier::EcoSaver)
        );
        assert_eq!(
            ImpactTier::from_aggregates(&snapshot(2, 15.2)),
            Some(ImpactTier::ConsciousConsumer)
        );
        assert_eq!(
            ImpactTier::from_aggregates(&snapshot(1, 30.0)),
            Some(ImpactTier::HighImpact)
        );
    }

    #[test]
    fn test_tier_empty_session_has_no_tier() {
        assert_eq!(ImpactTier::from_aggregates(&snapshot(0, 0.0)), None);
    }

    #[test]
    fn test_tier_band_edges() {
        // Bands are half-open: 10 falls into the middle band, 30 into high
        assert_eq!(
            ImpactTier::from_aggregates(&snapshot(1, 10.0)),
            Some(ImpactTier::ConsciousConsumer)
        );
        assert_eq!(
            ImpactTier::from_aggregates(&snapshot(1, 9.99)),
            Some(ImpactTier::EcoSaver)
        );
    }

    #[test]
    fn test_eco_shopper_awarded_for_low_factor() {
        let mut state = BadgeState::new();
        let rules = BadgeRules::default();

        let awarded = state.evaluate(&record("Local Produce", 5.0), 0.1, &rules);
        assert_eq!(awarded, vec![BadgeId::EcoShopper]);
        assert!(state.has(BadgeId::EcoShopper));
    }

    #[test]
    fn test_thrift_king_idempotent() {
        let mut state = BadgeState::new();
        let rules = BadgeRules::default();

        let first = state.evaluate(&record("Second-hand/Thrift", 20.0), 0.05, &rules);
        assert!(first.contains(&BadgeId::ThriftKing));

        // Second qualifying purchase must not duplicate the badge
        let second = state.evaluate(&record(" SECOND-HAND/THRIFT ", 8.0), 0.05, &rules);
        assert!(!second.contains(&BadgeId::ThriftKing));

        assert_eq!(
            state.earned().iter().filter(|b| **b == BadgeId::ThriftKing).count(),
            1
        );
    }

    #[test]
    fn test_smart_splurger_needs_both_conditions() {
        let mut state = BadgeState::new();
        let rules = BadgeRules::default();

        // Expensive but high-impact: no badge
        let awarded = state.evaluate(&record("Leather Goods", 250.0), 0.8, &rules);
        assert!(awarded.is_empty());

        // Cheap and low-impact: EcoShopper only
        let awarded = state.evaluate(&record("Bamboo/Wooden Goods", 12.0), 0.15, &rules);
        assert_eq!(awarded, vec![BadgeId::EcoShopper]);

        // Expensive and low-impact: SmartSplurger
        let awarded = state.evaluate(&record("Bamboo/Wooden Goods", 150.0), 0.15, &rules);
        assert_eq!(awarded, vec![BadgeId::SmartSplurger]);
    }

    #[test]
    fn test_unmatched_state_awards_nothing() {
        let mut state = BadgeState::new();
        let rules = BadgeRules::default();

        let awarded = state.evaluate(&record("Electronics", 30.0), 0.3, &rules);
        assert!(awarded.is_empty());
        assert!(state.earned().is_empty());
    }

    #[test]
    fn test_reset_clears_badges() {
        let mut state = BadgeState::new();
        let rules = BadgeRules::default();
        state.evaluate(&record("Local Produce", 5.0), 0.1, &rules);
        assert!(!state.earned().is_empty());

        state.reset();
        assert!(state.earned().is_empty());

        // Rule can fire again in the fresh session
        let awarded = state.evaluate(&record("Local Produce", 5.0), 0.1, &rules);
        assert_eq!(awarded, vec![BadgeId::EcoShopper]);
    }
}
