// 📏 Impact Calculator - CO2 estimation policies
// Two historical formulas, kept as explicit strategies

use serde::{Deserialize, Serialize};

// ============================================================================
// POLICY
// ============================================================================

/// How a resolved emissions factor combines with a price.
///
/// Both variants are in active use and intentionally kept separate:
/// `Linear` treats the factor as kg CO2e per $ spent, `Scaled` treats it as
/// a baseline impact per typical $10 purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactPolicy {
    /// co2 = price * factor
    Linear,

    /// co2 = factor * (price / 10), with a floor multiplier of 1 when the
    /// price is zero so a free item still carries its baseline impact
    Scaled,
}

impl ImpactPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactPolicy::Linear => "Linear",
            ImpactPolicy::Scaled => "Scaled",
        }
    }

    /// Compute the CO2 estimate (kg) for a resolved factor and price.
    ///
    /// Never fails: price 0 yields 0.0 under Linear and `factor` under
    /// Scaled. Result is rounded to 2 decimals for display and storage.
    pub fn compute(&self, factor: f64, price: f64) -> f64 {
        let co2 = match self {
            ImpactPolicy::Linear => price * factor,
            ImpactPolicy::Scaled => {
                let multiplier = if price > 0.0 { price / 10.0 } else { 1.0 };
                factor * multiplier
            }
        };
        round2(co2)
    }
}

impl Default for ImpactPolicy {
    fn default() -> Self {
        ImpactPolicy::Linear
    }
}

/// Round to 2 decimal places (storage/display precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// OUTCOME TAG
// ============================================================================

/// Coarse tag attached to each computed record so a presentation layer can
/// react (the dashboard draws a leaf for Low, a footprint for High) without
/// the core knowing anything about drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactOutcome {
    /// Factor below the low-impact threshold
    Low,
    /// Everything else
    High,
}

impl ImpactOutcome {
    /// Classify a resolved factor against the configured low-impact threshold
    pub fn from_factor(factor: f64, low_impact_threshold: f64) -> Self {
        if factor < low_impact_threshold {
            ImpactOutcome::Low
        } else {
            ImpactOutcome::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactOutcome::Low => "Low",
            ImpactOutcome::High => "High",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
