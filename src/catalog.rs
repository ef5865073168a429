// 🌿 Product Catalog - Emissions Factor Resolver
// Maps product categories to kg CO2e per $ spent, with a default fallback

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable lookup table from a normalized product descriptor to its
/// emissions factor. Unknown descriptors resolve to `default_factor`, so
/// resolution never fails.
///
/// Keys are stored lower-cased and trimmed; `resolve` normalizes its input
/// the same way, so " Beef ", "BEEF" and "beef" all hit the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCatalog {
    factors: HashMap<String, f64>,
    default_factor: f64,
}

/// On-disk catalog format (JSON)
#[derive(Debug, Deserialize)]
struct CatalogFile {
    factors: HashMap<String, f64>,
    default_factor: f64,
}

impl ProductCatalog {
    /// Build a catalog from raw (label, factor) pairs.
    /// Labels are normalized; every factor must be strictly positive.
    pub fn new(entries: Vec<(String, f64)>, default_factor: f64) -> Result<Self> {
        if default_factor <= 0.0 {
            return Err(anyhow!(
                "default factor must be positive, got {}",
                default_factor
            ));
        }

        let mut factors = HashMap::with_capacity(entries.len());
        for (label, factor) in entries {
            if factor <= 0.0 {
                return Err(anyhow!(
                    "factor for '{}' must be positive, got {}",
                    label,
                    factor
                ));
            }
            factors.insert(normalize(&label), factor);
        }

        Ok(ProductCatalog {
            factors,
            default_factor,
        })
    }

    /// Catalog pre-loaded with the standard category table
    /// (kg CO2e per $ spent, simplified estimation).
    pub fn with_defaults() -> Self {
        let entries = [
            ("Fast Fashion Clothing", 0.5),
            ("Sustainable Clothing", 0.1),
            ("Electronics", 0.3),
            ("Leather Goods", 0.8),
            ("Second-hand/Thrift", 0.05),
            ("Local Produce", 0.1),
            ("Imported Processed Food", 0.4),
            ("Plastic Home Goods", 0.6),
            ("Bamboo/Wooden Goods", 0.15),
        ];

        let factors = entries
            .iter()
            .map(|(label, factor)| (normalize(label), *factor))
            .collect();

        ProductCatalog {
            factors,
            // Mid-range fallback for free-text descriptors outside the table
            default_factor: 0.35,
        }
    }

    /// Load a catalog from a JSON file:
    /// `{ "factors": { "label": 0.5, ... }, "default_factor": 0.35 }`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;

        let file: CatalogFile =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        ProductCatalog::new(file.factors.into_iter().collect(), file.default_factor)
    }

    /// Resolve a descriptor to its emissions factor.
    ///
    /// Normalizes the descriptor, looks it up, and falls back to the default
    /// factor on a miss. Pure; any input yields a deterministic result.
    pub fn resolve(&self, descriptor: &str) -> f64 {
        self.factors
            .get(&normalize(descriptor))
            .copied()
            .unwrap_or(self.default_factor)
    }

    /// Whether the descriptor has an exact catalog entry (after normalization)
    pub fn contains(&self, descriptor: &str) -> bool {
        self.factors.contains_key(&normalize(descriptor))
    }

    pub fn default_factor(&self) -> f64 {
        self.default_factor
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Read-only view of the factor table
    pub fn factors(&self) -> &HashMap<String, f64> {
        &self.factors
    }

    /// Greener alternatives for high-impact categories.
    /// Returns None for categories without curated suggestions.
    pub fn suggestions(&self, descriptor: &str) -> Option<&'static [&'static str]> {
        match normalize(descriptor).as_str() {
            "fast fashion clothing" => Some(&[
                "Patagonia",
                "ThredUp",
                "Local Thrift Stores",
                "Organic Cotton Brands",
            ]),
            "electronics" => Some(&[
                "Back Market (Refurbished)",
                "Fairphone",
                "Keep current device longer",
            ]),
            "leather goods" => Some(&[
                "Pinatex (Pineapple Leather)",
                "Cork Leather",
                "Recycled Canvas",
            ]),
            "imported processed food" => Some(&[
                "Local Farmers Market",
                "Seasonal Veggies",
                "Bulk Stores",
            ]),
            "plastic home goods" => Some(&[
                "Glass Containers",
                "Bamboo Utensils",
                "Stainless Steel",
            ]),
            _ => None,
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Canonical key form: lower-cased, trimmed
pub fn normalize(descriptor: &str) -> String {
    descriptor.trim().to_lowercase()
}

// ============================================================================
// TESTS
// ============================================================================
