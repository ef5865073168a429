// ShopImpact - Core Library
// Impact estimation and session accounting for the mindful-shopping dashboard

pub mod advice;
pub mod badges;
pub mod catalog;
pub mod impact;
pub mod ledger;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use badges::{BadgeId, BadgeRules, BadgeState, ImpactTier};
pub use catalog::ProductCatalog;
pub use impact::{ImpactOutcome, ImpactPolicy};
pub use ledger::{AggregateSnapshot, PurchaseRecord, SessionLedger};
pub use report::{export_csv, write_csv};
pub use session::{RejectionReason, SessionConfig, SessionContext, ValidationMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
