//! Wire models for the dashboard's JSON endpoints
//!
//! Each file mirrors one endpoint's response shape. Optional list fields
//! default to empty: a missing field is a normal "nothing to show" case,
//! never an error.

pub mod branding;
pub mod notification;
pub mod scalar;
pub mod wallet;

// Re-export commonly used types for convenience
pub use branding::BrandingSuggestion;
pub use notification::{NotificationFeed, NotificationRecord};
pub use scalar::Scalar;
pub use wallet::{LedgerEntry, WalletSnapshot};
