//! Points ledger, reward catalog and redemption rules for the TastePoints
//! loyalty site.
//!
//! This crate is front-end agnostic: the CLI drives it against a JSON file
//! on disk and the `browser` feature drives it against `window.localStorage`.
//! Everything that touches persisted state goes through [`store::KeyValueStore`].

pub mod catalog;
pub mod feedback;
pub mod ledger;
pub mod prefs;
pub mod redeem;
pub mod restaurants;
pub mod reviews;
pub mod store;
pub mod view;

pub use catalog::{Catalog, CatalogError, RewardDefinition};
pub use ledger::{DEFAULT_STARTING_POINTS, LedgerError, POINTS_KEY, PointsLedger};
pub use redeem::{RedeemError, Redemption, redeem};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use view::{Eligibility, Notice, RewardCard, RewardsView, reward_cards};

/// Stable machine-readable code for an error, used in logs and JSON output.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
