//! Points ledger persisted under a single storage key.
//!
//! DESIGN
//! ======
//! The store is the only source of truth: every [`PointsLedger::balance`]
//! call re-reads it, so eligibility is never computed from a stale copy.
//! A missing or unparseable entry reads as the starting balance instead of
//! failing; the value is only written back by a redemption.
//!
//! Writes are crate-private. [`crate::redeem::redeem`] is the only
//! production caller, which keeps the non-negative invariant in one place.

use tracing::{debug, warn};

use crate::ErrorCode;
use crate::store::{KeyValueStore, StoreError};

/// Storage key holding the balance as a decimal string.
pub const POINTS_KEY: &str = "userPoints";

/// Balance reported when the store holds nothing usable.
pub const DEFAULT_STARTING_POINTS: u32 = 120;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid balance {0}: must be a non-negative integer")]
    InvalidValue(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => "E_INVALID_BALANCE",
            Self::Store(e) => e.error_code(),
        }
    }
}

pub struct PointsLedger<S> {
    store: S,
    starting_points: u32,
}

impl<S: KeyValueStore> PointsLedger<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_starting_points(store, DEFAULT_STARTING_POINTS)
    }

    #[must_use]
    pub fn with_starting_points(store: S, starting_points: u32) -> Self {
        Self { store, starting_points }
    }

    #[must_use]
    pub fn starting_points(&self) -> u32 {
        self.starting_points
    }

    /// Current balance, falling back to the starting balance when the stored
    /// entry is absent or not a non-negative integer.
    #[must_use]
    pub fn balance(&self) -> u32 {
        let Some(raw) = self.store.get(POINTS_KEY) else {
            debug!(default = self.starting_points, "no stored balance; using default");
            return self.starting_points;
        };
        match parse_balance(&raw) {
            Some(balance) => balance,
            None => {
                warn!(stored = %raw, default = self.starting_points, "unparseable stored balance; using default");
                self.starting_points
            }
        }
    }

    /// Persist `value` as the new balance.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidValue`] if `value` is negative or does not fit
    /// the balance type; [`LedgerError::Store`] if the write fails. Either
    /// way the stored balance is unchanged.
    pub(crate) fn set_balance(&self, value: i64) -> Result<(), LedgerError> {
        let balance = u32::try_from(value).map_err(|_| LedgerError::InvalidValue(value))?;
        self.store.set(POINTS_KEY, &balance.to_string())?;
        debug!(balance, "balance persisted");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Strict decimal parse; surrounding whitespace is tolerated, signs and
/// trailing garbage are not.
fn parse_balance(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
