//! Exchanging points for a reward.
//!
//! Checks run in a fixed order (catalog membership, then affordability) and
//! the ledger is written exactly once, after both pass. A rejected attempt
//! never touches storage.

use serde::Serialize;
use tracing::info;

use crate::ErrorCode;
use crate::catalog::{Catalog, RewardDefinition};
use crate::ledger::{LedgerError, PointsLedger};
use crate::store::KeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum RedeemError {
    #[error("unknown reward {0}")]
    UnknownReward(u32),

    #[error("insufficient points for {}: costs {}, balance {balance}", .reward.name, .reward.cost)]
    InsufficientPoints { reward: RewardDefinition, balance: u32 },

    #[error("ledger update failed: {0}")]
    Ledger(#[from] LedgerError),
}

impl ErrorCode for RedeemError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownReward(_) => "E_UNKNOWN_REWARD",
            Self::InsufficientPoints { .. } => "E_INSUFFICIENT_POINTS",
            Self::Ledger(e) => e.error_code(),
        }
    }
}

/// A completed redemption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Redemption {
    pub reward: RewardDefinition,
    pub new_balance: u32,
}

/// Redeem `reward_id` against `ledger`.
///
/// # Errors
///
/// - [`RedeemError::UnknownReward`] if the id is not in `catalog`.
/// - [`RedeemError::InsufficientPoints`] if the balance is below the cost.
/// - [`RedeemError::Ledger`] if persisting the new balance fails; the stored
///   balance is then still the old one.
pub fn redeem<S: KeyValueStore>(
    reward_id: u32,
    catalog: &Catalog,
    ledger: &PointsLedger<S>,
) -> Result<Redemption, RedeemError> {
    let reward = catalog
        .find_reward(reward_id)
        .ok_or(RedeemError::UnknownReward(reward_id))?;

    let balance = ledger.balance();
    let Some(new_balance) = balance.checked_sub(reward.cost) else {
        info!(reward_id, cost = reward.cost, balance, "redemption rejected: insufficient points");
        return Err(RedeemError::InsufficientPoints { reward: reward.clone(), balance });
    };

    ledger.set_balance(i64::from(new_balance))?;
    info!(reward_id, reward = %reward.name, new_balance, "reward redeemed");

    Ok(Redemption { reward: reward.clone(), new_balance })
}

#[cfg(test)]
#[path = "redeem_test.rs"]
mod tests;
