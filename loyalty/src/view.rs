//! Presentation model for the rewards page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renderers (terminal output, a wasm page) consume [`RewardCard`]s and
//! [`Notice`]s instead of touching the ledger directly. After a successful
//! redemption, [`RewardsView`] notifies its listeners so the caller can
//! redraw with the fresh balance; nothing relies on reloading the page.

use std::fmt;

use serde::Serialize;

use crate::catalog::{Catalog, RewardDefinition};
use crate::ledger::PointsLedger;
use crate::redeem::{RedeemError, Redemption, redeem};
use crate::store::KeyValueStore;

/// Whether a reward is affordable at a given balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

impl Eligibility {
    #[must_use]
    pub fn of(balance: u32, cost: u32) -> Self {
        if balance >= cost { Self::Eligible } else { Self::Ineligible }
    }

    #[must_use]
    pub fn is_eligible(self) -> bool {
        self == Self::Eligible
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RewardCard {
    pub reward: RewardDefinition,
    pub eligibility: Eligibility,
}

/// One card per reward, in catalog order.
#[must_use]
pub fn reward_cards(catalog: &Catalog, balance: u32) -> Vec<RewardCard> {
    catalog
        .iter()
        .map(|reward| RewardCard {
            reward: reward.clone(),
            eligibility: Eligibility::of(balance, reward.cost),
        })
        .collect()
}

/// Header shown above the reward list.
#[must_use]
pub fn points_label(balance: u32) -> String {
    format!("Your Points: {balance}")
}

// =============================================================================
// NOTICES
// =============================================================================

/// User-facing outcome of a redemption attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Redeemed { reward_name: String },
    NotEnoughPoints,
    Failed,
}

impl Notice {
    #[must_use]
    pub fn from_outcome(outcome: &Result<Redemption, RedeemError>) -> Self {
        match outcome {
            Ok(r) => Self::Redeemed { reward_name: r.reward.name.clone() },
            Err(RedeemError::InsufficientPoints { .. }) => Self::NotEnoughPoints,
            Err(RedeemError::UnknownReward(_) | RedeemError::Ledger(_)) => Self::Failed,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Redeemed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redeemed { reward_name } => write!(f, "Successfully redeemed: {reward_name}"),
            Self::NotEnoughPoints => f.write_str("Not enough points to redeem this reward."),
            Self::Failed => f.write_str("Unable to redeem this reward."),
        }
    }
}

// =============================================================================
// VIEW
// =============================================================================

type RedeemListener = Box<dyn FnMut(&Redemption)>;

/// Catalog and ledger for one page, plus redraw hooks.
pub struct RewardsView<S> {
    catalog: Catalog,
    ledger: PointsLedger<S>,
    listeners: Vec<RedeemListener>,
}

impl<S: KeyValueStore> RewardsView<S> {
    #[must_use]
    pub fn new(catalog: Catalog, ledger: PointsLedger<S>) -> Self {
        Self { catalog, ledger, listeners: Vec::new() }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &PointsLedger<S> {
        &self.ledger
    }

    /// Fresh read from storage.
    #[must_use]
    pub fn balance(&self) -> u32 {
        self.ledger.balance()
    }

    /// Cards with eligibility computed against the current stored balance.
    #[must_use]
    pub fn cards(&self) -> Vec<RewardCard> {
        reward_cards(&self.catalog, self.ledger.balance())
    }

    /// Register a callback fired after every successful redemption.
    pub fn subscribe(&mut self, listener: impl FnMut(&Redemption) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Redeem `reward_id` and notify listeners on success.
    ///
    /// # Errors
    ///
    /// See [`redeem`]. Listeners are not called on failure.
    pub fn redeem(&mut self, reward_id: u32) -> Result<Redemption, RedeemError> {
        let redemption = redeem(reward_id, &self.catalog, &self.ledger)?;
        for listener in &mut self.listeners {
            listener(&redemption);
        }
        Ok(redemption)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
