//! Static reward catalog.
//!
//! The catalog is fixed once built: no insert or remove after construction,
//! and declaration order is display order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate reward id {0}")]
    DuplicateId(u32),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId(_) => "E_DUPLICATE_REWARD",
            Self::Json(_) => "E_CATALOG_JSON",
        }
    }
}

/// A redeemable reward and its point cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDefinition {
    pub id: u32,
    pub name: String,
    pub cost: u32,
}

impl RewardDefinition {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, cost: u32) -> Self {
        Self { id, name: name.into(), cost }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    rewards: Vec<RewardDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(rewards: Vec<RewardDefinition>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for reward in &rewards {
            if !seen.insert(reward.id) {
                return Err(CatalogError::DuplicateId(reward.id));
            }
        }
        Ok(Self { rewards })
    }

    /// Parse a catalog from a JSON array of `{ "id", "name", "cost" }`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] on malformed input (including negative
    /// costs) and [`CatalogError::DuplicateId`] on repeated ids.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let rewards: Vec<RewardDefinition> = serde_json::from_str(raw)?;
        Self::new(rewards)
    }

    /// Look up a reward by id. Linear scan; catalogs are a handful of rows.
    #[must_use]
    pub fn find_reward(&self, id: u32) -> Option<&RewardDefinition> {
        self.rewards.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewardDefinition> {
        self.rewards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
}

impl Default for Catalog {
    /// The rewards offered on the live site.
    fn default() -> Self {
        Self {
            rewards: vec![
                RewardDefinition::new(1, "Free Drink", 50),
                RewardDefinition::new(2, "10% Off Next Meal", 100),
                RewardDefinition::new(3, "Free Dessert", 80),
                RewardDefinition::new(4, "GHS 10 Voucher", 120),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RewardDefinition;
    type IntoIter = std::slice::Iter<'a, RewardDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.rewards.iter()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
