//! Published reviews and their star rendering.

use serde::{Deserialize, Deserializer};

pub const MAX_STARS: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub time_ago: Option<String>,
    pub restaurant_name: String,
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl Review {
    #[must_use]
    pub fn stars(&self) -> String {
        stars(self.rating)
    }
}

/// Filled stars for `rating`, padded with empty stars to five. Ratings above
/// five render as five.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Accept any JSON number: fractions round down and the result is clamped
/// to `0..=MAX_STARS`, so one odd entry cannot sink a whole review list.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.floor().clamp(0.0, f64::from(MAX_STARS)) as u8)
}

/// Normalized value for the `restaurantName_like` filter, or `None` when the
/// search box is blank.
#[must_use]
pub fn search_filter(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    (!q.is_empty()).then_some(q)
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;
