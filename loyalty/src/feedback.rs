//! Feedback form payload.
//!
//! The form used to be posted as whatever key/value pairs the page held.
//! [`Feedback`] validates the fields up front so the HTTP layer only ever
//! sends a well-formed record.

use serde::Serialize;

use crate::ErrorCode;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("restaurant name is required")]
    EmptyRestaurant,

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("comment is required")]
    EmptyComment,
}

impl ErrorCode for FeedbackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRestaurant => "E_EMPTY_RESTAURANT",
            Self::InvalidRating(_) => "E_INVALID_RATING",
            Self::EmptyComment => "E_EMPTY_COMMENT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    restaurant_name: String,
    rating: u8,
    comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
}

impl Feedback {
    /// Validate and trim form input.
    ///
    /// # Errors
    ///
    /// Returns the first [`FeedbackError`] found, checking restaurant,
    /// rating, then comment.
    pub fn new(
        restaurant_name: &str,
        rating: u8,
        comment: &str,
        user_name: Option<&str>,
    ) -> Result<Self, FeedbackError> {
        let restaurant_name = restaurant_name.trim();
        if restaurant_name.is_empty() {
            return Err(FeedbackError::EmptyRestaurant);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::InvalidRating(rating));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(FeedbackError::EmptyComment);
        }
        let user_name = user_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        Ok(Self {
            restaurant_name: restaurant_name.to_owned(),
            rating,
            comment: comment.to_owned(),
            user_name,
        })
    }

    #[must_use]
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
