//! Plain-text rendering of restaurant, reward and review cards.

use std::fmt::Write;

use loyalty::reviews::Review;
use loyalty::restaurants::Restaurant;
use loyalty::view::points_label;
use loyalty::{Eligibility, RewardCard};

#[must_use]
pub fn restaurant_cards(restaurants: &[Restaurant]) -> String {
    let mut out = String::new();
    for (idx, r) in restaurants.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", r.name);
        let _ = writeln!(out, "  Location: {}", r.location);
        let _ = writeln!(out, "  Rating: ⭐ {:.1}", r.rating);
        let _ = writeln!(out, "  Rate now: tastepoints feedback --restaurant \"{}\"", r.name);
    }
    out
}

#[must_use]
pub fn reward_listing(balance: u32, cards: &[RewardCard]) -> String {
    let mut out = points_label(balance);
    out.push('\n');
    for card in cards {
        let action = match card.eligibility {
            Eligibility::Eligible => "redeem",
            Eligibility::Ineligible => "locked",
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", card.reward.id, card.reward.name);
        let _ = writeln!(out, "    Cost: {} points", card.reward.cost);
        let _ = writeln!(out, "    ({action})");
    }
    out
}

#[must_use]
pub fn review_cards(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews yet.\n".to_owned();
    }
    let mut out = String::new();
    for (idx, r) in reviews.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        match r.time_ago.as_deref() {
            Some(when) => {
                let _ = writeln!(out, "{} ({when})", r.user_name);
            }
            None => {
                let _ = writeln!(out, "{}", r.user_name);
            }
        }
        let _ = writeln!(out, "  {} {}", r.restaurant_name, r.stars());
        if !r.comment.is_empty() {
            let _ = writeln!(out, "  {}", r.comment);
        }
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
