//! Featured restaurants shown on the landing page.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Restaurant {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: f32,
}

pub const RESTAURANTS: [Restaurant; 5] = [
    Restaurant { name: "Taste of Ghana", location: "Accra Mall", rating: 4.5 },
    Restaurant { name: "Chop Bar Deluxe", location: "Osu", rating: 4.2 },
    Restaurant { name: "Banku Palace", location: "East Legon", rating: 4.0 },
    Restaurant { name: "Jollof Joint", location: "Tema", rating: 3.8 },
    Restaurant { name: "Kelewele Kitchen", location: "Spintex", rating: 4.6 },
];

/// Case-insensitive lookup used to preselect a restaurant for feedback.
#[must_use]
pub fn find_restaurant(name: &str) -> Option<&'static Restaurant> {
    let wanted = name.trim();
    RESTAURANTS.iter().find(|r| r.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
#[path = "restaurants_test.rs"]
mod tests;
