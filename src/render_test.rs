use loyalty::restaurants::RESTAURANTS;
use loyalty::{Catalog, reward_cards};

use super::*;

#[test]
fn restaurant_cards_list_every_restaurant() {
    let out = restaurant_cards(&RESTAURANTS);
    assert!(out.starts_with("Taste of Ghana\n  Location: Accra Mall\n  Rating: ⭐ 4.5\n"));
    assert!(out.contains("Banku Palace\n  Location: East Legon\n  Rating: ⭐ 4.0\n"));
    assert!(out.contains("--restaurant \"Kelewele Kitchen\""));
}

#[test]
fn reward_listing_marks_locked_rewards() {
    let cards = reward_cards(&Catalog::default(), 70);
    let out = reward_listing(70, &cards);
    assert!(out.starts_with("Your Points: 70\n"));
    assert!(out.contains("[1] Free Drink\n    Cost: 50 points\n    (redeem)\n"));
    assert!(out.contains("[2] 10% Off Next Meal\n    Cost: 100 points\n    (locked)\n"));
    assert!(out.contains("[4] GHS 10 Voucher\n    Cost: 120 points\n    (locked)\n"));
}

#[test]
fn reward_listing_empty_catalog_shows_balance_only() {
    assert_eq!(reward_listing(5, &[]), "Your Points: 5\n");
}

#[test]
fn review_cards_render_stars_and_time() {
    let reviews: Vec<Review> = serde_json::from_value(serde_json::json!([
        {"userName": "Akosua", "restaurantName": "Jollof Joint", "rating": 4, "comment": "Smoky", "timeAgo": "2h ago"},
        {"userName": "Kojo", "restaurantName": "Banku Palace", "rating": 1}
    ]))
    .unwrap();
    let out = review_cards(&reviews);
    assert_eq!(
        out,
        "Akosua (2h ago)\n  Jollof Joint ★★★★☆\n  Smoky\n\nKojo\n  Banku Palace ★☆☆☆☆\n"
    );
}

#[test]
fn review_cards_empty_list() {
    assert_eq!(review_cards(&[]), "No reviews yet.\n");
}
