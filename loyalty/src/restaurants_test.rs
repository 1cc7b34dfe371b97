use super::*;

#[test]
fn listing_keeps_declaration_order() {
    let names: Vec<&str> = RESTAURANTS.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["Taste of Ghana", "Chop Bar Deluxe", "Banku Palace", "Jollof Joint", "Kelewele Kitchen"]
    );
}

#[test]
fn find_restaurant_ignores_case_and_padding() {
    let found = find_restaurant("  jollof JOINT ").unwrap();
    assert_eq!(found.location, "Tema");
}

#[test]
fn find_restaurant_unknown_is_none() {
    assert!(find_restaurant("Waakye Hub").is_none());
}
