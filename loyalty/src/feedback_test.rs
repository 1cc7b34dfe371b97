use super::*;

#[test]
fn new_trims_fields() {
    let fb = Feedback::new(" Banku Palace ", 4, "  Great banku.\n", Some(" Yaw ")).unwrap();
    assert_eq!(fb.restaurant_name(), "Banku Palace");
    assert_eq!(fb.rating(), 4);
    assert_eq!(fb.comment(), "Great banku.");
    assert_eq!(fb.user_name(), Some("Yaw"));
}

#[test]
fn new_rejects_blank_restaurant() {
    assert_eq!(Feedback::new("  ", 3, "ok", None), Err(FeedbackError::EmptyRestaurant));
}

#[test]
fn new_rejects_out_of_range_rating() {
    assert_eq!(Feedback::new("Osu", 0, "ok", None), Err(FeedbackError::InvalidRating(0)));
    let err = Feedback::new("Osu", 6, "ok", None).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_RATING");
    assert!(err.to_string().contains("between 1 and 5"));
}

#[test]
fn new_rejects_blank_comment() {
    assert_eq!(Feedback::new("Jollof Joint", 5, " ", None), Err(FeedbackError::EmptyComment));
}

#[test]
fn blank_user_name_is_dropped() {
    let fb = Feedback::new("Jollof Joint", 5, "Spicy", Some("  ")).unwrap();
    assert_eq!(fb.user_name(), None);
}

#[test]
fn serializes_camel_case_without_missing_name() {
    let fb = Feedback::new("Jollof Joint", 5, "Spicy", None).unwrap();
    let json = serde_json::to_value(&fb).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "restaurantName": "Jollof Joint",
            "rating": 5,
            "comment": "Spicy"
        })
    );
}
