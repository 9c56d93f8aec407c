use gearlog_core::{Category, Product, Rating, RatingValidationError, MAX_STARS};
use uuid::Uuid;

#[test]
fn rating_new_generates_id_and_renders_review_line() {
    let rating = Rating::new("AirMax", "alice", 4, "good");

    assert!(!rating.uuid.is_nil());
    assert_eq!(rating.product, "AirMax");
    assert_eq!(rating.user, "alice");
    assert_eq!(rating.stars, 4);
    assert_eq!(rating.to_string(), "4 : good");
}

#[test]
fn rating_validate_accepts_full_range_and_rejects_above_max() {
    for stars in 0..=MAX_STARS {
        Rating::new("AirMax", "alice", stars, "ok")
            .validate()
            .expect("in-range stars should validate");
    }

    let err = Rating::new("AirMax", "alice", 6, "too high")
        .validate()
        .expect_err("stars above max should be rejected");
    assert_eq!(err, RatingValidationError::StarsOutOfRange(6));
    assert!(err.to_string().contains("between 0 and 5"));
}

#[test]
fn category_links_activities_by_value() {
    let category = Category::new("Shoes", ["Running", "Trail"]);

    assert!(!category.uuid.is_nil());
    assert!(category.links_activity("Trail"));
    assert!(!category.links_activity("Swimming"));
    assert_eq!(category.linked_activities, ["Running", "Trail"]);
}

#[test]
fn product_serialization_uses_expected_wire_fields() {
    let product_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let product = Product::with_id(product_id, "AirMax", "Running", "Shoes");

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["uuid"], product_id.to_string());
    assert_eq!(json["name"], "AirMax");
    assert_eq!(json["activity"], "Running");
    assert_eq!(json["category"], "Shoes");

    let decoded: Product = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, product);
}

#[test]
fn rating_serialization_round_trips() {
    let rating_id = Uuid::parse_str("22222222-3333-4444-8555-666666666666").unwrap();
    let rating = Rating::with_id(rating_id, "AirMax", "alice", 4, "good");

    let json = serde_json::to_value(&rating).unwrap();
    assert_eq!(json["uuid"], rating_id.to_string());
    assert_eq!(json["product"], "AirMax");
    assert_eq!(json["user"], "alice");
    assert_eq!(json["stars"], 4);
    assert_eq!(json["comment"], "good");

    let decoded: Rating = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, rating);
}

#[test]
fn category_serialization_keeps_link_order() {
    let category_id = Uuid::parse_str("33333333-4444-4555-8666-777777777777").unwrap();
    let category = Category::with_id(category_id, "Socks", ["Running", "Hiking"]);

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["name"], "Socks");
    assert_eq!(json["linked_activities"][0], "Running");
    assert_eq!(json["linked_activities"][1], "Hiking");

    let decoded: Category = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, category);
}
