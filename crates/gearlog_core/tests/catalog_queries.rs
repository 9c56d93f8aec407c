use gearlog_core::CatalogService;

#[test]
fn products_for_category_matches_by_value_and_sorts() {
    let catalog = running_gear_catalog();

    assert_eq!(
        catalog.products_for_category("Shoes"),
        ["AirMax", "Trail Blazer"]
    );
    assert_eq!(catalog.products_for_category("Socks"), ["Wave Rider"]);
    assert!(catalog.products_for_category("Hats").is_empty());
}

#[test]
fn products_for_activity_returns_product_names_sorted() {
    let catalog = running_gear_catalog();

    assert_eq!(
        catalog.products_for_activity("Running"),
        ["AirMax", "Trail Blazer", "Wave Rider"]
    );
    assert_eq!(catalog.products_for_activity("Swimming"), ["Fins"]);
    assert!(catalog.products_for_activity("Cycling").is_empty());
}

#[test]
fn products_for_combines_activity_with_any_listed_category() {
    let catalog = running_gear_catalog();

    assert_eq!(
        catalog.products_for("Running", ["Shoes", "Socks"]),
        ["AirMax", "Trail Blazer", "Wave Rider"]
    );
    assert_eq!(catalog.products_for("Running", ["Socks"]), ["Wave Rider"]);
    assert!(catalog.products_for("Swimming", ["Shoes"]).is_empty());
    assert!(catalog
        .products_for("Running", Vec::<&str>::new())
        .is_empty());
}

#[test]
fn categories_for_activity_returns_sorted_category_names() {
    let mut catalog = CatalogService::new();
    catalog
        .define_activities(["Running", "Hiking", "Swimming"])
        .expect("activities should register");
    catalog
        .add_category("Shoes", ["Running"])
        .expect("category should register");
    catalog
        .add_category("Socks", ["Running", "Hiking"])
        .expect("category should register");
    catalog
        .add_category("Goggles", ["Swimming"])
        .expect("category should register");

    assert_eq!(catalog.categories_for_activity("Running"), ["Shoes", "Socks"]);
    assert_eq!(catalog.categories_for_activity("Hiking"), ["Socks"]);
    assert!(catalog.categories_for_activity("Cycling").is_empty());
}

#[test]
fn categories_for_activity_lists_a_name_once() {
    let mut catalog = CatalogService::new();
    catalog
        .define_activities(["Running"])
        .expect("activities should register");
    catalog
        .add_category("Shoes", ["Running"])
        .expect("category should register");
    catalog
        .add_category("Shoes", ["Running"])
        .expect("same-named category should register");

    assert_eq!(catalog.category_count(), 2);
    assert_eq!(catalog.categories_for_activity("Running"), ["Shoes"]);
}

#[test]
fn ratings_for_product_sorts_by_stars_descending() {
    let mut catalog = CatalogService::new();
    catalog
        .add_rating("AirMax", "alice", 2, "meh")
        .expect("rating should store");
    catalog
        .add_rating("AirMax", "bob", 5, "great")
        .expect("rating should store");
    catalog
        .add_rating("AirMax", "carol", 4, "good")
        .expect("rating should store");
    catalog
        .add_rating("Fins", "dave", 1, "leaky")
        .expect("rating should store");

    assert_eq!(
        catalog.ratings_for_product("AirMax"),
        ["5 : great", "4 : good", "2 : meh"]
    );
    assert!(catalog.ratings_for_product("Unknown").is_empty());
}

#[test]
fn ratings_with_equal_stars_keep_submission_order() {
    let mut catalog = CatalogService::new();
    catalog
        .add_rating("AirMax", "alice", 4, "solid")
        .expect("rating should store");
    catalog
        .add_rating("AirMax", "bob", 4, "decent")
        .expect("rating should store");

    assert_eq!(
        catalog.ratings_for_product("AirMax"),
        ["4 : solid", "4 : decent"]
    );
}

#[test]
fn review_walkthrough_matches_expected_aggregates() {
    let mut catalog = CatalogService::new();
    catalog
        .define_activities(["Running", "Swimming"])
        .expect("activities should register");
    catalog
        .add_category("Shoes", ["Running"])
        .expect("category should register");
    catalog
        .add_product("AirMax", "Running", "Shoes")
        .expect("product should register");
    catalog
        .add_rating("AirMax", "alice", 4, "good")
        .expect("rating should store");
    catalog
        .add_rating("AirMax", "bob", 2, "meh")
        .expect("rating should store");

    assert_eq!(catalog.average_stars_for_product("AirMax"), 3.0);
    assert_eq!(catalog.products_for_category("Shoes"), ["AirMax"]);
}

fn running_gear_catalog() -> CatalogService {
    let mut catalog = CatalogService::new();
    catalog
        .add_product("Trail Blazer", "Running", "Shoes")
        .expect("product should register");
    catalog
        .add_product("AirMax", "Running", "Shoes")
        .expect("product should register");
    catalog
        .add_product("Wave Rider", "Running", "Socks")
        .expect("product should register");
    catalog
        .add_product("Fins", "Swimming", "Flippers")
        .expect("product should register");
    catalog
}
