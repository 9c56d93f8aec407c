//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gearlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use gearlog_core::{CatalogError, CatalogService};

fn main() -> Result<(), CatalogError> {
    println!("gearlog_core version={}", gearlog_core::core_version());

    let mut catalog = CatalogService::new();
    catalog.define_activities(["Running", "Swimming"])?;
    catalog.add_category("Shoes", ["Running"])?;
    catalog.add_product("AirMax", "Running", "Shoes")?;
    catalog.add_rating("AirMax", "alice", 4, "good")?;
    catalog.add_rating("AirMax", "bob", 2, "meh")?;

    println!("activities={:?}", catalog.activities());
    println!("shoes={:?}", catalog.products_for_category("Shoes"));
    println!(
        "airmax_average={}",
        catalog.average_stars_for_product("AirMax")
    );
    println!("overall_average={}", catalog.average_stars());

    Ok(())
}
