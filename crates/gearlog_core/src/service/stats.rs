//! Pure aggregation helpers for catalog statistics.

/// Returns the arithmetic mean of the given star scores.
///
/// An empty iterator yields 0.0, keeping average queries total for callers
/// that have no ratings yet.
pub fn mean_stars(stars: impl IntoIterator<Item = u8>) -> f64 {
    let mut total = 0u32;
    let mut count = 0u32;
    for value in stars {
        total += u32::from(value);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    f64::from(total) / f64::from(count)
}

/// Groups `(name, average)` pairs into score tiers.
///
/// Tiers come back sorted by descending average; names inside one tier are
/// sorted alphabetically. Averages produced by the same sum/count arithmetic
/// compare bit-identical, so exact equality is the grouping key.
pub fn group_by_average(mut averages: Vec<(String, f64)>) -> Vec<(f64, Vec<String>)> {
    averages.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut tiers: Vec<(f64, Vec<String>)> = Vec::new();
    for (name, average) in averages {
        match tiers.last_mut() {
            Some((tier_average, names)) if *tier_average == average => names.push(name),
            _ => tiers.push((average, vec![name])),
        }
    }
    tiers
}
