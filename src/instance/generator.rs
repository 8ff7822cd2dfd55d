//! Random city placement.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Samples `count` distinct cities uniformly from the integer grid
/// spanned by the inclusive ranges `x_range` and `y_range`.
///
/// Points are returned in generation order, so a fixed seed yields a
/// fixed instance. Fails when a range is inverted or the grid holds
/// fewer than `count` cells.
///
/// # Examples
///
/// ```
/// use u_toursearch::instance::generate_cities;
///
/// let cities = generate_cities(5, (-100, 100), (-100, 100), 42).unwrap();
/// assert_eq!(cities.len(), 5);
/// ```
pub fn generate_cities(
    count: usize,
    x_range: (i64, i64),
    y_range: (i64, i64),
    seed: u64,
) -> Result<Vec<(f64, f64)>> {
    if count == 0 {
        return Err(Error::invalid_input("city count must be positive"));
    }
    if x_range.0 > x_range.1 || y_range.0 > y_range.1 {
        return Err(Error::invalid_input(format!(
            "inverted coordinate range: x {x_range:?}, y {y_range:?}"
        )));
    }
    let cells = (x_range.1.abs_diff(x_range.0) as u128 + 1)
        * (y_range.1.abs_diff(y_range.0) as u128 + 1);
    if cells < count as u128 {
        return Err(Error::invalid_input(format!(
            "grid holds {cells} cells, cannot place {count} distinct cities"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut taken = HashSet::with_capacity(count);
    let mut cities = Vec::with_capacity(count);
    while cities.len() < count {
        let point = (
            rng.random_range(x_range.0..=x_range.1),
            rng.random_range(y_range.0..=y_range.1),
        );
        if taken.insert(point) {
            cities.push((point.0 as f64, point.1 as f64));
        }
    }
    Ok(cities)
}
