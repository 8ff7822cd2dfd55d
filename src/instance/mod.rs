//! Instance generation.
//!
//! Produces the city-coordinate sets the search operates on: unique 2D
//! points on an integer grid, seeded for reproducibility. Feed the
//! result to [`CostMatrix::from_coordinates`](crate::matrix::CostMatrix::from_coordinates)
//! to obtain a searchable matrix.

mod generator;

pub use generator::generate_cities;
