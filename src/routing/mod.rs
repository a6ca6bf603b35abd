//! Tour ordering over geocoded buildings.
//!
//! The ordering heuristic is deliberately isolated behind [`TourStrategy`]
//! so a better tour algorithm can replace it without touching callers.

use crate::models::{Building, Coordinates};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates.
///
/// Standard Haversine formula over the mean Earth radius.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Strategy for ordering a set of buildings into a visiting sequence.
///
/// Implementations must return a permutation of the input: no building is
/// dropped or duplicated.
pub trait TourStrategy: Send + Sync {
    /// Order `buildings` into a visiting path, optionally anchored at a
    /// start point.
    fn order(&self, buildings: &[Building], start: Option<Coordinates>) -> Vec<Building>;
}

/// Greedy nearest-neighbor tour construction.
///
/// No optimality guarantee is made: from each position the closest
/// unvisited building wins, ties broken by input order. Buildings without
/// coordinates are excluded from the heuristic and appended afterwards in
/// their original relative order. With two or fewer geocoded buildings the
/// heuristic is not meaningful and the input order is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl TourStrategy for NearestNeighbor {
    fn order(&self, buildings: &[Building], start: Option<Coordinates>) -> Vec<Building> {
        let geocoded: Vec<usize> = buildings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.coords.is_some())
            .map(|(i, _)| i)
            .collect();

        if geocoded.len() <= 2 {
            return buildings.to_vec();
        }

        let coords_of = |i: usize| -> Coordinates {
            // Indices in `geocoded` were filtered on coords.is_some().
            buildings[i].coords.unwrap_or(Coordinates { lat: 0.0, lng: 0.0 })
        };

        let mut remaining = geocoded;
        let mut path: Vec<usize> = Vec::with_capacity(remaining.len());

        // Seed: nearest to the start point when given, else the first
        // geocoded building in input order.
        let seed_pos = match start {
            Some(origin) => nearest_position(&remaining, |i| haversine_km(origin, coords_of(i))),
            None => 0,
        };
        let mut current = remaining.remove(seed_pos);
        path.push(current);

        while !remaining.is_empty() {
            let here = coords_of(current);
            let next_pos = nearest_position(&remaining, |i| haversine_km(here, coords_of(i)));
            current = remaining.remove(next_pos);
            path.push(current);
        }

        let mut ordered: Vec<Building> = path.into_iter().map(|i| buildings[i].clone()).collect();
        ordered.extend(
            buildings
                .iter()
                .filter(|b| b.coords.is_none())
                .cloned(),
        );
        ordered
    }
}

/// Position of the minimal-distance candidate; the first minimum
/// encountered wins.
fn nearest_position<F>(candidates: &[usize], mut distance: F) -> usize
where
    F: FnMut(usize) -> f64,
{
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (pos, &candidate) in candidates.iter().enumerate() {
        let d = distance(candidate);
        if d < best_distance {
            best = pos;
            best_distance = d;
        }
    }
    best
}
