// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 the galapagos-resolver contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolves an observation to an island from its coordinates: parse
//! whatever latitude/longitude representation the row carries, then test
//! it against each island's buffered ground polygon.

use dashmap::DashMap;

use crate::error::Error;
use crate::grammar;
use crate::registry::{Registry, BUFFER_MARGIN_DEGREES};
use crate::resolvers::{Confidence, Resolution, Resolver};
use crate::row::Row;

const NAME: &str = "coordinate";

/// The reference archipelago's bounding box: (min latitude, min
/// longitude), (max latitude, max longitude). Coordinates outside this
/// box are treated as an explicit exclusion rather than an unknown.
pub const DEFAULT_MIN: (f64, f64) = (-1.70, -92.30);
pub const DEFAULT_MAX: (f64, f64) = (1.90, -89.00);

const MEMO_PRECISION: i32 = 3;

pub struct CoordinateResolver<'r> {
    registry: &'r Registry,
    min: (f64, f64),
    max: (f64, f64),
    cache: DashMap<(i64, i64), Vec<Resolution>>,
}

impl<'r> CoordinateResolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_bounds(registry, DEFAULT_MIN, DEFAULT_MAX)
    }

    pub fn with_bounds(registry: &'r Registry, min: (f64, f64), max: (f64, f64)) -> Self {
        Self { registry, min, max, cache: DashMap::new() }
    }

    fn find_coordinates(&self, row: &Row) -> Option<(f64, f64)> {
        if row.has("decimalLatitude") && row.has("decimalLongitude") {
            if let (Ok(lat), Ok(lon)) =
                (row.get("decimalLatitude").parse::<f64>(), row.get("decimalLongitude").parse::<f64>())
            {
                return Some((lat, lon));
            }
        }
        if row.has("verbatimLatitude") && row.has("verbatimLongitude") {
            if let (Ok(lat), Ok(lon)) = (
                grammar::parse_human_lat(row.get("verbatimLatitude")),
                grammar::parse_human_lon(row.get("verbatimLongitude")),
            ) {
                return Some((lat, lon));
            }
            // Labels sometimes swap the two columns; retry with lat/lon
            // reversed before giving up.
            if let (Ok(lat), Ok(lon)) = (
                grammar::parse_human_lat(row.get("verbatimLongitude")),
                grammar::parse_human_lon(row.get("verbatimLatitude")),
            ) {
                return Some((lat, lon));
            }
        }
        if row.has("verbatimCoordinates") {
            if let Ok(pair) = grammar::parse_human_latlon(row.get("verbatimCoordinates")) {
                return Some(pair);
            }
        }
        None
    }

    fn query(&self, lat: f64, lon: f64) -> Vec<Resolution> {
        let point = geo::Point::new(lon, lat);
        let mut candidates = Vec::new();
        for island in self.registry.candidates_near(point, BUFFER_MARGIN_DEGREES) {
            if island.contains_ground(point) {
                return vec![Resolution::new(Some(island.name), Confidence::High, NAME)];
            }
            if island.contains_buffer(point) {
                candidates.push(island.name);
            }
        }
        if candidates.is_empty() {
            return vec![Resolution::new(None, Confidence::High, NAME)];
        }
        candidates
            .into_iter()
            .map(|name| Resolution::new(Some(name), Confidence::Moderate, NAME))
            .collect()
    }

    fn memo_key(&self, lat: f64, lon: f64) -> (i64, i64) {
        let scale = 10f64.powi(MEMO_PRECISION);
        ((lat * scale).round() as i64, (lon * scale).round() as i64)
    }
}

impl Resolver for CoordinateResolver<'_> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(&self, row: &Row) -> Result<Vec<Resolution>, Error> {
        let Some((lat, lon)) = self.find_coordinates(row) else {
            return Ok(Vec::new());
        };
        if lat < self.min.0 || lon < self.min.1 || lat > self.max.0 || lon > self.max.1 {
            return Ok(vec![Resolution::new(None, Confidence::High, NAME)]);
        }
        let key = self.memo_key(lat, lon);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }
        let scale = 10f64.powi(MEMO_PRECISION);
        let rounded_lat = (lat * scale).round() / scale;
        let rounded_lon = (lon * scale).round() / scale;
        let result = self.query(rounded_lat, rounded_lon);
        self.cache.insert(key, result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::GeometrySource;

    struct SquareIsland;
    impl GeometrySource for SquareIsland {
        fn rings_for(&self, feature_id: u64) -> Option<Vec<Vec<(f64, f64)>>> {
            if feature_id == 1 {
                Some(vec![vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]])
            } else {
                None
            }
        }
    }

    static ENTRIES: &[crate::registry::IslandEntry] =
        &[crate::registry::IslandEntry { name: "square", feature_ids: &[1], aliases: &[] }];

    #[test]
    fn ground_hit_is_high_confidence_singleton() {
        let registry = Registry::build_from(ENTRIES, &SquareIsland);
        let resolver = CoordinateResolver::with_bounds(&registry, (-10.0, -10.0), (10.0, 10.0));
        let mut row = Row::new();
        row.set("decimalLatitude", "0.5");
        row.set("decimalLongitude", "0.5");
        let result = resolver.resolve(&row).unwrap();
        assert_eq!(result, vec![Resolution::new(Some("square"), Confidence::High, NAME)]);
    }

    #[test]
    fn out_of_bounding_box_is_explicit_exclusion() {
        let registry = Registry::build_from(ENTRIES, &SquareIsland);
        let resolver = CoordinateResolver::with_bounds(&registry, (-1.0, -1.0), (1.0, 1.0));
        let mut row = Row::new();
        row.set("decimalLatitude", "5.0");
        row.set("decimalLongitude", "5.0");
        let result = resolver.resolve(&row).unwrap();
        assert_eq!(result, vec![Resolution::new(None, Confidence::High, NAME)]);
    }

    #[test]
    fn missing_coordinates_yields_no_candidates() {
        let registry = Registry::build_from(ENTRIES, &SquareIsland);
        let resolver = CoordinateResolver::new(&registry);
        let row = Row::new();
        assert!(resolver.resolve(&row).unwrap().is_empty());
    }
}
