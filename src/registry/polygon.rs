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

//! Coastline assembly: chaining raw polygon/way fragments into closed
//! island boundaries, and the buffered containment test used to decide
//! whether a point lies "on" an island.

use geo::{Contains, EuclideanDistance, Polygon};

/// Margin, in degrees, within which a point is considered to be on an
/// island even if it falls just outside its mapped coastline. About one
/// mile at this latitude.
pub const BUFFER_MARGIN_DEGREES: f64 = 0.02;

/// Supplies the raw coordinate rings backing an external feature id.
///
/// A feature may be encoded as a closed polygon ring or as an open
/// coastline fragment meant to be chained with its neighbours; both are
/// handed to [`PolygonAccumulator`] unchanged.
pub trait GeometrySource {
    /// Returns the polygon rings for `feature_id`, each ring a sequence of
    /// `(latitude, longitude)` pairs, or `None` if the id is unknown.
    fn rings_for(&self, feature_id: u64) -> Option<Vec<Vec<(f64, f64)>>>;
}

/// Chains a sequence of polygon/way fragments into closed rings.
///
/// Fragments arrive one at a time. A fragment that is already closed
/// (first point equals last) is finished on its own, flushing whatever
/// chain was in progress. Otherwise it either extends the in-progress
/// chain (when its first point matches the chain's last point) or starts a
/// new chain.
#[derive(Default)]
pub struct PolygonAccumulator {
    finished: Vec<Vec<(f64, f64)>>,
    current: Vec<(f64, f64)>,
}

impl PolygonAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(&mut self, mut ring: Vec<(f64, f64)>) {
        if ring.len() <= 2 {
            return;
        }
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        } else if ring.len() <= 3 {
            return;
        }
        self.finished.push(ring);
    }

    fn finish_current(&mut self) {
        let current = std::mem::take(&mut self.current);
        self.finish(current);
    }

    /// Feeds one more fragment into the accumulator.
    pub fn add(&mut self, ring: Vec<(f64, f64)>) {
        if ring.len() <= 1 {
            return;
        }
        if ring.first() == ring.last() {
            self.finish_current();
            self.finish(ring);
            return;
        }
        if !self.current.is_empty() {
            if ring.first() == self.current.last() {
                self.current.extend(ring);
                if self.current.first() == self.current.last() {
                    self.finish_current();
                }
            } else {
                self.finish_current();
                self.current = ring;
            }
        } else {
            self.current = ring;
        }
    }

    /// Flushes any in-progress chain and returns the closed rings as
    /// `geo` polygons.
    pub fn retrieve(mut self) -> Vec<Polygon<f64>> {
        self.finish_current();
        self.finished
            .into_iter()
            .map(|ring| {
                let coords: Vec<geo::Coord<f64>> = ring
                    .into_iter()
                    .map(|(lat, lon)| geo::Coord { x: lon, y: lat })
                    .collect();
                Polygon::new(geo::LineString::from(coords), vec![])
            })
            .collect()
    }
}

/// The assembled ground polygons for a single island, with buffered
/// containment.
#[derive(Clone, Debug)]
pub struct IslandPolygons {
    pub name: &'static str,
    pub ground: Vec<Polygon<f64>>,
}

impl IslandPolygons {
    pub fn contains_ground(&self, point: geo::Point<f64>) -> bool {
        self.ground.iter().any(|poly| poly.contains(&point))
    }

    /// A point is within the buffered multi-polygon if it is inside the
    /// ground polygon or within [`BUFFER_MARGIN_DEGREES`] of its boundary.
    pub fn contains_buffer(&self, point: geo::Point<f64>) -> bool {
        self.ground
            .iter()
            .any(|poly| poly.contains(&point) || point.euclidean_distance(poly) <= BUFFER_MARGIN_DEGREES)
    }

    pub fn envelope(&self) -> Option<rstar::AABB<geo::Point<f64>>> {
        use rstar::Envelope;
        self.ground.iter().map(poly_envelope).reduce(|a, b| a.merged(&b))
    }
}

fn poly_envelope(poly: &Polygon<f64>) -> rstar::AABB<geo::Point<f64>> {
    use rstar::Envelope;
    let mut bbox: Option<rstar::AABB<geo::Point<f64>>> = None;
    for coord in poly.exterior().coords() {
        let p = geo::Point::from(*coord);
        let single = rstar::AABB::from_corners(p, p);
        bbox = Some(match bbox {
            Some(b) => b.merged(&single),
            None => single,
        });
    }
    bbox.unwrap_or_else(|| rstar::AABB::from_point(geo::Point::new(0.0, 0.0)))
}

/// Builds each island's ground polygons from a [`GeometrySource`],
/// following the feature-id chaining order declared in the gazetteer and
/// logging a warning for any feature id the source does not recognise.
pub fn assemble(
    entries: &[crate::registry::island::IslandEntry],
    source: &dyn GeometrySource,
) -> Vec<IslandPolygons> {
    let mut built = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut accumulator = PolygonAccumulator::new();
        for &feature_id in entry.feature_ids {
            match source.rings_for(feature_id) {
                Some(rings) => {
                    for ring in rings {
                        accumulator.add(ring);
                    }
                }
                None => {
                    log::warn!(
                        "missing geometry for feature {feature_id}; {} assignments may be inaccurate",
                        entry.name
                    );
                }
            }
        }
        let ground = accumulator.retrieve();
        log::info!(
            "built {} polygons from {} feature ids for {}",
            ground.len(),
            entry.feature_ids.len(),
            entry.name
        );
        built.push(IslandPolygons { name: entry.name, ground });
    }
    built
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_closes_single_ring() {
        let mut acc = PolygonAccumulator::new();
        acc.add(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let polys = acc.retrieve();
        assert_eq!(polys.len(), 1);
    }

    #[test]
    fn accumulator_chains_two_fragments() {
        let mut acc = PolygonAccumulator::new();
        acc.add(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        acc.add(vec![(1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let polys = acc.retrieve();
        assert_eq!(polys.len(), 1);
    }

    #[test]
    fn accumulator_drops_degenerate_fragments() {
        let mut acc = PolygonAccumulator::new();
        acc.add(vec![(0.0, 0.0), (0.0, 1.0)]);
        let polys = acc.retrieve();
        assert!(polys.is_empty());
    }

    struct FakeSource;
    impl GeometrySource for FakeSource {
        fn rings_for(&self, feature_id: u64) -> Option<Vec<Vec<(f64, f64)>>> {
            if feature_id == 1 {
                Some(vec![vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]])
            } else {
                None
            }
        }
    }

    #[test]
    fn contains_ground_point() {
        let entries = [crate::registry::island::IslandEntry {
            name: "test",
            feature_ids: &[1],
            aliases: &[],
        }];
        let built = assemble(&entries, &FakeSource);
        let island = &built[0];
        assert!(island.contains_ground(geo::Point::new(0.5, 0.5)));
        assert!(!island.contains_ground(geo::Point::new(5.0, 5.0)));
        assert!(island.contains_buffer(geo::Point::new(-0.01, 0.5)));
    }

    #[test]
    fn buffer_margin_reaches_just_past_the_boundary() {
        let island = IslandPolygons {
            name: "test",
            ground: vec![crate::polygon![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]],
        };
        let just_outside = crate::point!(-0.01, 0.5);
        let far_outside = crate::point!(-1.0, 0.5);
        assert!(island.contains_buffer(just_outside));
        assert!(!island.contains_buffer(far_outside));
    }
}
