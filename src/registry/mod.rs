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

//! The shared, read-only registry of islands and their assembled
//! geometry, built once at startup and consulted by both resolvers.

pub mod island;
pub mod polygon;

use std::collections::HashMap;

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

pub use island::{IslandEntry, ISLANDS};
pub use polygon::{GeometrySource, IslandPolygons, PolygonAccumulator, BUFFER_MARGIN_DEGREES};

/// A bounding-box spatial index over island ground geometry, used to
/// avoid testing every island's polygons for every query point.
struct IslandIndex {
    tree: RTree<GeomWithData<Rectangle<geo::Point<f64>>, usize>>,
}

impl IslandIndex {
    fn new(islands: &[IslandPolygons]) -> Self {
        let mut entries = Vec::new();
        for (i, island) in islands.iter().enumerate() {
            if let Some(envelope) = island.envelope() {
                entries.push(GeomWithData::new(Rectangle::from_aabb(envelope), i));
            }
        }
        Self { tree: RTree::bulk_load(entries) }
    }

    fn candidates_near(&self, point: geo::Point<f64>, margin: f64) -> impl Iterator<Item = usize> + '_ {
        let envelope = AABB::from_corners(
            geo::Point::new(point.x() - margin, point.y() - margin),
            geo::Point::new(point.x() + margin, point.y() + margin),
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
    }
}

/// The archipelago's islands, their assembled geometry, and a name index
/// (canonical names and aliases both resolve to the canonical name).
pub struct Registry {
    islands: Vec<IslandPolygons>,
    index: IslandIndex,
    name_lookup: HashMap<&'static str, &'static str>,
}

impl Registry {
    /// Builds the registry from a geometry source, assembling each
    /// island's coastline and indexing it spatially.
    pub fn build(source: &dyn GeometrySource) -> Self {
        Self::build_from(ISLANDS, source)
    }

    /// As [`Self::build`], but with an explicit gazetteer, used in tests
    /// and to support alternative archipelagos.
    pub fn build_from(entries: &'static [IslandEntry], source: &dyn GeometrySource) -> Self {
        let islands = polygon::assemble(entries, source);
        let index = IslandIndex::new(&islands);
        let mut name_lookup = HashMap::new();
        for entry in entries {
            name_lookup.insert(entry.name, entry.name);
            for alias in entry.aliases {
                name_lookup.insert(alias, entry.name);
            }
        }
        Self { islands, index, name_lookup }
    }

    /// Islands whose bounding box lies within `margin` degrees of `point`.
    pub fn candidates_near(&self, point: geo::Point<f64>, margin: f64) -> impl Iterator<Item = &IslandPolygons> + '_ {
        self.index.candidates_near(point, margin).map(move |i| &self.islands[i])
    }

    /// All islands, for callers that need to scan the whole registry.
    pub fn islands(&self) -> impl Iterator<Item = &IslandPolygons> {
        self.islands.iter()
    }

    /// Resolves a canonical name or alias to its canonical name.
    pub fn canonicalize(&self, name: &str) -> Option<&'static str> {
        self.name_lookup.get(name).copied()
    }

    pub fn is_canonical(&self, name: &str) -> bool {
        self.islands.iter().any(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;
    impl GeometrySource for EmptySource {
        fn rings_for(&self, _feature_id: u64) -> Option<Vec<Vec<(f64, f64)>>> {
            None
        }
    }

    #[test]
    fn build_with_missing_geometry_logs_and_continues() {
        let registry = Registry::build(&EmptySource);
        assert_eq!(registry.islands().count(), ISLANDS.len());
    }

    #[test]
    fn alias_canonicalizes() {
        let registry = Registry::build(&EmptySource);
        assert_eq!(registry.canonicalize("hood"), Some("espanola"));
        assert_eq!(registry.canonicalize("not-a-place"), None);
    }
}
