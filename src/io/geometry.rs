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

//! A [`GeometrySource`](crate::registry::GeometrySource) backed by a
//! GeoJSON feature collection, keyed by each feature's `osm_id`,
//! `osm_way_id`, or `id` property (tried in that order).

use std::collections::HashMap;
use std::path::Path;

use geojson::{GeoJson, JsonObject, Value};

use crate::error::Error;
use crate::registry::GeometrySource;

pub struct GeoJsonSource {
    rings: HashMap<u64, Vec<Vec<(f64, f64)>>>,
}

fn feature_id(properties: &Option<JsonObject>) -> Option<u64> {
    let properties = properties.as_ref()?;
    for key in ["osm_id", "osm_way_id", "id"] {
        if let Some(value) = properties.get(key) {
            if let Some(n) = value.as_u64() {
                return Some(n);
            }
            if let Some(s) = value.as_str() {
                if let Ok(n) = s.parse() {
                    return Some(n);
                }
            }
        }
    }
    None
}

/// Swaps GeoJSON's (longitude, latitude) order to (latitude, longitude).
fn ring_from(coords: &[Vec<f64>]) -> Vec<(f64, f64)> {
    coords.iter().filter_map(|c| Some((*c.get(1)?, *c.first()?))).collect()
}

fn rings_from_value(value: &Value) -> Vec<Vec<(f64, f64)>> {
    match value {
        Value::Polygon(rings) => rings.iter().map(|r| ring_from(r)).collect(),
        Value::MultiPolygon(polygons) => {
            polygons.iter().flat_map(|rings| rings.iter().map(|r| ring_from(r))).collect()
        }
        Value::LineString(coords) => vec![ring_from(coords)],
        Value::MultiLineString(lines) => lines.iter().map(|l| ring_from(l)).collect(),
        _ => Vec::new(),
    }
}

impl GeoJsonSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Geometry(e.to_string()))?;
        let geojson: GeoJson = text.parse()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(Error::Geometry("expected a GeoJSON feature collection".to_string()));
        };
        let mut rings = HashMap::new();
        for feature in collection.features {
            let Some(id) = feature_id(&feature.properties) else { continue };
            let Some(geometry) = feature.geometry else { continue };
            rings.entry(id).or_insert_with(Vec::new).extend(rings_from_value(&geometry.value));
        }
        Ok(Self { rings })
    }
}

impl GeometrySource for GeoJsonSource {
    fn rings_for(&self, feature_id: u64) -> Option<Vec<Vec<(f64, f64)>>> {
        self.rings.get(&feature_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_polygon_feature_swapping_coordinate_order() {
        let dir = std::env::temp_dir().join("galapagos-resolver-geometry-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("geometry.geojson");
        std::fs::write(
            &path,
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"osm_id":42},"geometry":{"type":"Polygon","coordinates":[[[-91.0,0.0],[-91.0,1.0],[-90.0,1.0],[-90.0,0.0],[-91.0,0.0]]]}}]}"#,
        )
        .unwrap();
        let source = GeoJsonSource::load(&path).unwrap();
        let rings = source.rings_for(42).unwrap();
        assert_eq!(rings[0][0], (0.0, -91.0));
        assert!(source.rings_for(99).is_none());
    }
}
