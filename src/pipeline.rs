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

//! Drives both resolvers over a table of observations, isolating
//! per-resolver failures, reconciling candidates through the
//! prioritizer, and accumulating run statistics.

use crate::error::Error;
use crate::prioritizer::{self, StatsByResolver};
use crate::registry::Registry;
use crate::resolvers::coordinate::CoordinateResolver;
use crate::resolvers::name::NameResolver;
use crate::resolvers::{Resolution, Resolver};
use crate::row::Row;

/// The chosen resolution for one observation, alongside each resolver's
/// own best verdict.
pub struct PipelineResult {
    pub gbif_id: String,
    pub coordinate: Resolution,
    pub name: Resolution,
    pub chosen: Resolution,
}

/// One row-level resolver failure, kept for the error report.
pub struct RowError {
    pub resolver: &'static str,
    pub message: String,
    pub row: Row,
}

pub struct PipelineOutput {
    pub results: Vec<PipelineResult>,
    pub stats: StatsByResolver,
    pub errors: Vec<RowError>,
}

fn run_resolver<R: Resolver>(
    resolver: &R,
    row: &Row,
    stats: &mut StatsByResolver,
    errors: &mut Vec<(&'static str, String)>,
) -> Vec<Resolution> {
    let stat = stats.entry(resolver.name()).or_default();
    stat.processed += 1;
    match resolver.resolve(row) {
        Ok(resolutions) => {
            if resolutions.is_empty() {
                stat.unknown += 1;
            } else {
                stat.identified += 1;
            }
            resolutions
        }
        Err(e) => {
            stat.errors += 1;
            errors.push((resolver.name(), e.to_string()));
            Vec::new()
        }
    }
}

/// Discards any resolution naming an island absent from the registry,
/// recording it as a row-level error rather than letting it reach the
/// prioritizer.
fn validate_resolutions(
    resolver_name: &'static str,
    registry: &Registry,
    stats: &mut StatsByResolver,
    errors: &mut Vec<(&'static str, String)>,
    resolutions: Vec<Resolution>,
) -> Vec<Resolution> {
    resolutions
        .into_iter()
        .filter(|res| match res.location {
            Some(name) if !registry.is_canonical(name) => {
                if let Some(stat) = stats.get_mut(resolver_name) {
                    stat.errors += 1;
                }
                errors.push((resolver_name, Error::UnknownIsland(name.to_string()).to_string()));
                false
            }
            _ => true,
        })
        .collect()
}

/// A resolver's own best candidate among its (already-validated) results,
/// or an explicit unknown if it proposed nothing.
fn summarize(resolver: &'static str, candidates: &[Resolution]) -> Resolution {
    candidates
        .iter()
        .cloned()
        .reduce(|best, res| if res.confidence > best.confidence { res } else { best })
        .unwrap_or_else(|| Resolution::unknown(resolver))
}

fn resolve_row(
    coordinate: &CoordinateResolver,
    name: &NameResolver,
    registry: &Registry,
    row: &Row,
) -> (Resolution, Resolution, Resolution, StatsByResolver, Vec<(&'static str, String)>) {
    let mut stats = prioritizer::new_stats();
    let mut errors = Vec::new();
    let coordinate_results = run_resolver(coordinate, row, &mut stats, &mut errors);
    let coord_candidates = validate_resolutions(
        coordinate.name(),
        registry,
        &mut stats,
        &mut errors,
        coordinate_results,
    );
    let name_results = run_resolver(name, row, &mut stats, &mut errors);
    let name_candidates = validate_resolutions(
        name.name(),
        registry,
        &mut stats,
        &mut errors,
        name_results,
    );
    let coordinate_best = summarize(coordinate.name(), &coord_candidates);
    let name_best = summarize(name.name(), &name_candidates);
    let mut all = coord_candidates;
    all.extend(name_candidates);
    let chosen = prioritizer::choose(row, &all, &mut stats);
    (coordinate_best, name_best, chosen, stats, errors)
}

fn merge_stats(into: &mut StatsByResolver, from: &StatsByResolver) {
    for (name, stat) in from {
        into.entry(name).or_default().merge(stat);
    }
}

/// Owns both resolvers and runs them over a table of rows.
pub struct Driver<'r> {
    registry: &'r Registry,
    coordinate: CoordinateResolver<'r>,
    name: NameResolver,
}

impl<'r> Driver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry, coordinate: CoordinateResolver::new(registry), name: NameResolver::new() }
    }

    pub fn with_coordinate_bounds(registry: &'r Registry, min: (f64, f64), max: (f64, f64)) -> Self {
        Self {
            registry,
            coordinate: CoordinateResolver::with_bounds(registry, min, max),
            name: NameResolver::new(),
        }
    }

    /// Runs every row sequentially, logging progress every 100 rows.
    pub fn run(&self, rows: &[Row]) -> PipelineOutput {
        let total = rows.len();
        let mut results = Vec::with_capacity(total);
        let mut stats = prioritizer::new_stats();
        let mut errors = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            if i % 100 == 0 {
                log::info!("{i}/{total}");
            }
            let (coordinate, name, chosen, row_stats, row_errors) =
                resolve_row(&self.coordinate, &self.name, self.registry, row);
            merge_stats(&mut stats, &row_stats);
            for (resolver, message) in row_errors {
                errors.push(RowError { resolver, message, row: row.clone() });
            }
            results.push(PipelineResult {
                gbif_id: row.get("gbifID").to_string(),
                coordinate,
                name,
                chosen,
            });
        }
        log::info!("{total}/{total}");
        PipelineOutput { results, stats, errors }
    }

    /// Runs rows across a thread pool; per-row work is independent aside
    /// from the shared, read-only registry and the coordinate resolver's
    /// concurrent memo cache.
    pub fn run_parallel(&self, rows: &[Row]) -> PipelineOutput {
        use rayon::prelude::*;

        let total = rows.len();
        let per_row: Vec<_> = rows
            .par_iter()
            .map(|row| resolve_row(&self.coordinate, &self.name, self.registry, row))
            .collect();

        let mut results = Vec::with_capacity(total);
        let mut stats = prioritizer::new_stats();
        let mut errors = Vec::new();
        for (i, (coordinate, name, chosen, row_stats, row_errors)) in per_row.into_iter().enumerate() {
            if i % 100 == 0 {
                log::info!("{i}/{total}");
            }
            merge_stats(&mut stats, &row_stats);
            for (resolver, message) in row_errors {
                errors.push(RowError { resolver, message, row: rows[i].clone() });
            }
            results.push(PipelineResult {
                gbif_id: rows[i].get("gbifID").to_string(),
                coordinate,
                name,
                chosen,
            });
        }
        log::info!("{total}/{total}");
        PipelineOutput { results, stats, errors }
    }
}
