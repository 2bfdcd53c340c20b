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

//! Reconciles the candidates the coordinate and name resolvers propose
//! for a single observation into one chosen resolution.

use std::collections::{HashMap, HashSet};

use crate::resolvers::{Confidence, Resolution};
use crate::row::Row;

pub const COORDINATE: &str = "coordinate";
pub const NAME: &str = "name";
const RESOLVER_NAMES: &[&str] = &[COORDINATE, NAME];

/// Per-resolver counters accumulated across a pipeline run.
#[derive(Default, Clone, Debug)]
pub struct ResolverStats {
    pub processed: u64,
    pub identified: u64,
    pub unknown: u64,
    pub errors: u64,
    pub agreements: u64,
    pub soft_disagreements: u64,
    pub hard_disagreements: u64,
}

impl ResolverStats {
    pub fn merge(&mut self, other: &ResolverStats) {
        self.processed += other.processed;
        self.identified += other.identified;
        self.unknown += other.unknown;
        self.errors += other.errors;
        self.agreements += other.agreements;
        self.soft_disagreements += other.soft_disagreements;
        self.hard_disagreements += other.hard_disagreements;
    }

    pub fn log_summary(&self, name: &str) {
        log::info!(
            "{name} resolver: {} processed, {} identified, {} unknown, {} errors, {} agree, {} hard/{} soft disagree",
            self.processed,
            self.identified,
            self.unknown,
            self.errors,
            self.agreements,
            self.hard_disagreements,
            self.soft_disagreements
        );
    }
}

/// Tracks per-resolver [`ResolverStats`], keyed by resolver name.
pub type StatsByResolver = HashMap<&'static str, ResolverStats>;

pub fn new_stats() -> StatsByResolver {
    RESOLVER_NAMES.iter().map(|&n| (n, ResolverStats::default())).collect()
}

fn best_resolution(resolutions: &[Resolution]) -> Resolution {
    resolutions
        .iter()
        .cloned()
        .reduce(|best, res| if res.confidence > best.confidence { res } else { best })
        .unwrap_or_else(|| Resolution::unknown(COORDINATE))
}

fn best_by_resolver(resolutions: &[Resolution]) -> HashMap<&'static str, Resolution> {
    let mut ret: HashMap<&'static str, Resolution> = HashMap::new();
    for res in resolutions {
        match ret.get(res.resolver) {
            Some(existing) if res.confidence <= existing.confidence => {}
            _ => {
                ret.insert(res.resolver, res.clone());
            }
        }
    }
    ret
}

/// Chooses the best resolution among the candidates every resolver
/// proposed for `row`, updating `stats` as it goes.
///
/// Rules, in order: a single candidate is accepted outright; an island
/// proposed by every resolver is accepted outright; otherwise Española
/// absorbs a name-resolver mention of Gardner de Española, pre-1980
/// observations favor the name resolver over possibly-derived
/// coordinates, iNaturalist.org submissions favor the coordinate
/// resolver's GPS-quality coordinates; and failing all of that, the
/// highest-confidence candidate wins.
pub fn choose(row: &Row, resolutions: &[Resolution], stats: &mut StatsByResolver) -> Resolution {
    if resolutions.is_empty() {
        return Resolution::unknown(COORDINATE);
    }
    if resolutions.len() == 1 {
        if let Some(stat) = stats.get_mut(resolutions[0].resolver) {
            stat.agreements += 1;
        }
        return resolutions[0].clone();
    }

    let mut all_by_resolver: HashMap<&'static str, Vec<Resolution>> = HashMap::new();
    let mut island_resolvers: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
    for res in resolutions {
        all_by_resolver.entry(res.resolver).or_default().push(res.clone());
        if let Some(loc) = res.location {
            island_resolvers.entry(loc).or_default().insert(res.resolver);
        }
    }
    let by_resolver = best_by_resolver(resolutions);

    let all_resolver_names: HashSet<&'static str> = RESOLVER_NAMES.iter().copied().collect();
    let mut chosen: Option<Resolution> = None;

    let unanimous: Vec<&'static str> = island_resolvers
        .iter()
        .filter(|(_, resolvers)| **resolvers == all_resolver_names)
        .map(|(&island, _)| island)
        .collect();
    if unanimous.len() == 1 {
        let island = unanimous[0];
        let matching: Vec<Resolution> = resolutions.iter().filter(|r| r.location == Some(island)).cloned().collect();
        chosen = Some(best_resolution(&matching));
    }

    if chosen.is_none() {
        let coordinate_best = by_resolver.get(COORDINATE);
        let name_best = by_resolver.get(NAME);
        if coordinate_best.and_then(|r| r.location) == Some("espanola")
            && name_best.and_then(|r| r.location) == Some("gardner")
        {
            chosen = coordinate_best.cloned();
        } else if !row.get("year").is_empty()
            && row.get("year").parse::<i32>().map(|y| y < 1980).unwrap_or(false)
            && name_best.is_some()
        {
            chosen = name_best.cloned();
        } else if row.get("publisher") == "iNaturalist.org" && coordinate_best.is_some() {
            chosen = coordinate_best.cloned();
        }
    }

    let chosen = chosen.unwrap_or_else(|| best_resolution(resolutions));

    for &resolver in RESOLVER_NAMES {
        let Some(candidates) = all_by_resolver.get(resolver) else { continue };
        let Some(stat) = stats.get_mut(resolver) else { continue };
        if !candidates.iter().any(|r| r.location == chosen.location) {
            stat.hard_disagreements += 1;
        }
        if by_resolver.get(resolver).map(|r| r.location) != Some(chosen.location) {
            stat.soft_disagreements += 1;
        } else {
            stat.agreements += 1;
        }
    }

    chosen
}
