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

//! Name-resolution fixtures: for each row, the set of islands returned
//! at confidence moderate-or-above must equal the expected set exactly.

use std::collections::HashSet;

use galapagos_resolver::resolvers::name::NameResolver;
use galapagos_resolver::resolvers::{Confidence, Resolver};
use galapagos_resolver::Row;

fn row(locality: &str, verbatim_locality: &str, island: &str) -> Row {
    let mut r = Row::new();
    r.set("locality", locality);
    r.set("verbatimLocality", verbatim_locality);
    r.set("island", island);
    r
}

fn resolve_at_or_above_moderate(r: &Row) -> HashSet<&'static str> {
    NameResolver::new()
        .resolve(r)
        .unwrap()
        .into_iter()
        .filter(|res| res.confidence >= Confidence::Moderate)
        .filter_map(|res| res.location)
        .collect()
}

#[test]
fn alias_resolves_to_canonical_baltra() {
    let r = row("", "", "south seymour");
    assert_eq!(resolve_at_or_above_moderate(&r), ["baltra"].into_iter().collect());
}

#[test]
fn north_seymour_does_not_collide_with_the_baltra_alias() {
    let r = row("", "", "north seymour");
    assert_eq!(resolve_at_or_above_moderate(&r), ["seymour"].into_iter().collect());
}

#[test]
fn multi_island_phrase_in_locality_shifts_both_scores_equally() {
    let r = row("santa cruz island, baltra island", "", "");
    assert_eq!(resolve_at_or_above_moderate(&r), ["santa cruz", "baltra"].into_iter().collect());
}

#[test]
fn island_column_wins_over_a_locality_mention() {
    let r = row("off indefatigable", "", "isla baltra");
    assert_eq!(resolve_at_or_above_moderate(&r), ["baltra"].into_iter().collect());
}

#[test]
fn suspicious_preposition_context_is_outscored_by_a_clean_mention() {
    let r = row("", "gardner isl., (near charles) galapagos arch.", "");
    assert_eq!(resolve_at_or_above_moderate(&r), ["gardner"].into_iter().collect());
}

#[test]
fn darwin_research_station_resolves_to_santa_cruz_not_darwin() {
    let r = row("darwin research station", "", "");
    assert_eq!(resolve_at_or_above_moderate(&r), ["santa cruz"].into_iter().collect());
}
