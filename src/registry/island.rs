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

//! The canonical gazetteer: every island this crate knows how to name,
//! the external feature ids whose coastlines compose it, and the aliases
//! by which observers have referred to it.

/// A single entry in the archipelago gazetteer.
#[derive(Clone, Copy, Debug)]
pub struct IslandEntry {
    /// Canonical lowercase ASCII name.
    pub name: &'static str,
    /// External geometry feature ids, in the order their fragments must be
    /// chained to form a closed coastline. Order matters for islands whose
    /// coastline is assembled from several way fragments.
    pub feature_ids: &'static [u64],
    /// Lowercase ASCII aliases, including historical and anglicized names.
    pub aliases: &'static [&'static str],
}

/// The 30-island Galápagos gazetteer.
///
/// Gardner carries a documented ambiguity: there are two islands named
/// Gardner in the archipelago, one near Floreana and one near Española,
/// with no generally-used way to tell them apart by name alone. This
/// registry places the feature ids for Gardner de Floreana here; the
/// prioritizer compensates for name-based mentions of Gardner de Española
/// (see [`crate::prioritizer`]).
pub const ISLANDS: &[IslandEntry] = &[
    IslandEntry { name: "baltra", feature_ids: &[2129829], aliases: &["south seymour", "s seymour"] },
    IslandEntry { name: "bartolome", feature_ids: &[13299590], aliases: &["bartholomew"] },
    IslandEntry { name: "beagle", feature_ids: &[13402845, 13402844], aliases: &[] },
    IslandEntry { name: "caldwell", feature_ids: &[5113389], aliases: &[] },
    IslandEntry { name: "champion", feature_ids: &[34201438], aliases: &["campeon", "campion"] },
    IslandEntry { name: "cowley", feature_ids: &[5113851], aliases: &[] },
    IslandEntry {
        name: "crossman",
        feature_ids: &[5113483, 5113475, 146294607, 5113481, 6171480, 5113476],
        aliases: &["cuatro hermanos"],
    },
    IslandEntry { name: "daphne", feature_ids: &[5113815, 5113846], aliases: &[] },
    IslandEntry {
        name: "darwin",
        feature_ids: &[551730596, 551727784, 551727777, 551727780, 551727776],
        aliases: &["culpepper"],
    },
    IslandEntry { name: "eden", feature_ids: &[5113629], aliases: &["el eden"] },
    IslandEntry { name: "enderby", feature_ids: &[34201518], aliases: &[] },
    IslandEntry {
        name: "espanola",
        // Order matters: this coastline is assembled from fragments that
        // must be chained in sequence.
        feature_ids: &[
            992208855, 34159403, 992137192, 992137189, 992137188, 992208859, 992208854, 992208856,
            34159728,
        ],
        aliases: &["hood"],
    },
    IslandEntry { name: "fernandina", feature_ids: &[2130001], aliases: &["narborough"] },
    IslandEntry { name: "floreana", feature_ids: &[2566632], aliases: &["charles", "santa maria"] },
    // See the module doc comment for the Gardner de Floreana / Gardner de
    // Española ambiguity.
    IslandEntry { name: "gardner", feature_ids: &[5113388], aliases: &[] },
    IslandEntry { name: "genovesa", feature_ids: &[5114780], aliases: &["tower"] },
    IslandEntry { name: "guy fawkes", feature_ids: &[5113651, 5113654], aliases: &[] },
    IslandEntry { name: "isabela", feature_ids: &[2129921], aliases: &["albemarle", "ablemarle"] },
    IslandEntry { name: "marchena", feature_ids: &[13399789], aliases: &["bindloe"] },
    IslandEntry { name: "onslow", feature_ids: &[34201564], aliases: &[] },
    IslandEntry { name: "pinta", feature_ids: &[4538042], aliases: &["abingdon"] },
    IslandEntry { name: "pinzon", feature_ids: &[303268103], aliases: &["duncan"] },
    IslandEntry { name: "plaza", feature_ids: &[5113617, 5113616], aliases: &[] },
    IslandEntry { name: "rabida", feature_ids: &[13299861], aliases: &["jervis"] },
    IslandEntry { name: "san cristobal", feature_ids: &[2128941], aliases: &["chatham"] },
    IslandEntry {
        name: "santa cruz",
        feature_ids: &[2129845],
        aliases: &["indefatigable", "indefagitable", "puerto ayora"],
    },
    IslandEntry { name: "santa fe", feature_ids: &[4538087], aliases: &["barrington"] },
    IslandEntry {
        name: "santiago",
        feature_ids: &[2129890],
        aliases: &["san salvador", "james", "sombrero chino"],
    },
    IslandEntry { name: "seymour", feature_ids: &[5113849], aliases: &[] },
    IslandEntry { name: "sin nombre", feature_ids: &[5113576], aliases: &["nameless"] },
    IslandEntry { name: "tortuga", feature_ids: &[5194328], aliases: &["brattle"] },
    IslandEntry { name: "watson", feature_ids: &[5113383], aliases: &[] },
    IslandEntry {
        name: "wolf",
        feature_ids: &[551724900, 551724984, 551724959, 551724964, 551724955],
        aliases: &["wenman"],
    },
];

/// Returns `true` if `name` is a canonical island name in the gazetteer.
pub fn is_canonical(name: &str) -> bool {
    ISLANDS.iter().any(|island| island.name == name)
}
