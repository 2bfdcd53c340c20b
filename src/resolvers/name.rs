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

//! Resolves an observation to an island from its locality prose: the
//! text is tokenized, scanned for island names and aliases within edit
//! distance 1, and each occurrence scored by the words around it.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::error::Error;
use crate::registry::ISLANDS;
use crate::resolvers::{Confidence, Resolution, Resolver};
use crate::row::Row;

const NAME: &str = "name";
const NAME_COLUMNS: &[&str] = &["island", "locality", "verbatimLocality"];
const ISLAND_WORDS: &[&str] = &["island", "islet", "isla", "isl", "is", "id", "i", "roca"];
const SUSPICIOUS_PREPOSITIONS: &[&str] = &["off", "also", "by", "near", "toward", "to"];
const PLACE_MODIFIERS: &[&str] = &[
    "bay", "punta", "point", "bahia", "playa", "beach", "volcano", "volcan", "barrio", "cerro",
    "canal", "harbor",
];

/// Case-folds, NFKD-decomposes, and strips non-ASCII bytes, matching how
/// locality text is normalized before tokenization.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().nfkd().filter(char::is_ascii).collect()
}

fn split_words(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect()
}

fn split_phrases(s: &str) -> Vec<String> {
    s.split(|c: char| matches!(c, ',' | '.' | ';' | '(' | ')' | '[' | ']' | '|'))
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// A relevance-score table mapping canonical island names to an integer
/// score, supporting the bulk operations the resolver needs: keeping the
/// higher of two scores for the same island, merging another table in,
/// shifting every score by a constant, and discarding everything but the
/// maxima.
#[derive(Default, Clone)]
struct ScoreMap {
    scores: HashMap<&'static str, i32>,
}

impl ScoreMap {
    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.scores.len()
    }

    fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn add(&mut self, name: &'static str, score: i32) {
        match self.scores.get_mut(name) {
            Some(existing) if score > *existing => *existing = score,
            Some(_) => {}
            None => {
                self.scores.insert(name, score);
            }
        }
    }

    fn merge(&mut self, other: &ScoreMap) {
        for (&name, &score) in &other.scores {
            self.add(name, score);
        }
    }

    fn incall(&mut self, amount: i32) {
        for v in self.scores.values_mut() {
            *v += amount;
        }
    }

    fn decall(&mut self, amount: i32) {
        self.incall(-amount);
    }

    fn keep_best(&mut self) {
        let Some(&hi) = self.scores.values().max() else { return };
        self.scores.retain(|_, &mut v| v >= hi);
    }

    fn resolutions(&self, resolver: &'static str) -> Vec<Resolution> {
        self.scores
            .iter()
            .map(|(&name, &score)| {
                let confidence = if score > 7 {
                    Confidence::High
                } else if score < 3 {
                    Confidence::Low
                } else {
                    Confidence::Moderate
                };
                Resolution::new(Some(name), confidence, resolver)
            })
            .collect()
    }
}

/// Scores one occurrence, or returns `None` if the word immediately
/// bordering the match (after trimming an island-denoting word) is
/// itself a place modifier, which rejects the occurrence outright.
fn score_occurrence(prefix: &[String], suffix: &[String]) -> Option<i32> {
    let prefix: &[String] = match prefix.last() {
        Some(w) if ISLAND_WORDS.contains(&w.as_str()) => &prefix[..prefix.len() - 1],
        _ => prefix,
    };
    if prefix.last().is_some_and(|w| PLACE_MODIFIERS.contains(&w.as_str())) {
        return None;
    }
    let suffix: &[String] = match suffix.first() {
        Some(w) if ISLAND_WORDS.contains(&w.as_str()) => &suffix[1..],
        _ => suffix,
    };
    if suffix.first().is_some_and(|w| PLACE_MODIFIERS.contains(&w.as_str())) {
        return None;
    }
    if prefix.is_empty() && suffix.is_empty() {
        return Some(8);
    }
    for word in prefix {
        if SUSPICIOUS_PREPOSITIONS.contains(&word.as_str()) {
            return Some(2);
        }
    }
    if !suffix.is_empty() {
        return Some(4);
    }
    Some(6)
}

/// Resolves observation locality text to an island.
pub struct NameResolver {
    /// Canonical names and aliases, split into words, longest first so
    /// the longest possible name always wins at a given position.
    name_parts: Vec<(Vec<String>, &'static str)>,
}

impl NameResolver {
    pub fn new() -> Self {
        let mut name_parts = Vec::new();
        for island in ISLANDS {
            name_parts.push((island.name.split(' ').map(str::to_string).collect::<Vec<_>>(), island.name));
            for alias in island.aliases {
                name_parts.push((alias.split(' ').map(str::to_string).collect::<Vec<_>>(), island.name));
            }
        }
        name_parts.sort_by_key(|(words, _)| std::cmp::Reverse(words.len()));
        Self { name_parts }
    }

    /// Finds every island name or alias occurring in `words`, returning
    /// one `(island, prefix words, suffix words, edit distance)` tuple
    /// per occurrence. A window equal to a place-modifier word (e.g.
    /// "bay") is never matched, even if some entry is within edit
    /// distance 1 of it.
    fn parse_phrase(&self, words: &[&str]) -> Vec<(&'static str, Vec<String>, Vec<String>, usize)> {
        let mut occurrences: Vec<(&'static str, Vec<String>, Vec<String>, usize)> = Vec::new();
        let mut interstitial: Vec<String> = Vec::new();
        let mut i = 0;
        while i < words.len() {
            let mut matched = false;
            for (parts, canonical) in &self.name_parts {
                let len = parts.len();
                if i + len > words.len() {
                    continue;
                }
                let candidate = words[i..i + len].join(" ");
                if len == 1 && PLACE_MODIFIERS.contains(&candidate.as_str()) {
                    continue;
                }
                let target = parts.join(" ");
                let distance = strsim::levenshtein(&candidate, &target);
                if distance <= 1 {
                    if let Some(last) = occurrences.last_mut() {
                        last.2.extend(interstitial.clone());
                    }
                    occurrences.push((*canonical, interstitial.clone(), Vec::new(), distance));
                    interstitial.clear();
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                interstitial.push(words[i].to_string());
                i += 1;
            }
        }
        if occurrences.is_empty() {
            return Vec::new();
        }
        occurrences.last_mut().unwrap().2.extend(interstitial);
        occurrences
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for NameResolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn resolve(&self, row: &Row) -> Result<Vec<Resolution>, Error> {
        for &col in NAME_COLUMNS {
            if !row.has(col) {
                continue;
            }
            let mut col_results = ScoreMap::new();
            for phrase in split_phrases(&normalize(row.get(col))) {
                let words = split_words(&phrase);
                if words.is_empty() {
                    continue;
                }
                let mut phrase_results = ScoreMap::new();
                for (mut island, prefix, suffix, distance) in self.parse_phrase(&words) {
                    // The Darwin Research Station sits on Santa Cruz, not on
                    // Darwin island, despite the name collision.
                    let mut bonus = 0;
                    if island == "darwin" && suffix.iter().any(|w| w == "station") {
                        island = "santa cruz";
                        bonus = 2;
                    }
                    if let Some(score) = score_occurrence(&prefix, &suffix) {
                        let score = score - 2 * distance as i32 + bonus;
                        if score > 0 {
                            phrase_results.add(island, score);
                        }
                    }
                }
                if phrase_results.len() > 1 {
                    phrase_results.decall(1);
                }
                col_results.merge(&phrase_results);
            }
            if col == "island" {
                col_results.incall(1);
            }
            if col_results.is_empty() {
                return Ok(Vec::new());
            }
            col_results.keep_best();
            return Ok(col_results.resolutions(NAME));
        }
        Ok(Vec::new())
    }
}
