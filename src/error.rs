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

use std::fmt;

#[derive(Clone, Debug)]
pub enum Error {
    /// A coordinate string did not match the grammar at all.
    Grammar(String),
    /// A coordinate parsed but carried a direction letter outside the
    /// acceptable set for the axis being parsed (e.g. `n`/`s` for a
    /// longitude).
    InvalidDirection { direction: char },
    /// A coordinate parsed with a negative magnitude alongside an explicit
    /// direction letter, which is contradictory.
    NegativeWithDirection { value: f64, direction: char },
    /// A coordinate's magnitude fell outside the bound for its axis.
    OutOfBounds { value: f64, bound: f64 },
    /// A required configuration key was absent.
    MissingConfigKey(&'static str),
    /// The configuration file could not be read.
    Config(String),
    /// The geometry source could not be parsed.
    Geometry(String),
    /// The input or output table could not be read or written.
    Table(String),
    /// A resolver named an island absent from the registry.
    UnknownIsland(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(text) => write!(f, "could not parse coordinate: {text}"),
            Self::InvalidDirection { direction } => {
                write!(f, "invalid direction {direction:?}")
            }
            Self::NegativeWithDirection { value, direction } => {
                write!(f, "negative coordinate {value} given with direction {direction:?}")
            }
            Self::OutOfBounds { value, bound } => {
                write!(f, "coordinate {value} outside of designated bound {bound}")
            }
            Self::MissingConfigKey(key) => write!(f, "missing required config key: {key}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
            Self::Table(e) => write!(f, "table error: {e}"),
            Self::UnknownIsland(name) => write!(f, "resolver returned an island not in the registry: {name}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<peg::error::ParseError<peg::str::LineCol>> for Error {
    fn from(e: peg::error::ParseError<peg::str::LineCol>) -> Self {
        Self::Grammar(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Table(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<geojson::Error> for Error {
    fn from(e: geojson::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}
