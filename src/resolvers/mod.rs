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

//! Resolution types shared by the coordinate and name resolvers.

pub mod coordinate;
pub mod name;

use crate::error::Error;
use crate::row::Row;

/// How strongly a resolver backs a candidate island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

/// One resolver's statement about where an observation occurred.
///
/// `location: None` paired with [`Confidence::High`] means the resolver
/// actively excluded every candidate (e.g. coordinates outside the
/// archipelago); paired with [`Confidence::Low`] it means the resolver
/// simply found no evidence either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub location: Option<&'static str>,
    pub confidence: Confidence,
    pub resolver: &'static str,
}

impl Resolution {
    pub fn new(location: Option<&'static str>, confidence: Confidence, resolver: &'static str) -> Self {
        Self { location, confidence, resolver }
    }

    pub fn unknown(resolver: &'static str) -> Self {
        Self::new(None, Confidence::Low, resolver)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loc = self.location.unwrap_or("none");
        write!(f, "{loc} ({}: {:?})", self.resolver, self.confidence)
    }
}

/// A strategy for proposing candidate islands for a single observation.
pub trait Resolver {
    fn name(&self) -> &'static str;

    /// Proposes zero or more candidate resolutions for `row`. An empty
    /// result means the resolver found no evidence at all.
    fn resolve(&self, row: &Row) -> Result<Vec<Resolution>, Error>;
}
