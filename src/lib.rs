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

//! Assigns Darwin Core biodiversity observations to Galápagos islands
//! from coordinate and locality evidence.

pub mod macros;

pub mod config;
pub mod error;
pub mod grammar;
pub mod io;
pub mod pipeline;
pub mod prioritizer;
pub mod registry;
pub mod resolvers;
pub mod row;

pub use error::Error;
pub use registry::Registry;
pub use row::Row;
