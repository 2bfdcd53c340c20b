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

//! Loads the plain `key = value` run configuration: input/output table
//! paths and the geometry source path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Error;

const INPUT_TABLE: &str = "input_table";
const INPUT_GEOMETRY: &str = "input_geometry";
const INPUT_TAXONOMY: &str = "input_taxonomy";
const OUTPUT_RESULTS: &str = "output_results";
const OUTPUT_ERRORS: &str = "output_errors";
const OUTPUT_OBSERVATIONS: &str = "output_observations";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_table: PathBuf,
    pub input_geometry: PathBuf,
    /// Unused by the core pipeline; carried through for downstream
    /// taxonomic enrichment that has not been wired in yet.
    pub input_taxonomy: Option<PathBuf>,
    pub output_results: PathBuf,
    pub output_errors: PathBuf,
    pub output_observations: PathBuf,
}

fn parse(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}

fn require(values: &HashMap<String, String>, key: &'static str) -> Result<PathBuf, Error> {
    values.get(key).map(PathBuf::from).ok_or(Error::MissingConfigKey(key))
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        let values = parse(&text);
        Ok(Self {
            input_table: require(&values, INPUT_TABLE)?,
            input_geometry: require(&values, INPUT_GEOMETRY)?,
            input_taxonomy: values.get(INPUT_TAXONOMY).map(PathBuf::from),
            output_results: require(&values, OUTPUT_RESULTS)?,
            output_errors: require(&values, OUTPUT_ERRORS)?,
            output_observations: require(&values, OUTPUT_OBSERVATIONS)?,
        })
    }
}
