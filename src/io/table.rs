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

//! Tab-separated reading and writing of observation tables.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::pipeline::PipelineOutput;
use crate::row::Row;

/// Reads a tab-separated file with a header row into [`Row`] values.
/// Every cell is read as a string; unrecognised columns are preserved.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Row>, Error> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut columns = HashMap::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            columns.insert(header.clone(), value.to_string());
        }
        rows.push(Row::from_columns(columns));
    }
    Ok(rows)
}

/// Writes each resolver's own verdict plus the chosen resolution:
/// `gbifID`, `name`, `latlon`, `best`. `name` and `latlon` are the name
/// resolver's and coordinate resolver's own canonical island or `-` when
/// absent; `best` is the prioritizer's chosen island or `-`.
pub fn write_results(path: impl AsRef<Path>, output: &PipelineOutput) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    writer.write_record(["gbifID", "name", "latlon", "best"])?;
    for result in &output.results {
        let name = result.name.location.unwrap_or("-");
        let latlon = result.coordinate.location.unwrap_or("-");
        let best = result.chosen.location.unwrap_or("-");
        writer.write_record([result.gbif_id.as_str(), name, latlon, best])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the error report as plain text blocks: one per logged failure,
/// formatted `resolver: message for row:\n<row>\n\n`.
pub fn write_errors(path: impl AsRef<Path>, output: &PipelineOutput) -> Result<(), Error> {
    let mut file = std::fs::File::create(path).map_err(|e| Error::Table(e.to_string()))?;
    for error in &output.errors {
        write!(file, "{}: {} for row:\n{}\n\n", error.resolver, error.message, error.row)
            .map_err(|e| Error::Table(e.to_string()))?;
    }
    Ok(())
}

/// Writes a per-island observation count: `island`, `count`.
pub fn write_observations(path: impl AsRef<Path>, output: &PipelineOutput) -> Result<(), Error> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for result in &output.results {
        if let Some(island) = result.chosen.location {
            *counts.entry(island).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| a.0.cmp(b.0));

    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    writer.write_record(["island", "count"])?;
    for (island, count) in counts {
        writer.write_record([island, &count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
