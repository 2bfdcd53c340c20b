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

use std::process::ExitCode;

use galapagos_resolver::io::{geometry::GeoJsonSource, table};
use galapagos_resolver::pipeline::Driver;
use galapagos_resolver::{config::Config, Registry};

fn run() -> Result<(), galapagos_resolver::Error> {
    let config_path = std::env::args().nth(1).ok_or_else(|| {
        galapagos_resolver::Error::Config("usage: resolve <config-file>".to_string())
    })?;
    let config = Config::load(&config_path)?;

    log::info!("loading geometry from {}", config.input_geometry.display());
    let source = GeoJsonSource::load(&config.input_geometry)?;
    let registry = Registry::build(&source);

    log::info!("reading observations from {}", config.input_table.display());
    let rows = table::read_rows(&config.input_table)?;

    let driver = Driver::new(&registry);
    let output = driver.run_parallel(&rows);

    for (name, stats) in &output.stats {
        stats.log_summary(name);
    }

    table::write_results(&config.output_results, &output)?;
    table::write_errors(&config.output_errors, &output)?;
    table::write_observations(&config.output_observations, &output)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("galapagos-resolver: {e}");
            ExitCode::FAILURE
        }
    }
}
