// Dweve Benchgraph - Benchmark Report Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchgraph Command Line Interface

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Benchgraph - benchmark results to HTML reports
///
/// Reads Celero CSV result tables and renders one grouped bar-chart report
/// page per benchmark group, plus an index page linking them.
///
/// # Examples
///
/// ```bash
/// # Process every .csv file in a directory
/// benchgraph results/
///
/// # Process a single file, writing reports elsewhere
/// benchgraph results/sort.csv --output-dir reports/
///
/// # Additionally dump the parsed hierarchy as JSON
/// benchgraph results/ --json
/// ```
#[derive(Parser)]
#[command(name = "benchgraph")]
#[command(author, version, about = "Benchmark results to HTML bar-chart reports", long_about = None)]
struct Cli {
    /// Directory of .csv result files, or a single .csv file
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Directory where reports and the index page are written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Also write a structural JSON dump per input file
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match benchgraph_cli::run(&cli.path, &cli.output_dir, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
