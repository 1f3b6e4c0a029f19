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

//! Batch driver: input enumeration and parse → aggregate → render → index.
//!
//! Files are processed strictly in order, one at a time; each file's
//! parsed hierarchy is dropped once its reports are written. The first
//! error anywhere aborts the whole run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use benchgraph_core::{aggregate, parse_file, Group, Measure, REPORT_MEASURES};
use benchgraph_json::to_json;
use benchgraph_report::{
    measure_chart, render_group_page, report_file_name, write_group_report, write_index,
    IndexEntry,
};
use colored::Colorize;

/// Process `path` (a directory of `.csv` files or a single `.csv` file),
/// writing reports, the index page, and optional JSON dumps to
/// `output_dir`.
///
/// # Errors
///
/// Returns `Err` if:
/// - `path` is neither a directory nor an existing `.csv` file
/// - A directory contains no `.csv` files
/// - Any input fails to parse or aggregate
/// - Any output file cannot be written
pub fn run(path: &Path, output_dir: &Path, dump_json: bool) -> Result<(), String> {
    let inputs = collect_inputs(path)?;

    fs::create_dir_all(output_dir).map_err(|e| {
        format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        )
    })?;

    let mut used_names = HashSet::new();
    let mut entries = Vec::new();
    for input in &inputs {
        process_file(input, output_dir, dump_json, &mut used_names, &mut entries)?;
    }

    let index_path = write_index(&entries, output_dir).map_err(|e| e.to_string())?;
    println!(
        "{} {}",
        "Writing index:".green().bold(),
        index_path.display()
    );
    Ok(())
}

/// Expand the input argument into an ordered list of result files.
///
/// Directories are scanned non-recursively for `*.csv`, sorted by name so
/// report and index order is reproducible. A lone file must end in `.csv`.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .map_err(|e| format!("Cannot read directory '{}': {}", path.display(), e))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(format!("No .csv files found in '{}'", path.display()));
        }
        Ok(files)
    } else if path.extension().is_some_and(|ext| ext == "csv") && path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(format!("'{}' does not exist", path.display()))
    }
}

/// Parse one results file and write its reports and optional JSON dump.
fn process_file(
    input: &Path,
    output_dir: &Path,
    dump_json: bool,
    used_names: &mut HashSet<String>,
    entries: &mut Vec<IndexEntry>,
) -> Result<(), String> {
    println!("{} {}", "Reading CSV:".cyan(), input.display());
    let results = parse_file(input).map_err(|e| format!("{}: {}", input.display(), e))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");

    if dump_json {
        let dump = to_json(&results).map_err(|e| format!("{}: {}", input.display(), e))?;
        let json_path = output_dir.join(format!("{stem}.json"));
        println!("{} {}", "Writing JSON:".cyan(), json_path.display());
        fs::write(&json_path, dump)
            .map_err(|e| format!("Failed to write '{}': {}", json_path.display(), e))?;
    }

    for (group_name, group) in &results.groups {
        let html = render_group(input, group_name, group)?;
        let file_name = report_file_name(stem, group_name, used_names);
        let report_path = write_group_report(output_dir, &file_name, &html)
            .map_err(|e| e.to_string())?;
        println!("{} {}", "Writing report:".cyan(), report_path.display());

        entries.push(IndexEntry {
            source: group.file.clone(),
            group: group_name.clone(),
            report: file_name,
        });
    }

    Ok(())
}

/// Render one group's page: one chart per report measure the group
/// actually recorded (a trimmed-down table yields fewer than six charts).
fn render_group(input: &Path, group_name: &str, group: &Group) -> Result<String, String> {
    let mut charts = Vec::with_capacity(REPORT_MEASURES.len());
    for measure in REPORT_MEASURES {
        if !group_records(group, measure) {
            continue;
        }
        let aggregated = aggregate(group, measure).map_err(|e| {
            format!("{} group '{}': {}", input.display(), group_name, e)
        })?;
        charts.push(measure_chart(group_name, &aggregated));
    }
    Ok(render_group_page(group_name, &charts))
}

fn group_records(group: &Group, measure: Measure) -> bool {
    group
        .experiments
        .values()
        .all(|experiment| experiment.series(measure).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_inputs_rejects_missing_path() {
        let err = collect_inputs(Path::new("/nonexistent")).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_collect_inputs_rejects_non_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let err = collect_inputs(&path).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_collect_inputs_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "Group,Experiment,Baseline\n").unwrap();
        assert_eq!(collect_inputs(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_collect_inputs_scans_and_sorts_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "").unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();
        fs::write(dir.path().join("skip.txt"), "").unwrap();
        let inputs = collect_inputs(dir.path()).unwrap();
        assert_eq!(inputs.len(), 2);
        assert!(inputs[0].ends_with("a.csv"));
        assert!(inputs[1].ends_with("b.csv"));
    }

    #[test]
    fn test_collect_inputs_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_inputs(dir.path()).unwrap_err();
        assert!(err.contains("No .csv files"));
    }
}
