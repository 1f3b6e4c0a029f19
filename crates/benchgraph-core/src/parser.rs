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

//! Reads a benchmark results table into a [`ResultSet`].
//!
//! The input dialect is Celero's CSV output: comma-separated, quote
//! character `'`, whitespace around separators insignificant. Column 0 is
//! the group name, column 1 the experiment name, and every further column
//! names a [`Measure`] in its header.
//!
//! Concatenating several reports into one file is supported: a repeated
//! header row embedded mid-file is detected and skipped (see
//! [`parse_results`]).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::{Measure, ResultSet, Value};

/// Parse a results table from any reader.
///
/// `source_name` labels the origin of the data; it becomes the `file`
/// association of every group created (used for output naming) and is not
/// interpreted further.
///
/// The first record is the header. Data columns (index 2 onward) must all
/// resolve in the measure catalog or the parse fails before any row is
/// ingested. Each data row then appends one value to every data column's
/// series within its experiment, and series alignment is re-checked after
/// every row. Any violation aborts the parse; there is no partial result.
pub fn parse_results<R: Read>(reader: R, source_name: &str) -> ParseResult<ResultSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'\'')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record?,
        // An empty file parses to an empty result set.
        None => return Ok(ResultSet::new()),
    };

    // Columns 0 and 1 are positional (group and experiment names); only the
    // data columns consult the catalog.
    let mut columns = Vec::with_capacity(header.len().saturating_sub(2));
    for (position, label) in header.iter().enumerate().skip(2) {
        let measure = Measure::from_label(label).ok_or_else(|| ParseError::UnknownColumn {
            label: label.to_string(),
            column: position,
        })?;
        columns.push(measure);
    }

    let mut results = ResultSet::new();
    for record in records {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let group_name = record.get(0).unwrap_or("");
        let experiment_name = record.get(1).unwrap_or("");

        // Concatenated reports repeat the header between tables. A row whose
        // first two cells both name known measures is such a banner, not
        // data, and must leave the hierarchy untouched.
        if Measure::is_label(group_name) && Measure::is_label(experiment_name) {
            continue;
        }

        if record.len() < header.len() {
            return Err(ParseError::ShortRow {
                line,
                expected: header.len(),
                actual: record.len(),
            });
        }

        let group = results.group_mut(group_name, source_name);
        let experiment = group.experiment_mut(experiment_name);

        for (offset, measure) in columns.iter().copied().enumerate() {
            let cell = record.get(offset + 2).unwrap_or("");
            let value = Value::parse(cell).ok_or_else(|| ParseError::InvalidNumber {
                value: cell.to_string(),
                column: measure.label().to_string(),
                line,
            })?;
            experiment.push_value(measure, value);
        }

        // Every data column's series must have grown to the same length.
        let mut lengths = columns
            .iter()
            .map(|measure| experiment.series(*measure).map_or(0, |s| s.len()));
        if let Some(first) = lengths.next() {
            if lengths.any(|len| len != first) {
                return Err(ParseError::SeriesLengthMismatch {
                    experiment: experiment_name.to_string(),
                    line,
                });
            }
        }
    }

    Ok(results)
}

/// Parse a results file from disk.
///
/// The file's name (without directories) becomes the source association of
/// every group in the returned set.
pub fn parse_file(path: &Path) -> ParseResult<ResultSet> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    parse_results(file, name)
}
