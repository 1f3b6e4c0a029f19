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

//! Error types for result parsing and aggregation.

use crate::Measure;
use thiserror::Error;

/// An error produced while parsing a benchmark results table.
///
/// There is no partial or recoverable parse mode: any of these aborts the
/// parse of the whole file and no [`crate::ResultSet`] is produced. A
/// structural anomaly in the input is a caller bug to be fixed upstream,
/// not a condition to work around.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be opened or read.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV decoder rejected a record.
    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    /// A header column past the group and experiment names does not name a
    /// known measure.
    #[error("unknown column '{label}' at header position {column}")]
    UnknownColumn {
        /// The unrecognized label text.
        label: String,
        /// Column index (0-based).
        column: usize,
    },

    /// A data row is narrower than the header.
    #[error("row at line {line} has {actual} columns, header has {expected}")]
    ShortRow {
        /// Line number (1-based).
        line: u64,
        /// Column count of the header.
        expected: usize,
        /// Column count of the offending row.
        actual: usize,
    },

    /// A data cell parsed as neither integer nor float.
    #[error("invalid number '{value}' in column '{column}' at line {line}")]
    InvalidNumber {
        /// The offending cell text.
        value: String,
        /// Display label of the column.
        column: String,
        /// Line number (1-based).
        line: u64,
    },

    /// Series within one experiment drifted out of alignment, indicating a
    /// truncated or misaligned row.
    #[error("series length mismatch in experiment '{experiment}' after line {line}")]
    SeriesLengthMismatch {
        /// Name of the experiment with misaligned series.
        experiment: String,
        /// Line number of the row that broke alignment (1-based).
        line: u64,
    },
}

/// Convenience alias for parse results.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// An error produced while flattening a group for charting.
///
/// These indicate a defect in the input data; the parser's per-row
/// invariants should have prevented them, so the aggregator raises rather
/// than truncating or padding.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// An experiment lacks a series for the requested measure.
    #[error("experiment '{experiment}' has no '{measure}' series")]
    MissingMeasure {
        /// Name of the incomplete experiment.
        experiment: String,
        /// The measure that was requested.
        measure: Measure,
    },

    /// An experiment's series length differs from its problem-space length.
    #[error(
        "experiment '{experiment}' has {actual} values for '{measure}', problem space has {expected}"
    )]
    LengthMismatch {
        /// Name of the misaligned experiment.
        experiment: String,
        /// The measure whose series is misaligned.
        measure: Measure,
        /// Length of the problem-space series.
        expected: usize,
        /// Length of the measure's series.
        actual: usize,
    },

    /// An experiment's problem-space sizes differ from the group's.
    #[error("experiment '{experiment}' does not share the group's problem-space sizes")]
    SizesMismatch {
        /// Name of the divergent experiment.
        experiment: String,
    },

    /// The group contains no experiments.
    #[error("group has no experiments to aggregate")]
    EmptyGroup,
}
