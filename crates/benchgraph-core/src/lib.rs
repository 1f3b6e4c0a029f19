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

//! Core parser and data model for Celero benchmark result tables.
//!
//! This crate turns Celero's CSV output into a validated
//! group → experiment → measure → series hierarchy and reshapes it into the
//! flat series a grouped bar chart needs:
//!
//! - [`Measure`]: the closed catalog of result-table columns, looked up by
//!   display label, case-insensitively.
//! - [`parse_results`] / [`parse_file`]: row-by-row ingestion with shape
//!   validation. Malformed input fails the whole parse; there is no partial
//!   result.
//! - [`aggregate`]: projection of one group and one measure onto a shared
//!   problem-space axis ([`AggregatedSeries`]).
//!
//! # Examples
//!
//! ```
//! use benchgraph_core::{aggregate, parse_results, Measure};
//!
//! let csv = "\
//! Group,Experiment,Problem space,Baseline
//! G1,ExpA,10,1.0
//! G1,ExpA,20,1.0
//! G1,ExpB,10,2.0
//! G1,ExpB,20,2.0
//! ";
//! let results = parse_results(csv.as_bytes(), "results.csv").unwrap();
//! let group = results.get("G1").unwrap();
//! let series = aggregate(group, Measure::Baseline).unwrap();
//! assert_eq!(series.labels, vec!["ExpA", "ExpB"]);
//! assert_eq!(series.sizes.len(), 2);
//! ```

mod aggregate;
mod error;
mod measure;
mod model;
mod parser;
mod value;

pub use aggregate::{aggregate, AggregatedSeries, REPORT_MEASURES};
pub use error::{AggregateError, ParseError, ParseResult};
pub use measure::Measure;
pub use model::{Experiment, Group, ResultSet, Series};
pub use parser::{parse_file, parse_results};
pub use value::Value;
