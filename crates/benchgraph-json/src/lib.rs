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

//! Structural JSON dump of parsed benchmark results, and its inverse.
//!
//! The dump mirrors the parsed hierarchy one-to-one: group →
//! `{ "file": ..., "experiments": { experiment → { measure label →
//! [values] } } }`. It is a debugging/interchange artifact, not a report
//! format; values keep their integer/float distinction and all names and
//! orders survive a round trip.
//!
//! # Examples
//!
//! ```
//! use benchgraph_core::parse_results;
//! use benchgraph_json::{from_json, to_json};
//!
//! let csv = "Group,Experiment,Problem space,Baseline\nG1,ExpA,10,1.0\n";
//! let results = parse_results(csv.as_bytes(), "results.csv").unwrap();
//!
//! let dump = to_json(&results).unwrap();
//! let restored = from_json(&dump).unwrap();
//! assert_eq!(results, restored);
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::from_json;
pub use to_json::{to_json, to_json_value};
