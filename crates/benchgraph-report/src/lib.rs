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

//! HTML bar-chart reports for parsed benchmark results.
//!
//! Presentation plumbing over [`charming`]: an [`AggregatedSeries`] becomes
//! a grouped bar chart ([`measure_chart`]), a group's charts become one
//! self-contained HTML page ([`render_group_page`]), and all generated
//! pages are linked from an index ([`write_index`]).
//!
//! [`AggregatedSeries`]: benchgraph_core::AggregatedSeries

mod chart;
mod error;
mod index;
mod page;

pub use chart::measure_chart;
pub use error::{RenderError, Result};
pub use index::{render_index, write_index, IndexEntry};
pub use page::{render_group_page, report_file_name, write_group_report};
