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

//! Property-based tests for the result parser using proptest.
//!
//! The key invariants exercised here:
//! - Repeated header banners never alter parser output, wherever they land.
//! - Every series within one experiment always has equal length.
//! - Numeric cells keep their integer/float distinction.

use benchgraph_core::{parse_results, Measure, Value};
use proptest::prelude::*;

const HEADER: &str = "Group,Experiment,Problem space,Baseline,Mean (us)";

/// Generate a group name. Kept disjoint from measure labels so rows are
/// never mistaken for header banners.
fn group_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("g[a-z0-9]{0,11}").expect("Failed to create group name regex")
}

/// Generate an experiment name, same alphabet as groups.
fn experiment_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("e[a-z0-9]{0,11}").expect("Failed to create experiment regex")
}

/// Generate one experiment's data rows across a fixed problem space.
fn experiment_rows() -> impl Strategy<Value = Vec<(i64, f64, f64)>> {
    prop::collection::vec(
        (
            1i64..1_000_000,
            (0.01f64..100.0).prop_map(|f| (f * 100.0).round() / 100.0),
            (0.01f64..100.0).prop_map(|f| (f * 100.0).round() / 100.0),
        ),
        1..8,
    )
}

fn render_rows(group: &str, experiment: &str, rows: &[(i64, f64, f64)]) -> Vec<String> {
    rows.iter()
        .map(|(size, baseline, mean)| format!("{group},{experiment},{size},{baseline},{mean}"))
        .collect()
}

proptest! {
    /// Interleaving repeated header rows at arbitrary positions yields
    /// output identical to the file with those rows removed.
    #[test]
    fn prop_header_repeats_are_transparent(
        group in group_name(),
        experiment in experiment_name(),
        rows in experiment_rows(),
        positions in prop::collection::vec(0usize..16, 0..4),
    ) {
        let data_lines = render_rows(&group, &experiment, &rows);

        let clean = format!("{HEADER}\n{}\n", data_lines.join("\n"));

        let mut padded = data_lines.clone();
        for position in positions {
            padded.insert(position.min(padded.len()), HEADER.to_string());
        }
        let noisy = format!("{HEADER}\n{}\n", padded.join("\n"));

        let expected = parse_results(clean.as_bytes(), "r.csv").unwrap();
        let actual = parse_results(noisy.as_bytes(), "r.csv").unwrap();
        prop_assert_eq!(expected, actual);
    }

    /// Every series within one experiment has the same length after a
    /// successful parse, regardless of how rows are distributed.
    #[test]
    fn prop_series_lengths_are_equal(
        group in group_name(),
        experiments in prop::collection::vec((experiment_name(), experiment_rows()), 1..4),
    ) {
        let mut lines = vec![HEADER.to_string()];
        for (experiment, rows) in &experiments {
            lines.extend(render_rows(&group, experiment, rows));
        }
        let input = format!("{}\n", lines.join("\n"));

        let results = parse_results(input.as_bytes(), "r.csv").unwrap();
        for group in results.groups.values() {
            for experiment in group.experiments.values() {
                let mut lengths = experiment.iter().map(|(_, series)| series.len());
                if let Some(first) = lengths.next() {
                    prop_assert!(lengths.all(|len| len == first));
                }
            }
        }
    }

    /// Problem-space cells parse as integers, timing cells as floats.
    #[test]
    fn prop_numeric_cells_keep_their_kind(
        group in group_name(),
        experiment in experiment_name(),
        rows in experiment_rows(),
    ) {
        let input = format!(
            "{HEADER}\n{}\n",
            render_rows(&group, &experiment, &rows).join("\n")
        );
        let results = parse_results(input.as_bytes(), "r.csv").unwrap();
        let parsed = results.get(&group).unwrap().experiment(&experiment).unwrap();

        for value in parsed.series(Measure::ProblemSpace).unwrap().values() {
            prop_assert!(matches!(value, Value::Int(_)));
        }
    }
}
