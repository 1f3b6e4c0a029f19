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

//! Flattening one group and one measure into chart-ready series.
//!
//! A grouped bar chart needs a categorical axis (the problem-space sizes)
//! and one flat value vector per experiment, aligned to that axis. This
//! module projects the parsed hierarchy down to exactly that shape, one
//! measure at a time.

use crate::error::AggregateError;
use crate::{Group, Measure, Value};

/// The measures charted in a group report, in page order.
pub const REPORT_MEASURES: [Measure; 6] = [
    Measure::Baseline,
    Measure::MeanTime,
    Measure::MinTime,
    Measure::MaxTime,
    Measure::UsPerIteration,
    Measure::IterationsPerSec,
];

/// One measure of one group, flattened for a grouped bar chart.
///
/// Invariants (checked by [`aggregate`], violations raise rather than
/// truncate or pad): `sizes.len() == values[i].len()` for every experiment
/// `i`, and `labels.len() == values.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSeries {
    /// The measure these values belong to.
    pub measure: Measure,
    /// The shared problem-space axis, identical across all experiments.
    pub sizes: Vec<Value>,
    /// Experiment names, in order of first appearance in the input.
    pub labels: Vec<String>,
    /// Per experiment, its values for `measure`, aligned to `sizes`.
    pub values: Vec<Vec<Value>>,
}

/// Flatten `group`'s series for `measure`.
///
/// The problem-space series is read from the first experiment and every
/// further experiment is checked against it; a group whose experiments
/// disagree on sizes cannot be drawn on one chart and is rejected.
pub fn aggregate(group: &Group, measure: Measure) -> Result<AggregatedSeries, AggregateError> {
    let mut sizes: Option<Vec<Value>> = None;
    let mut labels = Vec::with_capacity(group.experiments.len());
    let mut values = Vec::with_capacity(group.experiments.len());

    for (name, experiment) in &group.experiments {
        let space = experiment.series(Measure::ProblemSpace).ok_or_else(|| {
            AggregateError::MissingMeasure {
                experiment: name.clone(),
                measure: Measure::ProblemSpace,
            }
        })?;
        let series = experiment
            .series(measure)
            .ok_or_else(|| AggregateError::MissingMeasure {
                experiment: name.clone(),
                measure,
            })?;

        if series.len() != space.len() {
            return Err(AggregateError::LengthMismatch {
                experiment: name.clone(),
                measure,
                expected: space.len(),
                actual: series.len(),
            });
        }

        match &sizes {
            None => sizes = Some(space.values().to_vec()),
            Some(first) => {
                if first.as_slice() != space.values() {
                    return Err(AggregateError::SizesMismatch {
                        experiment: name.clone(),
                    });
                }
            }
        }

        labels.push(name.clone());
        values.push(series.values().to_vec());
    }

    let sizes = sizes.ok_or(AggregateError::EmptyGroup)?;
    Ok(AggregatedSeries {
        measure,
        sizes,
        labels,
        values,
    })
}
