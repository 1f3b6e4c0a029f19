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

//! The closed set of columns in a Celero benchmark results table.

use std::fmt;

/// A column of a benchmark results table, identified by its display label.
///
/// The set is closed: Celero emits exactly these columns, and an input file
/// naming anything else is malformed. Label lookup is case-insensitive and
/// total; [`Measure::from_label`] returns `None` for unrecognized labels and
/// the caller decides whether that is fatal (in the parser it always is, for
/// data columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Benchmark group name (column 0).
    Group,
    /// Experiment name within a group (column 1).
    Experiment,
    /// Size of the input the trial ran against.
    ProblemSpace,
    /// Number of samples taken.
    Samples,
    /// Number of iterations per sample.
    Iterations,
    /// Non-zero when the trial failed.
    Failure,
    /// Ratio against the group's baseline experiment.
    Baseline,
    /// Microseconds per iteration.
    UsPerIteration,
    /// Iterations per second.
    IterationsPerSec,
    /// Fastest sample, in microseconds.
    MinTime,
    /// Slowest sample, in microseconds.
    MaxTime,
    /// Mean sample time, in microseconds.
    MeanTime,
    /// Sample variance.
    Variance,
    /// Sample standard deviation.
    StandardDeviation,
    /// Sample skewness.
    Skewness,
    /// Sample kurtosis.
    Kurtosis,
    /// Sample z-score.
    ZScore,
}

impl Measure {
    /// Every measure, in results-table column order.
    pub const ALL: [Measure; 17] = [
        Measure::Group,
        Measure::Experiment,
        Measure::ProblemSpace,
        Measure::Samples,
        Measure::Iterations,
        Measure::Failure,
        Measure::Baseline,
        Measure::UsPerIteration,
        Measure::IterationsPerSec,
        Measure::MinTime,
        Measure::MaxTime,
        Measure::MeanTime,
        Measure::Variance,
        Measure::StandardDeviation,
        Measure::Skewness,
        Measure::Kurtosis,
        Measure::ZScore,
    ];

    /// The canonical display label, exactly as it appears in a results header.
    pub const fn label(&self) -> &'static str {
        match self {
            Measure::Group => "Group",
            Measure::Experiment => "Experiment",
            Measure::ProblemSpace => "Problem space",
            Measure::Samples => "Samples",
            Measure::Iterations => "Iterations",
            Measure::Failure => "Failure",
            Measure::Baseline => "Baseline",
            Measure::UsPerIteration => "us/Iteration",
            Measure::IterationsPerSec => "Iterations/sec",
            Measure::MinTime => "Min (us)",
            Measure::MaxTime => "Max (us)",
            Measure::MeanTime => "Mean (us)",
            Measure::Variance => "Variance",
            Measure::StandardDeviation => "Standard Deviation",
            Measure::Skewness => "Skewness",
            Measure::Kurtosis => "Kurtosis",
            Measure::ZScore => "Z Score",
        }
    }

    /// Look up a measure by its display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Measure> {
        Measure::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(label))
    }

    /// Whether `label` names a known measure.
    pub fn is_label(label: &str) -> bool {
        Measure::from_label(label).is_some()
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact() {
        assert_eq!(Measure::from_label("Baseline"), Some(Measure::Baseline));
        assert_eq!(Measure::from_label("Mean (us)"), Some(Measure::MeanTime));
        assert_eq!(
            Measure::from_label("us/Iteration"),
            Some(Measure::UsPerIteration)
        );
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(
            Measure::from_label("problem space"),
            Some(Measure::ProblemSpace)
        );
        assert_eq!(Measure::from_label("GROUP"), Some(Measure::Group));
        assert_eq!(
            Measure::from_label("standard deviation"),
            Some(Measure::StandardDeviation)
        );
        assert_eq!(Measure::from_label("z score"), Some(Measure::ZScore));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Measure::from_label("Bogus Column"), None);
        assert_eq!(Measure::from_label(""), None);
        // No prefix or substring matching
        assert_eq!(Measure::from_label("Mean"), None);
    }

    #[test]
    fn test_is_label() {
        assert!(Measure::is_label("Iterations/sec"));
        assert!(Measure::is_label("iterations/SEC"));
        assert!(!Measure::is_label("Throughput"));
    }

    #[test]
    fn test_display_is_canonical_label() {
        assert_eq!(Measure::MeanTime.to_string(), "Mean (us)");
        assert_eq!(Measure::ProblemSpace.to_string(), "Problem space");
    }

    #[test]
    fn test_all_covers_every_label_uniquely() {
        for measure in Measure::ALL {
            assert_eq!(Measure::from_label(measure.label()), Some(measure));
        }
    }
}
