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

//! The parsed result hierarchy.
//!
//! A [`ResultSet`] exclusively owns [`Group`]s, which exclusively own
//! [`Experiment`]s, which exclusively own [`Series`] — a strict ownership
//! tree with no shared or back references. The hierarchy is built once
//! during parsing and never mutated afterward.
//!
//! Maps are insertion-ordered ([`IndexMap`]) because group and experiment
//! order affects report ordering: reports come out in the order the input
//! file introduced them.

use crate::{Measure, Value};
use indexmap::IndexMap;

/// An ordered sequence of values for one measure within one experiment,
/// one entry per recorded trial.
///
/// Every series of the same experiment has equal length, and index `i`
/// refers to the same trial across all of them. The parser enforces this
/// after every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series(Vec<Value>);

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for the next trial.
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no trials have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded values, in trial order.
    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Series {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// One named benchmarked subject, accumulated across repeated rows
/// (one row per trial/problem-size point).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Experiment {
    series: IndexMap<Measure, Series>,
}

impl Experiment {
    /// Create an empty experiment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The series recorded for `measure`, if any.
    pub fn series(&self, measure: Measure) -> Option<&Series> {
        self.series.get(&measure)
    }

    /// Append a value to the series for `measure`, creating it on first use.
    pub fn push_value(&mut self, measure: Measure, value: Value) {
        self.series.entry(measure).or_default().push(value);
    }

    /// Insert a complete series for `measure`, replacing any existing one.
    pub fn insert_series(&mut self, measure: Measure, series: Series) {
        self.series.insert(measure, series);
    }

    /// Iterate over (measure, series) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, &Series)> {
        self.series.iter().map(|(m, s)| (*m, s))
    }

    /// The measures recorded for this experiment, in insertion order.
    pub fn measures(&self) -> impl Iterator<Item = Measure> + '_ {
        self.series.keys().copied()
    }

    /// Number of trials recorded, taken from the problem-space series.
    pub fn trial_count(&self) -> usize {
        self.series(Measure::ProblemSpace).map_or(0, Series::len)
    }
}

/// A named collection of experiments sharing an origin file.
///
/// Experiments within a group are compared on one chart: same problem-space
/// axis, one bar series per experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Name of the source file the group was first seen in, kept for output
    /// naming. First occurrence wins; later rows never overwrite it.
    pub file: String,
    /// Experiments keyed by name, in order of first appearance.
    pub experiments: IndexMap<String, Experiment>,
}

impl Group {
    /// Create an empty group associated with `file`.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            experiments: IndexMap::new(),
        }
    }

    /// The experiment named `name`, if present.
    pub fn experiment(&self, name: &str) -> Option<&Experiment> {
        self.experiments.get(name)
    }

    /// The experiment named `name`, created empty if absent.
    pub fn experiment_mut(&mut self, name: &str) -> &mut Experiment {
        self.experiments.entry(name.to_string()).or_default()
    }
}

/// Everything parsed from one input file: groups keyed by name, in order of
/// first appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    /// Groups keyed by name.
    pub groups: IndexMap<String, Group>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The group named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// The group named `name`, created with `file` as its source association
    /// if absent. An existing group keeps its original file.
    pub fn group_mut(&mut self, name: &str, file: &str) -> &mut Group {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| Group::new(file))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_push_and_len() {
        let mut series = Series::new();
        assert!(series.is_empty());
        series.push(Value::Int(10));
        series.push(Value::Float(1.5));
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), &[Value::Int(10), Value::Float(1.5)]);
    }

    #[test]
    fn test_experiment_push_value_creates_series() {
        let mut experiment = Experiment::new();
        experiment.push_value(Measure::Baseline, Value::Float(1.0));
        experiment.push_value(Measure::Baseline, Value::Float(2.0));
        assert_eq!(experiment.series(Measure::Baseline).unwrap().len(), 2);
        assert!(experiment.series(Measure::MeanTime).is_none());
    }

    #[test]
    fn test_experiment_trial_count_follows_problem_space() {
        let mut experiment = Experiment::new();
        assert_eq!(experiment.trial_count(), 0);
        experiment.push_value(Measure::ProblemSpace, Value::Int(10));
        experiment.push_value(Measure::ProblemSpace, Value::Int(20));
        assert_eq!(experiment.trial_count(), 2);
    }

    #[test]
    fn test_experiment_iter_preserves_insertion_order() {
        let mut experiment = Experiment::new();
        experiment.push_value(Measure::ProblemSpace, Value::Int(10));
        experiment.push_value(Measure::Baseline, Value::Float(1.0));
        experiment.push_value(Measure::MeanTime, Value::Float(5.5));
        let order: Vec<Measure> = experiment.measures().collect();
        assert_eq!(
            order,
            vec![Measure::ProblemSpace, Measure::Baseline, Measure::MeanTime]
        );
    }

    #[test]
    fn test_group_experiment_mut_reuses_entry() {
        let mut group = Group::new("results.csv");
        group
            .experiment_mut("ExpA")
            .push_value(Measure::Baseline, Value::Float(1.0));
        group
            .experiment_mut("ExpA")
            .push_value(Measure::Baseline, Value::Float(2.0));
        assert_eq!(group.experiments.len(), 1);
        assert_eq!(
            group.experiment("ExpA").unwrap().series(Measure::Baseline).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_result_set_first_occurrence_wins_for_file() {
        let mut results = ResultSet::new();
        results.group_mut("G1", "first.csv");
        results.group_mut("G1", "second.csv");
        assert_eq!(results.len(), 1);
        assert_eq!(results.get("G1").unwrap().file, "first.csv");
    }

    #[test]
    fn test_result_set_preserves_group_order() {
        let mut results = ResultSet::new();
        results.group_mut("Zeta", "r.csv");
        results.group_mut("Alpha", "r.csv");
        let order: Vec<&String> = results.groups.keys().collect();
        assert_eq!(order, vec!["Zeta", "Alpha"]);
    }
}
