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

//! Result set to JSON conversion.

use crate::error::Result;
use benchgraph_core::{ResultSet, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Convert a result set to its structural JSON form:
///
/// ```json
/// {
///   "G1": {
///     "file": "results.csv",
///     "experiments": {
///       "ExpA": { "Problem space": [10, 20], "Baseline": [1.0, 1.0] }
///     }
///   }
/// }
/// ```
///
/// Group, experiment, and measure order is preserved, and integers stay
/// integers.
pub fn to_json_value(results: &ResultSet) -> JsonValue {
    let mut root = Map::with_capacity(results.groups.len());

    for (group_name, group) in &results.groups {
        let mut experiments = Map::with_capacity(group.experiments.len());
        for (experiment_name, experiment) in &group.experiments {
            let mut measures = Map::new();
            for (measure, series) in experiment.iter() {
                let entries: Vec<JsonValue> =
                    series.values().iter().map(value_to_json).collect();
                measures.insert(measure.label().to_string(), JsonValue::Array(entries));
            }
            experiments.insert(experiment_name.clone(), JsonValue::Object(measures));
        }

        let mut entry = Map::with_capacity(2);
        entry.insert("file".to_string(), JsonValue::String(group.file.clone()));
        entry.insert("experiments".to_string(), JsonValue::Object(experiments));
        root.insert(group_name.clone(), JsonValue::Object(entry));
    }

    JsonValue::Object(root)
}

/// Serialize a result set to a pretty-printed JSON string.
pub fn to_json(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(results))?)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Int(n) => JsonValue::Number(Number::from(*n)),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
    }
}
