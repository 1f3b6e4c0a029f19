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

//! JSON dump back into a result set.

use crate::error::{JsonError, Result};
use benchgraph_core::{Measure, ResultSet, Value};
use serde_json::Value as JsonValue;

/// Parse a structural JSON dump (as produced by [`crate::to_json`]) back
/// into a [`ResultSet`].
///
/// The inverse exists for the round-trip guarantee: group, experiment, and
/// measure names survive unchanged, and integer values come back as
/// integers. Measure labels are resolved through the catalog, so a dump
/// with an unrecognized label is rejected.
pub fn from_json(json: &str) -> Result<ResultSet> {
    let root: JsonValue = serde_json::from_str(json)?;
    let groups = as_object(&root, "$")?;

    let mut results = ResultSet::new();
    for (group_name, entry) in groups {
        let path = format!("$.{group_name}");
        let entry = as_object(entry, &path)?;

        let file = entry
            .get("file")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| JsonError::Shape {
                path: path.clone(),
                message: "missing string field 'file'".to_string(),
            })?;
        let experiments_value = entry.get("experiments").ok_or_else(|| JsonError::Shape {
            path: path.clone(),
            message: "missing field 'experiments'".to_string(),
        })?;
        let experiments = as_object(experiments_value, &format!("{path}.experiments"))?;

        let group = results.group_mut(group_name, file);
        for (experiment_name, measures_value) in experiments {
            let experiment_path = format!("{path}.experiments.{experiment_name}");
            let measures = as_object(measures_value, &experiment_path)?;
            let experiment = group.experiment_mut(experiment_name);

            for (label, series_value) in measures {
                let series_path = format!("{experiment_path}.{label}");
                let measure =
                    Measure::from_label(label).ok_or_else(|| JsonError::Shape {
                        path: series_path.clone(),
                        message: format!("unknown measure label '{label}'"),
                    })?;
                let entries =
                    series_value
                        .as_array()
                        .ok_or_else(|| JsonError::Shape {
                            path: series_path.clone(),
                            message: "expected array of numbers".to_string(),
                        })?;
                for (index, entry) in entries.iter().enumerate() {
                    let value = json_to_value(entry, &format!("{series_path}[{index}]"))?;
                    experiment.push_value(measure, value);
                }
            }
        }
    }

    Ok(results)
}

fn as_object<'a>(
    value: &'a JsonValue,
    path: &str,
) -> Result<&'a serde_json::Map<String, JsonValue>> {
    value.as_object().ok_or_else(|| JsonError::Shape {
        path: path.to_string(),
        message: "expected object".to_string(),
    })
}

fn json_to_value(value: &JsonValue, path: &str) -> Result<Value> {
    let number = match value {
        JsonValue::Number(number) => number,
        other => {
            return Err(JsonError::NonNumeric {
                path: path.to_string(),
                value: other.to_string(),
            })
        }
    };
    if let Some(n) = number.as_i64() {
        return Ok(Value::Int(n));
    }
    number
        .as_f64()
        .map(Value::Float)
        .ok_or_else(|| JsonError::NonNumeric {
            path: path.to_string(),
            value: value.to_string(),
        })
}
