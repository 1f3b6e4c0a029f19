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

//! Grouped bar charts for aggregated measures.

use benchgraph_core::AggregatedSeries;
use charming::{
    component::{Axis, Legend, Title},
    element::{AxisType, NameLocation},
    series::Bar,
    Chart,
};

/// Build the grouped bar chart for one measure of one group.
///
/// The problem-space sizes form the category axis and each experiment
/// contributes one bar series, drawn side by side per size.
pub fn measure_chart(group_name: &str, series: &AggregatedSeries) -> Chart {
    let categories: Vec<String> = series.sizes.iter().map(|v| v.to_string()).collect();

    let mut chart = Chart::new()
        .title(Title::new().text(format!(
            "Benchmark group: {} - {}",
            group_name, series.measure
        )))
        .legend(Legend::new().data(series.labels.clone()).left("left").top("top"))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(categories)
                .name("Problem space (size of input)")
                .name_location(NameLocation::Middle)
                .name_gap(30),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(series.measure.label()),
        );

    for (label, values) in series.labels.iter().zip(&series.values) {
        let data: Vec<f64> = values.iter().map(|v| v.as_f64()).collect();
        chart = chart.series(Bar::new().name(label.as_str()).data(data));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchgraph_core::{Measure, Value};

    fn sample_series() -> AggregatedSeries {
        AggregatedSeries {
            measure: Measure::Baseline,
            sizes: vec![Value::Int(10), Value::Int(20)],
            labels: vec!["ExpA".to_string(), "ExpB".to_string()],
            values: vec![
                vec![Value::Float(1.0), Value::Float(1.0)],
                vec![Value::Float(2.0), Value::Float(2.0)],
            ],
        }
    }

    #[test]
    fn test_chart_contains_title_and_series() {
        let chart = measure_chart("G1", &sample_series());
        let option = chart.to_string();
        assert!(option.contains("Benchmark group: G1 - Baseline"));
        assert!(option.contains("ExpA"));
        assert!(option.contains("ExpB"));
    }

    #[test]
    fn test_chart_category_axis_uses_sizes() {
        let chart = measure_chart("G1", &sample_series());
        let option = chart.to_string();
        assert!(option.contains("\"10\""));
        assert!(option.contains("\"20\""));
        assert!(option.contains("Problem space (size of input)"));
    }

    #[test]
    fn test_chart_y_axis_named_after_measure() {
        let chart = measure_chart("G1", &sample_series());
        assert!(chart.to_string().contains("Baseline"));
    }
}
