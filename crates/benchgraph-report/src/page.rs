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

//! Group report page assembly.
//!
//! One HTML document per group: the measure charts laid out in a
//! two-column grid (600×300 each), ECharts loaded from a CDN, each chart's
//! option JSON embedded inline. No server round trips, no assets beyond
//! the one script tag.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use charming::Chart;

use crate::error::{RenderError, Result};

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Escape text for embedding in HTML.
pub(crate) fn esc(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Render one group's report page from its charts.
pub fn render_group_page(group_name: &str, charts: &[Chart]) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Benchmark results for '{}'</title>\n",
        esc(group_name)
    ));
    html.push_str(&format!("<script src=\"{ECHARTS_CDN}\"></script>\n"));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 1em 2em; }\n\
         .grid { display: grid; grid-template-columns: repeat(2, 600px); gap: 1em; }\n\
         .chart { width: 600px; height: 300px; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!(
        "<h1>Benchmark results for '{}'</h1>\n<div class=\"grid\">\n",
        esc(group_name)
    ));
    for index in 0..charts.len() {
        html.push_str(&format!(
            "<div id=\"chart-{index}\" class=\"chart\"></div>\n"
        ));
    }
    html.push_str("</div>\n<script>\n");
    for (index, chart) in charts.iter().enumerate() {
        html.push_str(&format!(
            "echarts.init(document.getElementById('chart-{index}')).setOption({});\n",
            chart.to_string()
        ));
    }
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Pick the output file name for a group report.
///
/// The name is `{source stem}_{group}.html` with characters unsafe in file
/// names replaced; `used` tracks names handed out so far, and collisions
/// get a numeric suffix.
pub fn report_file_name(
    source_stem: &str,
    group_name: &str,
    used: &mut HashSet<String>,
) -> String {
    let base = format!("{}_{}", sanitize(source_stem), sanitize(group_name));
    let mut candidate = format!("{base}.html");
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}-{n}.html");
        n += 1;
    }
    candidate
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Write a rendered group page to `dir/file_name`, returning the full path.
pub fn write_group_report(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, html).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use charming::Chart;

    #[test]
    fn test_render_group_page_structure() {
        let charts = vec![Chart::new(), Chart::new()];
        let html = render_group_page("G1", &charts);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Benchmark results for 'G1'"));
        assert!(html.contains("id=\"chart-0\""));
        assert!(html.contains("id=\"chart-1\""));
        assert!(!html.contains("id=\"chart-2\""));
        assert!(html.contains("echarts.min.js"));
    }

    #[test]
    fn test_render_group_page_escapes_name() {
        let html = render_group_page("a<b>&c", &[]);
        assert!(html.contains("a&lt;b&gt;&amp;c"));
        assert!(!html.contains("<b>&c"));
    }

    #[test]
    fn test_report_file_name_basic() {
        let mut used = HashSet::new();
        assert_eq!(
            report_file_name("results", "G1", &mut used),
            "results_G1.html"
        );
    }

    #[test]
    fn test_report_file_name_sanitizes() {
        let mut used = HashSet::new();
        assert_eq!(
            report_file_name("run one", "vector<int> push", &mut used),
            "run_one_vector_int__push.html"
        );
    }

    #[test]
    fn test_report_file_name_dedupes() {
        let mut used = HashSet::new();
        assert_eq!(report_file_name("r", "G1", &mut used), "r_G1.html");
        assert_eq!(report_file_name("r", "G1", &mut used), "r_G1-2.html");
        assert_eq!(report_file_name("r", "G1", &mut used), "r_G1-3.html");
    }

    #[test]
    fn test_write_group_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_group_report(dir.path(), "r_G1.html", "<html></html>").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
