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

//! Summary index page linking every generated report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::page::esc;

/// One generated report, as listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Name of the source results file.
    pub source: String,
    /// Benchmark group name.
    pub group: String,
    /// Report file name, relative to the index page.
    pub report: String,
}

/// Render the index page listing `entries` in processing order.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut html = String::with_capacity(4 * 1024);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Benchmark reports</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 1em 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\n\
         </style>\n</head>\n<body>\n<h1>Benchmark reports</h1>\n",
    );

    if entries.is_empty() {
        html.push_str("<p>No reports were generated.</p>\n");
    } else {
        html.push_str(
            "<table>\n<thead>\n<tr><th>Source file</th><th>Group</th><th>Report</th></tr>\n\
             </thead>\n<tbody>\n",
        );
        for entry in entries {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td><a href=\"{}\">{}</a></td></tr>\n",
                esc(&entry.source),
                esc(&entry.group),
                esc(&entry.report),
                esc(&entry.report),
            ));
        }
        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Write `index.html` into `dir`, returning the full path.
pub fn write_index(entries: &[IndexEntry], dir: &Path) -> Result<PathBuf> {
    let path = dir.join("index.html");
    fs::write(&path, render_index(entries)).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, group: &str, report: &str) -> IndexEntry {
        IndexEntry {
            source: source.to_string(),
            group: group.to_string(),
            report: report.to_string(),
        }
    }

    #[test]
    fn test_render_index_lists_entries_in_order() {
        let entries = vec![
            entry("a.csv", "G1", "a_G1.html"),
            entry("b.csv", "G2", "b_G2.html"),
        ];
        let html = render_index(&entries);
        let first = html.find("a_G1.html").unwrap();
        let second = html.find("b_G2.html").unwrap();
        assert!(first < second);
        assert!(html.contains("a.csv"));
        assert!(html.contains("G2"));
    }

    #[test]
    fn test_render_index_empty() {
        let html = render_index(&[]);
        assert!(html.contains("No reports were generated."));
    }

    #[test]
    fn test_render_index_escapes() {
        let html = render_index(&[entry("a&b.csv", "x<y", "r.html")]);
        assert!(html.contains("a&amp;b.csv"));
        assert!(html.contains("x&lt;y"));
    }

    #[test]
    fn test_write_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_index(&[entry("a.csv", "G1", "a_G1.html")], dir.path()).unwrap();
        assert!(path.ends_with("index.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("a_G1.html"));
    }
}
