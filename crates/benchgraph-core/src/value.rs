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

//! Numeric cell values.

use std::fmt;

/// A single measured value.
///
/// Cells are parsed preferentially as integers (problem sizes, sample and
/// iteration counts) and fall back to floating point (timings, ratios,
/// statistics). The distinction survives the JSON dump: integers stay
/// integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl Value {
    /// Parse a cell, attempting integer first and falling back to float.
    ///
    /// Returns `None` when the cell is neither; the parser treats that as a
    /// fatal error.
    pub fn parse(cell: &str) -> Option<Value> {
        let trimmed = cell.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Value::Int(n));
        }
        trimmed.parse::<f64>().ok().map(Value::Float)
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(_) => None,
        }
    }

    /// The value as a float, widening integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
        }
    }

    /// Returns true if this value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}
