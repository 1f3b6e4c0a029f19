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

//! Error types for JSON dump conversion.

use thiserror::Error;

/// JSON conversion error types.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Error from the underlying JSON library.
    #[error("JSON library error: {0}")]
    JsonLib(#[from] serde_json::Error),

    /// The dump does not have the expected group/experiment/series shape.
    #[error("malformed dump at {path}: {message}")]
    Shape {
        /// JSON-pointer-like location of the problem.
        path: String,
        /// What was wrong there.
        message: String,
    },

    /// A series entry is not a number.
    #[error("non-numeric series entry at {path}: {value}")]
    NonNumeric {
        /// JSON-pointer-like location of the entry.
        path: String,
        /// The offending JSON fragment.
        value: String,
    },
}

/// Convenience type alias for `Result` with [`JsonError`].
pub type Result<T> = std::result::Result<T, JsonError>;
