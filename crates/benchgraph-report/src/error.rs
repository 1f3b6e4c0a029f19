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

//! Error types for report writing.

use thiserror::Error;

/// An error produced while writing report files.
///
/// Rendering itself is infallible (charts serialize to embedded JSON);
/// only the filesystem can fail, and failures propagate to the caller
/// without retries.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An output file could not be written.
    #[error("I/O error writing '{path}': {source}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for `Result` with [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
