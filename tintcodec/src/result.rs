//
// Copyright 2024-2026 the pipetint authors. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the tintcodec crate.
//!
//! Structural errors (invalid range geometry) are kept distinct from
//! user-input errors (unrecognized style names): the former indicate a
//! modeling bug, the latter bad arguments at the boundary.

use std::ops::Range;
use thiserror::Error;

/// Result type alias for operations that may fail with a [`TintError`].
pub type TintResult<T> = std::result::Result<T, TintError>;

/// Errors that can occur when building or transforming colorized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TintError {
    /// Style name not present in the color catalog.
    #[error("unknown style name '{name}'")]
    UnknownStyle {
        /// The name that failed to resolve
        name: String,
    },

    /// A new range partially overlaps an existing one.
    ///
    /// Two ranges must be disjoint or one must fully contain the other.
    /// Recoverable by splitting the existing range at the incoming range's
    /// boundaries and retrying.
    #[error("range {incoming:?} partially overlaps existing range {existing:?}")]
    PartialOverlap {
        /// Span of the range already present
        existing: Range<usize>,
        /// Span of the range being inserted
        incoming: Range<usize>,
    },

    /// Range extends beyond the end of the visible text.
    #[error("range {span:?} out of bounds (text length {max})")]
    RangeOutOfBounds {
        /// The offending span
        span: Range<usize>,
        /// The maximum valid offset
        max: usize,
    },
}

impl TintError {
    /// Check if the error indicates a modeling bug rather than bad input.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TintError::PartialOverlap { .. } | TintError::RangeOutOfBounds { .. }
        )
    }
}
