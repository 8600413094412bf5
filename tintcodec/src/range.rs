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

//! Nested color ranges over visible text.
//!
//! Any two ranges in a set are either disjoint or one fully contains the
//! other; partial overlap is rejected at insertion and resolved by splitting
//! the existing ranges at the incoming range's boundaries. `depth` records
//! containment rank: a range fully inside another has a strictly greater
//! depth, and the deepest range wins visually wherever ranges overlap.

use crate::result::{TintError, TintResult};
use crate::style::Style;
use std::ops::Range;

/// A styled span of visible text, half-open over byte offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRange {
    /// Byte span over the visible text, `[start, end)`
    pub span: Range<usize>,
    /// The style applied across the span
    pub style: Style,
    /// Containment rank; recomputed on every insertion
    pub depth: usize,
}

impl ColorRange {
    /// Creates a range at depth 0; insertion assigns the real depth.
    pub fn new(span: Range<usize>, style: Style) -> ColorRange {
        ColorRange {
            span,
            style,
            depth: 0,
        }
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.span.start >= self.span.end
    }
}

/// Returns `true` if `outer` fully contains `inner` (equal spans count).
fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

/// Returns `true` if the spans share no offsets.
fn disjoint(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.end <= b.start || b.end <= a.start
}

/// Returns `true` if the spans overlap without either containing the other.
fn partially_overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    !disjoint(a, b) && !contains(a, b) && !contains(b, a)
}

/// Inserts a range, preserving the disjoint-or-contained invariant.
///
/// The range set is kept in insertion order; depths are recomputed after the
/// push so that every range's depth equals the number of ranges containing
/// it. Equal spans tie-break by insertion order — the later range is the
/// child, and therefore visually dominant.
///
/// # Errors
///
/// - [`TintError::RangeOutOfBounds`] if the span extends past `max`.
/// - [`TintError::PartialOverlap`] if the span partially overlaps an
///   existing range. This is a structural condition, not bad user input;
///   callers that can tolerate it recover via [`insert_split`].
pub fn insert(ranges: &mut Vec<ColorRange>, new: ColorRange, max: usize) -> TintResult<()> {
    if new.span.end > max {
        return Err(TintError::RangeOutOfBounds {
            span: new.span,
            max,
        });
    }

    for existing in ranges.iter() {
        if partially_overlaps(&existing.span, &new.span) {
            return Err(TintError::PartialOverlap {
                existing: existing.span.clone(),
                incoming: new.span,
            });
        }
    }

    ranges.push(new);
    recompute_depths(ranges);
    Ok(())
}

/// Inserts a range, splitting existing ranges on partial overlap.
///
/// Ranges from an earlier pipeline stage carry no knowledge of this stage's
/// pattern, so partial overlap between stages is an ordinary occurrence.
/// When [`insert`] reports it, every existing range crossing one of the new
/// range's boundaries is split at that boundary (both pieces keep the style)
/// and the insertion is retried; after splitting at both boundaries no range
/// can cross either, so the retry cannot report overlap again.
///
/// # Errors
///
/// [`TintError::RangeOutOfBounds`] if the span extends past `max`.
pub fn insert_split(ranges: &mut Vec<ColorRange>, new: ColorRange, max: usize) -> TintResult<()> {
    match insert(ranges, new.clone(), max) {
        Err(TintError::PartialOverlap { .. }) => {
            split_at(ranges, new.span.start);
            split_at(ranges, new.span.end);
            insert(ranges, new, max)
        }
        result => result,
    }
}

/// Splits every range that crosses `boundary` into two pieces.
///
/// Applying this to all ranges at once keeps children of a split parent from
/// ending up partially overlapping one of the pieces.
fn split_at(ranges: &mut Vec<ColorRange>, boundary: usize) {
    let mut split = Vec::with_capacity(ranges.len() + 1);

    for range in ranges.drain(..) {
        if range.span.start < boundary && boundary < range.span.end {
            split.push(ColorRange {
                span: range.span.start..boundary,
                style: range.style.clone(),
                depth: range.depth,
            });
            split.push(ColorRange {
                span: boundary..range.span.end,
                style: range.style,
                depth: range.depth,
            });
        } else {
            split.push(range);
        }
    }

    *ranges = split;
}

/// Recomputes every range's depth as its number of containers.
///
/// A container with an identical span only counts when it was inserted
/// earlier, which is what makes repeated highlights of the same span stack
/// with the latest on top.
fn recompute_depths(ranges: &mut [ColorRange]) {
    let spans: Vec<Range<usize>> = ranges.iter().map(|range| range.span.clone()).collect();

    for (i, range) in ranges.iter_mut().enumerate() {
        range.depth = spans
            .iter()
            .enumerate()
            .filter(|(j, span)| {
                *j != i
                    && contains(span, &range.span)
                    && (**span != range.span || *j < i)
            })
            .count();
    }
}
