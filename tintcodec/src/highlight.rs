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

//! Regex-driven highlight overlay.

use crate::range::{self, ColorRange};
use crate::result::TintResult;
use crate::string::TintedString;
use crate::style::Style;
use regex::Regex;
use tracing::trace;

impl TintedString {
    /// Overlays styles onto every match of `pattern`, one capture group at a
    /// time, layer by layer.
    ///
    /// `groups[i]` is the ordered layer list for capture group `i + 1`; a
    /// pattern with no capture groups treats the whole match as group 1.
    /// Layer 0 of every group is applied across all matches before layer 1
    /// of any group, so each later layer nests inside (and visually wins
    /// over) the earlier ones on the same span, and capture-group nesting
    /// puts inner groups above their enclosing group within a layer.
    ///
    /// Mismatched counts are never an error: groups beyond the supplied
    /// lists get no styling, supplied lists beyond the pattern's groups are
    /// ignored. A plain [`Style`] entry introduces no range at that layer
    /// and cannot mask a range already present from an earlier layer or
    /// from the input entity. Zero-width capture spans introduce nothing.
    ///
    /// Matching runs against the visible text only, with standard leftmost,
    /// non-overlapping scan semantics; an empty-match pattern therefore
    /// terminates like any other. Zero matches returns an entity with this
    /// entity's ranges unchanged.
    ///
    /// # Errors
    ///
    /// Structural insertion errors surface as [`TintError`]
    /// (partial overlaps are already resolved internally by
    /// boundary-splitting, so none are expected from well-formed entities).
    ///
    /// [`TintError`]: crate::TintError
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipetint_tintcodec::{ColorCatalog, TintedString};
    /// use regex::Regex;
    ///
    /// let catalog = ColorCatalog::new();
    /// let pattern = Regex::new(r"(h.(ll))").unwrap();
    /// let groups = vec![
    ///     vec![catalog.lookup("red").unwrap().clone()],
    ///     vec![catalog.lookup("blue").unwrap().clone()],
    /// ];
    ///
    /// let tinted = TintedString::plain("hello world")
    ///     .highlight(&pattern, &groups)
    ///     .unwrap();
    /// // "ll" renders blue inside the red "hell" span
    /// assert_eq!(tinted.ranges().len(), 2);
    /// ```
    pub fn highlight(&self, pattern: &Regex, groups: &[Vec<Style>]) -> TintResult<TintedString> {
        let mut ranges = self.ranges.clone();
        let layer_count = groups.iter().map(Vec::len).max().unwrap_or(0);

        for layer in 0..layer_count {
            for caps in pattern.captures_iter(&self.text) {
                if pattern.captures_len() == 1 {
                    // No capture groups: the whole match is group 1
                    let whole = caps.get(0).map(|m| m.range());
                    if let Some(span) = whole {
                        Self::apply_layer(&mut ranges, groups, 0, layer, span, self.text.len())?;
                    }
                } else {
                    for group in 1..pattern.captures_len() {
                        let Some(m) = caps.get(group) else {
                            // Group did not participate in this match
                            continue;
                        };
                        Self::apply_layer(
                            &mut ranges,
                            groups,
                            group - 1,
                            layer,
                            m.range(),
                            self.text.len(),
                        )?;
                    }
                }
            }
        }

        trace!(
            layers = layer_count,
            ranges = ranges.len(),
            "applied highlight"
        );

        Ok(TintedString::with_parts(
            self.text.clone(),
            ranges,
            self.stage + 1,
        ))
    }

    /// Inserts one group's layer entry over a match span, if there is one.
    fn apply_layer(
        ranges: &mut Vec<ColorRange>,
        groups: &[Vec<Style>],
        group: usize,
        layer: usize,
        span: std::ops::Range<usize>,
        max: usize,
    ) -> TintResult<()> {
        let Some(style) = groups.get(group).and_then(|layers| layers.get(layer)) else {
            return Ok(());
        };
        if style.is_plain() || span.is_empty() {
            return Ok(());
        }
        range::insert_split(ranges, ColorRange::new(span, style.clone()), max)
    }

    /// Overlays one style across the entire visible text.
    ///
    /// This is [`highlight`](TintedString::highlight) degenerate form — one
    /// range covering the whole span — used for "apply one named style to
    /// the whole text". Empty text gains no range. A plain style is a no-op
    /// beyond the stage bump.
    ///
    /// # Errors
    ///
    /// Structural insertion errors surface as [`TintError`]
    /// (none are expected from well-formed entities).
    ///
    /// [`TintError`]: crate::TintError
    pub fn tint(&self, style: &Style) -> TintResult<TintedString> {
        let mut ranges = self.ranges.clone();

        if !style.is_plain() && !self.text.is_empty() {
            range::insert_split(
                &mut ranges,
                ColorRange::new(0..self.text.len(), style.clone()),
                self.text.len(),
            )?;
        }

        Ok(TintedString::with_parts(
            self.text.clone(),
            ranges,
            self.stage + 1,
        ))
    }
}
