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

use crate::range::ColorRange;
use crate::span::{Span, SpannedText};
use crate::style::Style;

/// A string with its styling held as metadata instead of inline escapes.
///
/// Unlike a raw ANSI string, a `TintedString` stores the visible text and a
/// set of nested [`ColorRange`]s separately, which is what makes regex
/// matching immune to embedded styling and lets highlights from several
/// pipeline stages stack without corrupting each other.
///
/// # Structure
///
/// - `text` — the visible text; the only thing patterns ever match against
/// - `ranges` — nested/disjoint styled spans over `text` byte offsets
/// - `stage` — how many highlight operations produced this value; advisory
///   metadata only, never load-bearing
///
/// Every transformation ([`highlight`](TintedString::highlight),
/// [`tint`](TintedString::tint), [`remove_color`](TintedString::remove_color))
/// returns a new `TintedString`; values are immutable and freely shareable.
///
/// # Examples
///
/// ```rust
/// use pipetint_tintcodec::TintedString;
///
/// // Plain construction
/// let plain = TintedString::plain("ERROR: Connection failed");
/// assert_eq!(plain.stripped(), "ERROR: Connection failed");
/// assert!(plain.ranges().is_empty());
///
/// // Already-styled input keeps its styling as ranges
/// let styled = TintedString::parse("\x1b[31mERROR\x1b[0m: ok");
/// assert_eq!(styled.stripped(), "ERROR: ok");
/// assert_eq!(styled.ranges().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct TintedString {
    pub(crate) text: String,
    pub(crate) ranges: Vec<ColorRange>,
    pub(crate) stage: u32,
}

impl TintedString {
    /// Creates a `TintedString` from text that is known to carry no escape
    /// sequences.
    ///
    /// No scanning happens; the input becomes the visible text as-is. Use
    /// [`TintedString::parse`] for untrusted input.
    pub fn plain<S: Into<String>>(text: S) -> TintedString {
        TintedString {
            text: text.into(),
            ranges: Vec::new(),
            stage: 0,
        }
    }

    /// Creates a `TintedString` from raw input, reconstructing the styling
    /// of any escape sequences already present.
    ///
    /// The input is scanned once ([`SpannedText::scan`]); SGR sequences are
    /// replayed across the literal runs so that each maximal same-style run
    /// becomes one disjoint range, and colors applied by an earlier pipeline
    /// stage survive into this one. Non-SGR escapes carry no styling this
    /// model tracks and are dropped. Scanning never fails; malformed
    /// sequences are kept as literal text.
    pub fn parse(raw: &str) -> TintedString {
        let spanned = SpannedText::scan(raw);
        let mut text = String::with_capacity(raw.len());
        let mut ranges: Vec<ColorRange> = Vec::new();
        let mut current = Style::default();
        let mut open: Option<(usize, Style)> = None;

        for span in spanned.spans() {
            match span {
                Span::Literal { .. } => {
                    if !current.is_plain() && open.is_none() {
                        open = Some((text.len(), current.clone()));
                    }
                    text.push_str(spanned.slice(span));
                }
                Span::Escape { .. } => {
                    let Some(params) = spanned.sgr_params(span) else {
                        continue;
                    };
                    let mut next = current.clone();
                    next.apply_params(&params);
                    if next != current {
                        Self::close_run(&mut ranges, &mut open, text.len());
                        current = next;
                    }
                }
            }
        }
        Self::close_run(&mut ranges, &mut open, text.len());

        TintedString {
            text,
            ranges,
            stage: 0,
        }
    }

    /// Closes an open style run, recording it as a range if it covers text.
    fn close_run(ranges: &mut Vec<ColorRange>, open: &mut Option<(usize, Style)>, end: usize) {
        if let Some((start, style)) = open.take()
            && start < end
        {
            ranges.push(ColorRange::new(start..end, style));
        }
    }

    /// Internal constructor used by the transformation operations.
    pub(crate) fn with_parts(text: String, ranges: Vec<ColorRange>, stage: u32) -> TintedString {
        TintedString {
            text,
            ranges,
            stage,
        }
    }

    /// Returns the visible text without any styling.
    ///
    /// With an empty range set this is exactly the value
    /// [`render`](TintedString::render) produces — removal on an unstyled
    /// entity is the identity.
    pub fn stripped(&self) -> &str {
        &self.text
    }

    /// Returns the styled ranges, in insertion order.
    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    /// Returns how many highlight operations have been applied.
    ///
    /// Advisory metadata; parsed input starts back at 0 because the counter
    /// records this process's operations, not upstream ones.
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Returns the byte length of the visible text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the visible text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns a fresh entity with all styling discarded.
    ///
    /// The result carries the same visible text, an empty range set, and
    /// stage 0. Idempotent: applying it twice equals applying it once.
    pub fn remove_color(&self) -> TintedString {
        TintedString {
            text: self.text.clone(),
            ranges: Vec::new(),
            stage: 0,
        }
    }
}

impl std::str::FromStr for TintedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TintedString::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Intensity};

    #[test]
    fn test_plain_construction() {
        let tinted = TintedString::plain("Hello World");
        assert_eq!(tinted.stripped(), "Hello World");
        assert!(tinted.ranges().is_empty());
        assert_eq!(tinted.stage(), 0);
        assert_eq!(tinted.len(), 11);
    }

    #[test]
    fn test_parse_plain_text() {
        let tinted = TintedString::parse("Plain text");
        assert_eq!(tinted.stripped(), "Plain text");
        assert!(tinted.ranges().is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let tinted = TintedString::parse("");
        assert!(tinted.is_empty());
        assert!(tinted.ranges().is_empty());
    }

    #[test]
    fn test_parse_colored_run() {
        let tinted = TintedString::parse("\x1b[31mRed\x1b[0m plain");
        assert_eq!(tinted.stripped(), "Red plain");
        assert_eq!(tinted.ranges().len(), 1);
        assert_eq!(tinted.ranges()[0].span, 0..3);
        assert_eq!(tinted.ranges()[0].style.foreground, Some(Color::Red));
        assert_eq!(tinted.ranges()[0].depth, 0);
    }

    #[test]
    fn test_parse_style_carries_over_without_reset() {
        let tinted = TintedString::parse("\x1b[1mBold \x1b[31mand red");
        assert_eq!(tinted.stripped(), "Bold and red");
        assert_eq!(tinted.ranges().len(), 2);
        assert_eq!(tinted.ranges()[0].span, 0..5);
        assert_eq!(tinted.ranges()[0].style.intensity, Some(Intensity::Bold));
        assert_eq!(tinted.ranges()[1].span, 5..12);
        assert_eq!(tinted.ranges()[1].style.intensity, Some(Intensity::Bold));
        assert_eq!(tinted.ranges()[1].style.foreground, Some(Color::Red));
    }

    #[test]
    fn test_parse_redundant_escape_merges_runs() {
        // Re-asserting the same style must not split the run
        let tinted = TintedString::parse("\x1b[31mRe\x1b[31md\x1b[0m");
        assert_eq!(tinted.stripped(), "Red");
        assert_eq!(tinted.ranges().len(), 1);
        assert_eq!(tinted.ranges()[0].span, 0..3);
    }

    #[test]
    fn test_parse_ranges_are_disjoint() {
        let tinted = TintedString::parse("\x1b[31mRed\x1b[0m and \x1b[34mBlue\x1b[0m");
        assert_eq!(tinted.ranges().len(), 2);
        assert_eq!(tinted.ranges()[0].span, 0..3);
        assert_eq!(tinted.ranges()[1].span, 8..12);
    }

    #[test]
    fn test_parse_non_sgr_escape_is_dropped() {
        let tinted = TintedString::parse("a\x1b[2Kb");
        assert_eq!(tinted.stripped(), "ab");
        assert!(tinted.ranges().is_empty());
    }

    #[test]
    fn test_parse_truncated_escape_stays_literal() {
        let tinted = TintedString::parse("tail \x1b[31");
        assert_eq!(tinted.stripped(), "tail \x1b[31");
        assert!(tinted.ranges().is_empty());
    }

    #[test]
    fn test_remove_color_drops_everything() {
        let tinted = TintedString::parse("\x1b[31mRed\x1b[0m");
        let clean = tinted.remove_color();
        assert_eq!(clean.stripped(), "Red");
        assert!(clean.ranges().is_empty());
        assert_eq!(clean.stage(), 0);
    }

    #[test]
    fn test_remove_color_is_idempotent() {
        let tinted = TintedString::parse("\x1b[1;33mWARN\x1b[0m: careful");
        assert_eq!(tinted.remove_color(), tinted.remove_color().remove_color());
    }

    #[test]
    fn test_remove_color_identity_on_unstyled() {
        let tinted = TintedString::plain("nothing here");
        assert_eq!(tinted.remove_color(), tinted);
    }

    #[test]
    fn test_from_str() {
        let tinted: TintedString = "\x1b[32mok\x1b[0m".parse().unwrap();
        assert_eq!(tinted.stripped(), "ok");
        assert_eq!(tinted.ranges().len(), 1);
    }
}
