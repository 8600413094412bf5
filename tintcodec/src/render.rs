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

//! Serializes a [`TintedString`] back into a raw ANSI byte stream.

use crate::string::TintedString;
use crate::style::Style;
use std::collections::BTreeMap;

impl TintedString {
    /// Renders the entity as a raw ANSI-styled string.
    ///
    /// See [`write_str`](TintedString::write_str) for the serialization
    /// rules. With no ranges the output is the visible text byte-for-byte.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.text.len() + 16 * self.ranges.len());
        self.write_str(&mut output)
            .expect("writing to a String cannot fail");
        output
    }

    /// Writes the styled text to a writer in a single pass.
    ///
    /// A style stack tracks the open ranges. At each offset where ranges
    /// start, they are pushed in increasing depth order and one escape
    /// sequence is emitted carrying only the newly pushed styles' codes, so
    /// the deepest style lands last and dominates. At each offset where
    /// ranges end, they are popped deepest-first and a full reset is
    /// emitted, followed — when the stack is not empty — by one sequence
    /// re-entering the remaining stack's codes bottom to top: closing a
    /// nested highlight restores the enclosing style rather than erasing it.
    ///
    /// Literal bytes between boundaries are copied unchanged; outside the
    /// injected escapes the output is byte-identical to the visible text.
    /// Plain styles and zero-width ranges emit nothing.
    pub fn write_str<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        // Boundary maps: offset -> indices of ranges opening/closing there.
        let mut starts: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut ends: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

        for (i, range) in self.ranges.iter().enumerate() {
            if range.is_empty() || range.style.is_plain() {
                continue;
            }
            starts.entry(range.span.start).or_default().push(i);
            ends.entry(range.span.end).or_default().push(i);
        }

        if starts.is_empty() {
            return writer.write_str(&self.text);
        }

        // Push shallowest-first, pop deepest-first. Depths at one offset are
        // always distinct: same-span ranges differ by construction, and
        // overlapping ranges sharing a boundary are strictly nested.
        for opening in starts.values_mut() {
            opening.sort_by_key(|&i| self.ranges[i].depth);
        }
        for closing in ends.values_mut() {
            closing.sort_by_key(|&i| std::cmp::Reverse(self.ranges[i].depth));
        }

        let boundaries: std::collections::BTreeSet<usize> =
            starts.keys().chain(ends.keys()).copied().collect();

        let mut stack: Vec<usize> = Vec::new();
        let mut pos = 0;

        for &offset in &boundaries {
            writer.write_str(&self.text[pos..offset])?;
            pos = offset;

            if let Some(closing) = ends.get(&offset) {
                for &i in closing {
                    debug_assert_eq!(stack.last(), Some(&i), "ranges must close innermost-first");
                    stack.pop();
                }
                Style::write_reset(writer)?;
                if !stack.is_empty() {
                    let mut codes = Vec::new();
                    for &i in &stack {
                        codes.extend(self.ranges[i].style.codes());
                    }
                    write!(writer, "\x1b[{}m", codes.join(";"))?;
                }
            }

            if let Some(opening) = starts.get(&offset) {
                let mut codes = Vec::new();
                for &i in opening {
                    codes.extend(self.ranges[i].style.codes());
                    stack.push(i);
                }
                write!(writer, "\x1b[{}m", codes.join(";"))?;
            }
        }

        writer.write_str(&self.text[pos..])
    }
}

impl std::fmt::Display for TintedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn style(name: &str) -> Style {
        crate::catalog::ColorCatalog::new()
            .lookup(name)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_render_unstyled_is_identity() {
        let tinted = TintedString::plain("no styling here");
        assert_eq!(tinted.render(), "no styling here");
    }

    #[test]
    fn test_render_single_range() {
        let pattern = Regex::new("ERROR").unwrap();
        let tinted = TintedString::plain("ERROR: failed")
            .highlight(&pattern, &[vec![style("red")]])
            .unwrap();

        assert_eq!(tinted.render(), "\x1b[31mERROR\x1b[0m: failed");
    }

    #[test]
    fn test_render_nested_ranges_restore_outer_style() {
        // Inner blue closes before the outer red does; the reset after "ll"
        // must re-enter red, not fall back to plain text
        let pattern = Regex::new("(h.(ll)o)").unwrap();
        let tinted = TintedString::plain("hello world")
            .highlight(&pattern, &[vec![style("red")], vec![style("blue")]])
            .unwrap();

        assert_eq!(
            tinted.render(),
            "\x1b[31mhe\x1b[34mll\x1b[0m\x1b[31mo\x1b[0m world"
        );
    }

    #[test]
    fn test_render_nested_ranges_closing_together() {
        let pattern = Regex::new("(h.(ll))").unwrap();
        let tinted = TintedString::plain("hello world")
            .highlight(&pattern, &[vec![style("red")], vec![style("blue")]])
            .unwrap();

        assert_eq!(tinted.render(), "\x1b[31mhe\x1b[34mll\x1b[0mo world");
    }

    #[test]
    fn test_render_layered_styles_share_one_sequence() {
        let pattern = Regex::new("WARN").unwrap();
        let tinted = TintedString::plain("WARN!")
            .highlight(&pattern, &[vec![style("black"), style("bg_yellow")]])
            .unwrap();

        // Both layers open at offset 0 and are emitted together,
        // shallowest first
        assert_eq!(tinted.render(), "\x1b[30;43mWARN\x1b[0m!");
    }

    #[test]
    fn test_render_disjoint_matches() {
        let pattern = Regex::new(r"\d+").unwrap();
        let tinted = TintedString::plain("a 1 b 2")
            .highlight(&pattern, &[vec![style("green")]])
            .unwrap();

        assert_eq!(
            tinted.render(),
            "a \x1b[32m1\x1b[0m b \x1b[32m2\x1b[0m"
        );
    }

    #[test]
    fn test_render_range_to_end_of_text() {
        let pattern = Regex::new("tail$").unwrap();
        let tinted = TintedString::plain("head tail")
            .highlight(&pattern, &[vec![style("cyan")]])
            .unwrap();

        assert_eq!(tinted.render(), "head \x1b[36mtail\x1b[0m");
    }

    #[test]
    fn test_render_unicode_text_unchanged() {
        let pattern = Regex::new("世界").unwrap();
        let tinted = TintedString::plain("你好 世界 !")
            .highlight(&pattern, &[vec![style("purple")]])
            .unwrap();

        assert_eq!(tinted.render(), "你好 \x1b[35m世界\x1b[0m !");
    }

    #[test]
    fn test_display_matches_render() {
        let pattern = Regex::new("x").unwrap();
        let tinted = TintedString::plain("x marks")
            .highlight(&pattern, &[vec![style("yellow")]])
            .unwrap();

        assert_eq!(format!("{}", tinted), tinted.render());
    }

    #[test]
    fn test_render_adjacent_ranges() {
        let pattern = Regex::new("(ab)(cd)").unwrap();
        let tinted = TintedString::plain("abcd")
            .highlight(&pattern, &[vec![style("red")], vec![style("blue")]])
            .unwrap();

        assert_eq!(
            tinted.render(),
            "\x1b[31mab\x1b[0m\x1b[34mcd\x1b[0m"
        );
    }
}
