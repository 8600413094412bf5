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

//! Splits raw input into literal runs and escape-sequence spans.
//!
//! This is the component that lets the tool be chained safely in a pipeline:
//! regex matching only ever sees the visible projection, while the span list
//! maps every visible offset back to its position in the raw input.

use crate::consts::MAX_SEQUENCE_LENGTH;
use std::ops::Range;

/// One contiguous piece of a scanned line, as a byte range over the raw
/// input.
///
/// Concatenating the slices of all spans, in order, reproduces the raw input
/// exactly; concatenating only the `Literal` slices yields the visible text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    /// Visible text with no embedded control sequences.
    Literal {
        /// Byte range over the raw input
        range: Range<usize>,
    },
    /// A complete CSI escape sequence, introducer through final byte.
    Escape {
        /// Byte range over the raw input
        range: Range<usize>,
    },
}

impl Span {
    /// Returns the byte range this span covers in the raw input.
    pub fn range(&self) -> &Range<usize> {
        match self {
            Span::Literal { range } | Span::Escape { range } => range,
        }
    }

    /// Returns `true` if this span is an escape sequence.
    pub fn is_escape(&self) -> bool {
        matches!(self, Span::Escape { .. })
    }
}

/// The scan result: a raw line plus its span decomposition.
///
/// Produced by [`SpannedText::scan`], which never fails: a truncated or
/// malformed introducer (end of input or an invalid byte before the final
/// byte, or a sequence longer than [`MAX_SEQUENCE_LENGTH`]) is reclassified
/// as literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedText {
    raw: String,
    spans: Vec<Span>,
}

impl SpannedText {
    /// Scans a line into literal and escape spans.
    ///
    /// The scanner walks the input byte by byte. CSI sequences are
    /// ASCII-only, so byte positions inside a sequence are always character
    /// boundaries, and a literal run is only ever cut at an ESC byte, which
    /// is ASCII as well — multi-byte UTF-8 characters are never split.
    pub fn scan(input: &str) -> SpannedText {
        let bytes = input.as_bytes();
        let mut spans = Vec::new();
        let mut lit_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            // Only the CSI introducer opens an escape span; a lone ESC or an
            // ESC followed by anything else stays literal.
            if bytes[i] == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
                let mut terminated = false;
                let mut j = i + 2;

                while j < bytes.len() && j - i < MAX_SEQUENCE_LENGTH {
                    match bytes[j] {
                        // Parameter bytes (0x30-0x3F) and intermediate
                        // bytes (0x20-0x2F)
                        0x20..=0x3F => j += 1,
                        // Final byte completes the sequence
                        0x40..=0x7E => {
                            j += 1;
                            terminated = true;
                            break;
                        }
                        // Invalid byte inside the sequence
                        _ => break,
                    }
                }

                if terminated {
                    if lit_start < i {
                        spans.push(Span::Literal {
                            range: lit_start..i,
                        });
                    }
                    spans.push(Span::Escape { range: i..j });
                    lit_start = j;
                    i = j;
                } else {
                    // Truncated, overlong, or malformed: keep the ESC as
                    // literal text and move on.
                    i += 1;
                }
            } else {
                i += 1;
            }
        }

        if lit_start < bytes.len() {
            spans.push(Span::Literal {
                range: lit_start..bytes.len(),
            });
        }

        SpannedText {
            raw: input.to_string(),
            spans,
        }
    }

    /// Returns the raw input this text was scanned from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the ordered span list.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the slice of the raw input a span covers.
    pub fn slice(&self, span: &Span) -> &str {
        &self.raw[span.range().clone()]
    }

    /// Returns the visible projection: all literal slices concatenated.
    pub fn stripped(&self) -> String {
        self.spans
            .iter()
            .filter_map(|span| match span {
                Span::Literal { range } => Some(&self.raw[range.clone()]),
                Span::Escape { .. } => None,
            })
            .collect()
    }

    /// Maps a visible-text byte offset back to its raw-input byte offset.
    ///
    /// Offsets at or past the end of the visible text map to the end of the
    /// raw input.
    pub fn raw_offset(&self, visible: usize) -> usize {
        let mut seen = 0;
        for span in &self.spans {
            if let Span::Literal { range } = span {
                let len = range.end - range.start;
                if visible < seen + len {
                    return range.start + (visible - seen);
                }
                seen += len;
            }
        }
        self.raw.len()
    }

    /// Parses an escape span's SGR parameters.
    ///
    /// Returns `Some` only for plain `ESC [ p1 ; p2 … m` sequences; an empty
    /// parameter string is the implicit reset (`[0]`). Sequences with a
    /// different final byte, private markers, or sub-parameters return
    /// `None` — they carry no styling this model tracks.
    pub fn sgr_params(&self, span: &Span) -> Option<Vec<u16>> {
        let Span::Escape { range } = span else {
            return None;
        };
        let body = &self.raw[range.start + 2..range.end];
        let (params, final_byte) = body.split_at(body.len() - 1);

        if final_byte != "m" {
            return None;
        }
        if params.is_empty() {
            return Some(vec![0]);
        }

        let mut values = Vec::new();
        for piece in params.split(';') {
            if piece.is_empty() {
                values.push(0);
            } else {
                values.push(piece.parse().ok()?);
            }
        }
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(spanned: &SpannedText) -> String {
        spanned
            .spans()
            .iter()
            .map(|span| spanned.slice(span))
            .collect()
    }

    #[test]
    fn test_scan_plain_text() {
        let spanned = SpannedText::scan("Hello World");
        assert_eq!(spanned.spans().len(), 1);
        assert_eq!(spanned.stripped(), "Hello World");
        assert_eq!(reassemble(&spanned), "Hello World");
    }

    #[test]
    fn test_scan_empty() {
        let spanned = SpannedText::scan("");
        assert!(spanned.spans().is_empty());
        assert_eq!(spanned.stripped(), "");
    }

    #[test]
    fn test_scan_colored_text() {
        let spanned = SpannedText::scan("\x1b[31mRed\x1b[0m plain");
        assert_eq!(spanned.spans().len(), 4);
        assert!(spanned.spans()[0].is_escape());
        assert!(!spanned.spans()[1].is_escape());
        assert_eq!(spanned.stripped(), "Red plain");
        assert_eq!(reassemble(&spanned), "\x1b[31mRed\x1b[0m plain");
    }

    #[test]
    fn test_scan_truncated_sequence_is_literal() {
        // Input ends before the final byte arrives
        let spanned = SpannedText::scan("text \x1b[31");
        assert_eq!(spanned.spans().len(), 1);
        assert_eq!(spanned.stripped(), "text \x1b[31");
    }

    #[test]
    fn test_scan_lone_escape_is_literal() {
        let spanned = SpannedText::scan("a\x1bb");
        assert_eq!(spanned.spans().len(), 1);
        assert_eq!(spanned.stripped(), "a\x1bb");
    }

    #[test]
    fn test_scan_malformed_sequence_is_literal() {
        // ESC [ followed by a byte that can never appear in a CSI sequence
        let spanned = SpannedText::scan("a\x1b[\x07b");
        assert_eq!(spanned.stripped(), "a\x1b[\x07b");
        assert_eq!(reassemble(&spanned), "a\x1b[\x07b");
    }

    #[test]
    fn test_scan_non_sgr_csi() {
        // Cursor movement is recognized as an escape span but carries no SGR
        let spanned = SpannedText::scan("a\x1b[2Ab");
        assert_eq!(spanned.spans().len(), 3);
        assert_eq!(spanned.stripped(), "ab");
        assert_eq!(spanned.sgr_params(&spanned.spans()[1]), None);
    }

    #[test]
    fn test_scan_unicode_text() {
        let spanned = SpannedText::scan("\x1b[32m世界\x1b[0m");
        assert_eq!(spanned.stripped(), "世界");
        assert_eq!(reassemble(&spanned), "\x1b[32m世界\x1b[0m");
    }

    #[test]
    fn test_raw_offset_maps_through_escapes() {
        let spanned = SpannedText::scan("\x1b[31mRed\x1b[0m plain");
        // Visible "Red plain"; 'R' sits after the 5-byte escape
        assert_eq!(spanned.raw_offset(0), 5);
        assert_eq!(spanned.raw_offset(2), 7);
        // ' ' sits after the second escape
        assert_eq!(spanned.raw_offset(3), 12);
        // Past the end maps to the raw end
        assert_eq!(spanned.raw_offset(100), 18);
    }

    #[test]
    fn test_sgr_params_basic() {
        let spanned = SpannedText::scan("\x1b[1;31mX");
        assert_eq!(spanned.sgr_params(&spanned.spans()[0]), Some(vec![1, 31]));
    }

    #[test]
    fn test_sgr_params_empty_is_reset() {
        let spanned = SpannedText::scan("\x1b[mX");
        assert_eq!(spanned.sgr_params(&spanned.spans()[0]), Some(vec![0]));
    }

    #[test]
    fn test_sgr_params_extended_color() {
        let spanned = SpannedText::scan("\x1b[38;5;200mX");
        assert_eq!(
            spanned.sgr_params(&spanned.spans()[0]),
            Some(vec![38, 5, 200])
        );
    }

    #[test]
    fn test_sgr_params_literal_is_none() {
        let spanned = SpannedText::scan("plain");
        assert_eq!(spanned.sgr_params(&spanned.spans()[0]), None);
    }
}
