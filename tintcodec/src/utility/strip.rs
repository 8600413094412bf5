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

use crate::span::SpannedText;
use std::borrow::Cow;

/// Removes ANSI escape sequences from a string.
///
/// This function strips Control Sequence Introducer (CSI) sequences —
/// colors, text styling, cursor movement — and keeps everything else.
/// Recognition is shared with the scanner ([`SpannedText::scan`]), so a
/// truncated or malformed introducer survives as literal text rather than
/// being swallowed, and stripping never fails on untrusted input.
///
/// # Performance
///
/// The function performs a quick check for the presence of the escape
/// character before processing. If no ANSI codes are found, it returns a
/// borrowed reference to the original string (zero-copy). Otherwise, it
/// allocates a new `String` with the sequences removed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use pipetint_tintcodec::strip_ansi_codes;
///
/// // String with ANSI color codes
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_ansi_codes(colored), "Red Text");
///
/// // String without ANSI codes (zero-copy)
/// let result = strip_ansi_codes("Plain Text");
/// assert!(matches!(result, Cow::Borrowed(_)));
///
/// // Idempotent
/// let once = strip_ansi_codes(colored).into_owned();
/// assert_eq!(strip_ansi_codes(&once), once);
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    // Check if the string contains any ANSI escape sequences
    if !str.contains('\x1b') {
        // No ANSI codes, return borrowed string
        return Cow::Borrowed(str);
    }

    Cow::Owned(SpannedText::scan(str).stripped())
}
