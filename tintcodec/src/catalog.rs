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

//! The color catalog: style names to SGR attribute sets.
//!
//! The catalog is an explicit enumerated mapping, fixed at construction and
//! read-only afterwards. Name validation happens here — the overlay engine
//! itself only ever sees resolved [`Style`] values.

use crate::result::{TintError, TintResult};
use crate::style::{Blink, Color, Intensity, Style, Underline};

/// Text-style names, as opposed to foreground or background color names.
///
/// `bright` is the historical alias for bold; `invert` and `swapcolor` both
/// map to the video-reverse attribute.
pub const TEXT_STYLE_NAMES: &[&str] = &[
    "bold",
    "bright",
    "dim",
    "underline",
    "blink",
    "invert",
    "swapcolor",
    "hidden",
    "strikethrough",
];

/// Read-only table mapping style names to [`Style`] values.
///
/// Recognized names:
///
/// - foreground colors: `black`, `red`, `green`, `yellow`, `blue`,
///   `magenta` (alias `purple`), `cyan`, `white`, and `bright_`-prefixed
///   variants;
/// - background colors: the same set with a `bg_` prefix;
/// - text styles: see [`TEXT_STYLE_NAMES`].
///
/// # Examples
///
/// ```rust
/// use pipetint_tintcodec::ColorCatalog;
///
/// let catalog = ColorCatalog::new();
/// assert!(catalog.lookup("red").is_some());
/// assert!(catalog.lookup("bg_yellow").is_some());
/// assert!(catalog.lookup("mauve").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ColorCatalog {
    entries: Vec<(&'static str, Style)>,
}

impl ColorCatalog {
    /// Builds the catalog.
    pub fn new() -> ColorCatalog {
        fn fg(color: Color) -> Style {
            Style {
                foreground: Some(color),
                ..Default::default()
            }
        }
        fn bg(color: Color) -> Style {
            Style {
                background: Some(color),
                ..Default::default()
            }
        }

        let mut entries: Vec<(&'static str, Style)> = Vec::new();

        entries.push(("black", fg(Color::Black)));
        entries.push(("red", fg(Color::Red)));
        entries.push(("green", fg(Color::Green)));
        entries.push(("yellow", fg(Color::Yellow)));
        entries.push(("blue", fg(Color::Blue)));
        entries.push(("magenta", fg(Color::Purple)));
        entries.push(("purple", fg(Color::Purple)));
        entries.push(("cyan", fg(Color::Cyan)));
        entries.push(("white", fg(Color::White)));
        entries.push(("bright_black", fg(Color::BrightBlack)));
        entries.push(("bright_red", fg(Color::BrightRed)));
        entries.push(("bright_green", fg(Color::BrightGreen)));
        entries.push(("bright_yellow", fg(Color::BrightYellow)));
        entries.push(("bright_blue", fg(Color::BrightBlue)));
        entries.push(("bright_magenta", fg(Color::BrightPurple)));
        entries.push(("bright_cyan", fg(Color::BrightCyan)));
        entries.push(("bright_white", fg(Color::BrightWhite)));

        entries.push(("bg_black", bg(Color::Black)));
        entries.push(("bg_red", bg(Color::Red)));
        entries.push(("bg_green", bg(Color::Green)));
        entries.push(("bg_yellow", bg(Color::Yellow)));
        entries.push(("bg_blue", bg(Color::Blue)));
        entries.push(("bg_magenta", bg(Color::Purple)));
        entries.push(("bg_purple", bg(Color::Purple)));
        entries.push(("bg_cyan", bg(Color::Cyan)));
        entries.push(("bg_white", bg(Color::White)));
        entries.push(("bg_bright_black", bg(Color::BrightBlack)));
        entries.push(("bg_bright_red", bg(Color::BrightRed)));
        entries.push(("bg_bright_green", bg(Color::BrightGreen)));
        entries.push(("bg_bright_yellow", bg(Color::BrightYellow)));
        entries.push(("bg_bright_blue", bg(Color::BrightBlue)));
        entries.push(("bg_bright_magenta", bg(Color::BrightPurple)));
        entries.push(("bg_bright_cyan", bg(Color::BrightCyan)));
        entries.push(("bg_bright_white", bg(Color::BrightWhite)));

        entries.push((
            "bold",
            Style {
                intensity: Some(Intensity::Bold),
                ..Default::default()
            },
        ));
        entries.push((
            "bright",
            Style {
                intensity: Some(Intensity::Bold),
                ..Default::default()
            },
        ));
        entries.push((
            "dim",
            Style {
                intensity: Some(Intensity::Dim),
                ..Default::default()
            },
        ));
        entries.push((
            "underline",
            Style {
                underline: Some(Underline::Single),
                ..Default::default()
            },
        ));
        entries.push((
            "blink",
            Style {
                blink: Some(Blink::Slow),
                ..Default::default()
            },
        ));
        entries.push((
            "invert",
            Style {
                reverse: Some(true),
                ..Default::default()
            },
        ));
        entries.push((
            "swapcolor",
            Style {
                reverse: Some(true),
                ..Default::default()
            },
        ));
        entries.push((
            "hidden",
            Style {
                hidden: Some(true),
                ..Default::default()
            },
        ));
        entries.push((
            "strikethrough",
            Style {
                strike: Some(true),
                ..Default::default()
            },
        ));

        ColorCatalog { entries }
    }

    /// Looks up a style by name.
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, style)| style)
    }

    /// Looks up a style by name, reporting unknown names as an error.
    ///
    /// The empty name resolves to the plain style — the "introduce nothing
    /// at this layer" marker.
    ///
    /// # Errors
    ///
    /// [`TintError::UnknownStyle`] for any non-empty name not in the table.
    pub fn resolve(&self, name: &str) -> TintResult<Style> {
        if name.is_empty() {
            return Ok(Style::default());
        }
        self.lookup(name)
            .cloned()
            .ok_or_else(|| TintError::UnknownStyle {
                name: name.to_string(),
            })
    }

    /// Iterates over all names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Foreground color names, in catalog order.
    pub fn foreground_names(&self) -> Vec<&'static str> {
        self.names()
            .filter(|name| !name.starts_with("bg_") && !TEXT_STYLE_NAMES.contains(name))
            .collect()
    }

    /// Background color names, in catalog order.
    pub fn background_names(&self) -> Vec<&'static str> {
        self.names()
            .filter(|name| name.starts_with("bg_"))
            .collect()
    }

    /// Text-style names, in catalog order.
    pub fn style_names(&self) -> Vec<&'static str> {
        self.names()
            .filter(|name| TEXT_STYLE_NAMES.contains(name))
            .collect()
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::new()
    }
}
