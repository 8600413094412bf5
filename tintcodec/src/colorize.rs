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

//! Thin stateless facade over the overlay engine.

use crate::catalog::ColorCatalog;
use crate::result::TintResult;
use crate::string::TintedString;
use crate::utility::strip_ansi_codes;

/// Stateless convenience surface: style a whole string, or strip one.
///
/// # Examples
///
/// ```rust
/// use pipetint_tintcodec::Tinter;
///
/// let tinter = Tinter::new();
///
/// let styled = tinter.colorize("Deployment complete", "green").unwrap();
/// assert_eq!(styled, "\x1b[32mDeployment complete\x1b[0m");
///
/// assert_eq!(tinter.remove_color(&styled), "Deployment complete");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tinter {
    catalog: ColorCatalog,
}

impl Tinter {
    /// Creates a `Tinter` with the standard color catalog.
    pub fn new() -> Tinter {
        Tinter {
            catalog: ColorCatalog::new(),
        }
    }

    /// Returns the catalog this facade resolves names against.
    pub fn catalog(&self) -> &ColorCatalog {
        &self.catalog
    }

    /// Applies one named style across the whole text and renders it.
    ///
    /// Pre-existing styling in `text` is preserved underneath the new
    /// overlay, which is what makes repeated application stack the way the
    /// highlighter does.
    ///
    /// # Errors
    ///
    /// [`TintError::UnknownStyle`](crate::TintError::UnknownStyle) if the
    /// name is not in the catalog.
    pub fn colorize(&self, text: &str, style_name: &str) -> TintResult<String> {
        let style = self.catalog.resolve(style_name)?;
        Ok(TintedString::parse(text).tint(&style)?.render())
    }

    /// Removes all ANSI styling from the text.
    ///
    /// Idempotent; malformed sequences survive as literal text.
    pub fn remove_color(&self, text: &str) -> String {
        strip_ansi_codes(text).into_owned()
    }
}
