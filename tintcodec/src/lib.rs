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

//! Styled-text overlay engine: map regex capture groups onto nested ANSI
//! color ranges over visible text, render them back out as a minimal,
//! correctly-nested escape stream, or strip styling losslessly.

mod catalog;
mod colorize;
mod consts;
mod highlight;
mod range;
mod render;
mod result;
mod span;
mod string;
mod style;
pub mod utility;

pub use self::catalog::{ColorCatalog, TEXT_STYLE_NAMES};
pub use self::colorize::Tinter;
pub use self::consts::MAX_SEQUENCE_LENGTH;
pub use self::range::ColorRange;
pub use self::result::{TintError, TintResult};
pub use self::span::{Span, SpannedText};
pub use self::string::TintedString;
pub use self::style::{Blink, Color, Intensity, Style, Underline};
pub use self::utility::strip_ansi_codes;

#[cfg(test)]
mod tests {

    #[test]
    fn it_works() {
        //
    }
}
