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

//! The `--list-colors` display.

use pipetint_tintcodec::Tinter;
use std::fmt::Write;

/// Width of the section rules.
const RULE_WIDTH: usize = 60;

/// Renders all catalog entries with visual demonstrations, grouped into
/// foreground colors, background colors, and text styles.
pub fn list_colors(tinter: &Tinter) -> String {
    let catalog = tinter.catalog();
    let mut out = String::new();

    let colorize = |text: &str, name: &str| -> String {
        tinter
            .colorize(text, name)
            .expect("catalog-listed name resolves")
    };

    writeln!(out, "{}", colorize("Available Colors", "bold")).ok();
    writeln!(out, "{}", "=".repeat(RULE_WIDTH)).ok();
    writeln!(out).ok();

    let foreground = catalog.foreground_names();
    if !foreground.is_empty() {
        writeln!(out, "{}", colorize("Foreground Colors", "bold")).ok();
        writeln!(out, "{}", "-".repeat(RULE_WIDTH)).ok();
        for name in foreground {
            let block = colorize("████", name);
            let demo = colorize(&format!("This is {}", name), name);
            writeln!(out, "  {}  {}", block, demo).ok();
        }
        writeln!(out).ok();
    }

    let background = catalog.background_names();
    if !background.is_empty() {
        writeln!(out, "{}", colorize("Background Colors", "bold")).ok();
        writeln!(out, "{}", "-".repeat(RULE_WIDTH)).ok();
        for name in background {
            // Background plus black text, applied as two stages
            let block = colorize(&colorize("████", name), "black");
            let demo = colorize(&colorize(&format!("This is {}", name), name), "black");
            writeln!(out, "  {}  {}", block, demo).ok();
        }
        writeln!(out).ok();
    }

    let styles = catalog.style_names();
    if !styles.is_empty() {
        writeln!(out, "{}", colorize("Text Styles", "bold")).ok();
        writeln!(out, "{}", "-".repeat(RULE_WIDTH)).ok();
        for name in styles {
            let demo = colorize(&format!("This is {}", name), name);
            writeln!(out, "  {}", demo).ok();
        }
        writeln!(out).ok();
    }

    writeln!(out, "{}", "=".repeat(RULE_WIDTH)).ok();
    writeln!(out, "{}", colorize("Usage: pipetint 'pattern' <color>", "dim")).ok();

    out
}
