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

//! Color Removal Examples — stripping ANSI codes from text.
//!
//! Demonstrates recovering plain text from styled streams: cleaning up
//! colored terminal output, storing plain copies of colored log lines, and
//! extracting data from tools that color their output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example color_removal
//! ```

use pipetint_tintcodec::{ColorCatalog, Style, TintedString, Tinter};
use regex::Regex;

fn style(catalog: &ColorCatalog, name: &str) -> Style {
    catalog.lookup(name).expect("catalog name").clone()
}

fn main() {
    let tinter = Tinter::new();
    let catalog = ColorCatalog::new();

    println!("{}", "=".repeat(60));
    println!("Color Removal Examples");
    println!("{}", "=".repeat(60));
    println!();

    // Example 1: clean up colored text coming from another tool
    println!("1. Remove colors from foreign terminal output");
    println!("{}", "-".repeat(60));
    let colored = "\x1b[31mERROR\x1b[0m: Connection failed at \x1b[34m10:30:45\x1b[0m";
    println!("Original: {}", colored);
    println!("Cleaned:  {}", tinter.remove_color(colored));
    println!();

    // Example 2: highlight, then take the styling back off
    println!("2. Remove colors from a highlighted entity");
    println!("{}", "-".repeat(60));
    let pattern = Regex::new("processing").expect("pattern");
    let entity = TintedString::plain("Log processing started")
        .highlight(
            &pattern,
            &[vec![style(&catalog, "green"), style(&catalog, "bold")]],
        )
        .expect("highlight");
    println!("Colored:  {}", entity);
    println!("Cleaned:  {}", entity.remove_color());
    println!();

    // Example 3: colorize for display, keep plain text for storage
    println!("3. Pipeline: colorize for display, extract plain text");
    println!("{}", "-".repeat(60));
    let log_lines = [
        "INFO: Server started successfully",
        "WARN: High memory usage detected",
        "ERROR: Database connection failed",
    ];
    let rules = [
        ("ERROR", vec![style(&catalog, "red"), style(&catalog, "bold")]),
        ("WARN", vec![style(&catalog, "yellow")]),
        ("INFO", vec![style(&catalog, "blue")]),
    ];

    for line in log_lines {
        let mut colored = TintedString::plain(line);
        for (keyword, layers) in &rules {
            if line.contains(keyword) {
                let pattern = Regex::new(keyword).expect("pattern");
                colored = colored
                    .highlight(&pattern, &[layers.clone()])
                    .expect("highlight");
                break;
            }
        }
        println!("Display: {}", colored);
        println!("Store:   {}", colored.remove_color());
        println!();
    }

    // Example 4: extract data from colored test-runner output
    println!("4. Extract data from colored terminal output");
    println!("{}", "-".repeat(60));
    let terminal_output = [
        "\x1b[32m[PASS]\x1b[0m auth_tests.rs",
        "\x1b[31m[FAIL]\x1b[0m database_tests.rs",
        "\x1b[32m[PASS]\x1b[0m api_tests.rs",
    ];

    println!("Failed tests:");
    for line in terminal_output {
        let clean = tinter.remove_color(line);
        if clean.contains("[FAIL]")
            && let Some(filename) = clean.split_whitespace().nth(1)
        {
            println!("  - {}", filename);
        }
    }
    println!();

    println!("{}", "=".repeat(60));
}
