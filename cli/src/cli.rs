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

//! CLI argument parsing.

use clap::Parser;
use pipetint_tintcodec::{ColorCatalog, TintedString};
use regex::Regex;

/// Default pattern: match every line wholesale.
pub const DEFAULT_PATTERN: &str = "(.*)";

/// Default color layers for the single default group.
pub const DEFAULT_COLORS: &str = "black,bg_yellow,swapcolor";

/// Colorize text from stdin using ANSI color codes
#[derive(Parser, Debug)]
#[command(
    name = "pipetint",
    version,
    about = "Colorize text from stdin using ANSI color codes",
    override_usage = "echo 'text' | pipetint [PATTERN] [COLORS...]\n       pipetint --list-colors",
    after_help = help_examples()
)]
pub struct Cli {
    /// Regular expression pattern to match text (default: match all)
    #[arg(value_name = "PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Colors for each capture group. Use commas to combine multiple colors
    /// for one group (e.g., red,bold)
    #[arg(value_name = "COLORS", default_values_t = vec![DEFAULT_COLORS.to_string()])]
    pub colors: Vec<String>,

    /// List all available colors and exit
    #[arg(long)]
    pub list_colors: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Make pattern matching case sensitive
    #[arg(long)]
    pub case_sensitive: bool,

    /// Clear all previous colors before applying new ones (useful in
    /// pipelines)
    #[arg(long)]
    pub replace_all: bool,

    /// Force line-buffered output (flush after each line). Useful for
    /// real-time log streaming without external tools like stdbuf
    #[arg(long, short = 'u')]
    pub unbuffered: bool,
}

impl Cli {
    /// Returns `true` when pattern and colors were left at their defaults.
    ///
    /// With a TTY on stdin this means the user ran the bare command; help is
    /// more useful than blocking on input that will never come.
    pub fn is_all_defaults(&self) -> bool {
        self.pattern == DEFAULT_PATTERN && self.colors == [DEFAULT_COLORS]
    }
}

/// Builds the colorized example block for `--help` through the engine
/// itself, so the help output doubles as a smoke test on a color terminal.
fn help_examples() -> String {
    fn highlight(text: &str, pattern: &str, names: &[&str]) -> String {
        let catalog = ColorCatalog::new();
        let regex = Regex::new(pattern).expect("help example pattern");
        let groups: Vec<Vec<_>> = names
            .iter()
            .map(|name| {
                name.split(',')
                    .map(|layer| catalog.resolve(layer).expect("help example color"))
                    .collect()
            })
            .collect();
        TintedString::parse(text)
            .highlight(&regex, &groups)
            .expect("help example highlight")
            .render()
    }

    // Simple highlighting
    let ex1 = highlight("ERROR: Connection failed", "ERROR", &["red"]);

    // Success highlighting
    let ex2 = highlight("SUCCESS: Task completed", "SUCCESS", &["green"]);

    // Nested groups showing priority
    let ex3 = highlight("hello world", "(h.(ll))", &["red", "blue"]);

    // Background + foreground across two stages
    let ex4 = highlight(
        &highlight("WARN: Check logs", "WARN", &["black"]),
        "WARN",
        &["bg_yellow"],
    );

    // Multiple capture groups (log parsing)
    let ex5 = highlight(
        "2024-01-15 ERROR: Connection timeout at server.rs:42",
        r"(\d{4}-\d{2}-\d{2}).*?(ERROR|WARN|INFO).*?([a-z_]+\.rs:\d+)",
        &["cyan", "red", "yellow"],
    );

    // Pipeline composition
    let ex6 = highlight(
        &highlight(
            "ERROR: Connection failed at 10:30:45",
            "ERROR",
            &["red,bold"],
        ),
        r"\d{2}:\d{2}:\d{2}",
        &["blue"],
    );

    format!(
        r#"Examples:
  # Highlight errors in red
  $ echo "ERROR: Connection failed" | pipetint 'ERROR' red
  {ex1}

  # Highlight success in green
  $ echo "SUCCESS: Task completed" | pipetint 'SUCCESS' green
  {ex2}

  # Nested groups - inner color wins
  $ echo "hello world" | pipetint '(h.(ll))' red,blue
  {ex3}

  # Background + foreground
  $ echo "WARN: Check logs" | pipetint 'WARN' black,bg_yellow
  {ex4}

  # Multiple patterns - log parsing with 3 groups (date, level, location)
  $ echo "2024-01-15 ERROR: Connection timeout at server.rs:42" | \
      pipetint '(\d{{4}}-\d{{2}}-\d{{2}}).*?(ERROR|WARN|INFO).*?([a-z_]+\.rs:\d+)' \
      cyan red yellow
  {ex5}

  # Pipeline composition - colors preserved across stages
  $ echo "ERROR: Connection failed at 10:30:45" | \
      pipetint 'ERROR' red,bold | \
      pipetint '\d{{2}}:\d{{2}}:\d{{2}}' blue
  {ex6}

  # List all available colors
  $ pipetint --list-colors
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["pipetint"]);
        assert_eq!(cli.pattern, DEFAULT_PATTERN);
        assert_eq!(cli.colors, vec![DEFAULT_COLORS.to_string()]);
        assert!(cli.is_all_defaults());
        assert!(!cli.case_sensitive);
        assert!(!cli.replace_all);
    }

    #[test]
    fn test_pattern_and_colors_positional() {
        let cli = Cli::parse_from(["pipetint", "ERROR", "red,bold", "blue"]);
        assert_eq!(cli.pattern, "ERROR");
        assert_eq!(cli.colors, vec!["red,bold", "blue"]);
        assert!(!cli.is_all_defaults());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "pipetint",
            "-v",
            "-u",
            "--case-sensitive",
            "--replace-all",
            "WARN",
        ]);
        assert!(cli.verbose);
        assert!(cli.unbuffered);
        assert!(cli.case_sensitive);
        assert!(cli.replace_all);
        assert_eq!(cli.pattern, "WARN");
    }

    #[test]
    fn test_help_examples_render() {
        let examples = help_examples();
        assert!(examples.contains("\x1b[31mERROR\x1b[0m: Connection failed"));
        assert!(examples.contains("--list-colors"));
    }
}
