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

//! Per-line processing: color-group resolution and the highlight pipeline.

use pipetint_tintcodec::{ColorCatalog, Style, TintResult, TintedString};
use regex::Regex;

/// Splits raw COLORS arguments into per-group name lists.
///
/// Each argument belongs to one capture group; commas separate that group's
/// layers. `["red,bold", "blue"]` means group 1 gets red then bold, group 2
/// gets blue. Empty pieces are dropped.
pub fn parse_color_groups(args: &[String]) -> Vec<Vec<String>> {
    args.iter()
        .map(|arg| {
            arg.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Resolves name lists against the catalog.
///
/// # Errors
///
/// [`TintError::UnknownStyle`](pipetint_tintcodec::TintError::UnknownStyle)
/// on the first name the catalog does not recognize.
pub fn resolve_color_groups(
    catalog: &ColorCatalog,
    groups: &[Vec<String>],
) -> TintResult<Vec<Vec<Style>>> {
    groups
        .iter()
        .map(|layers| layers.iter().map(|name| catalog.resolve(name)).collect())
        .collect()
}

/// Runs one input line through the overlay pipeline.
///
/// The line is scanned so that styling applied by an earlier pipeline stage
/// survives into this one; `replace_all` discards that styling first. The
/// returned string carries this stage's highlights rendered back out.
///
/// # Errors
///
/// Structural [`TintError`](pipetint_tintcodec::TintError)s from the engine;
/// none are expected for well-formed entities.
pub fn process_line(
    line: &str,
    pattern: &Regex,
    groups: &[Vec<Style>],
    replace_all: bool,
) -> TintResult<String> {
    let mut entity = TintedString::parse(line);
    if replace_all {
        entity = entity.remove_color();
    }
    Ok(entity.highlight(pattern, groups)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(catalog: &ColorCatalog, args: &[&str]) -> Vec<Vec<Style>> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        resolve_color_groups(catalog, &parse_color_groups(&args)).unwrap()
    }

    #[test]
    fn test_parse_color_groups() {
        let parsed = parse_color_groups(&["red,bold".to_string(), "blue".to_string()]);
        assert_eq!(
            parsed,
            vec![
                vec!["red".to_string(), "bold".to_string()],
                vec!["blue".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_color_groups_drops_empty_pieces() {
        let parsed = parse_color_groups(&["red,, bold ,".to_string()]);
        assert_eq!(parsed, vec![vec!["red".to_string(), "bold".to_string()]]);
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        let catalog = ColorCatalog::new();
        let parsed = parse_color_groups(&["red,mauve".to_string()]);
        assert!(resolve_color_groups(&catalog, &parsed).is_err());
    }

    #[test]
    fn test_process_line_basic() {
        let catalog = ColorCatalog::new();
        let pattern = Regex::new("ERROR").unwrap();
        let out = process_line(
            "ERROR: failed",
            &pattern,
            &groups(&catalog, &["red"]),
            false,
        )
        .unwrap();
        assert_eq!(out, "\x1b[31mERROR\x1b[0m: failed");
    }

    #[test]
    fn test_process_line_preserves_prior_stage() {
        let catalog = ColorCatalog::new();
        let pattern = Regex::new(r"\d+").unwrap();
        let out = process_line(
            "\x1b[31mERROR\x1b[0m at 42",
            &pattern,
            &groups(&catalog, &["blue"]),
            false,
        )
        .unwrap();
        assert!(out.contains("\x1b[31mERROR"));
        assert!(out.contains("\x1b[34m42"));
    }

    #[test]
    fn test_process_line_replace_all_clears_prior_stage() {
        let catalog = ColorCatalog::new();
        let pattern = Regex::new(r"\d+").unwrap();
        let out = process_line(
            "\x1b[31mERROR\x1b[0m at 42",
            &pattern,
            &groups(&catalog, &["blue"]),
            true,
        )
        .unwrap();
        assert_eq!(out, "ERROR at \x1b[34m42\x1b[0m");
    }

    #[test]
    fn test_process_line_empty_line() {
        let catalog = ColorCatalog::new();
        let pattern = Regex::new("(.*)").unwrap();
        let out = process_line(
            "",
            &pattern,
            &groups(&catalog, &["black,bg_yellow,swapcolor"]),
            false,
        )
        .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_process_line_default_arguments_shape() {
        let catalog = ColorCatalog::new();
        let pattern = Regex::new("(.*)").unwrap();
        let out = process_line(
            "x",
            &pattern,
            &groups(&catalog, &["black,bg_yellow,swapcolor"]),
            false,
        )
        .unwrap();
        assert_eq!(out, "\x1b[30;43;7mx\x1b[0m");
    }
}
