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

//! Pipetint binary entry point: the stdin/stdout line filter.

use clap::{CommandFactory, Parser};
use pipetint_tintcodec::{ColorCatalog, Style, Tinter};
use regex::{Regex, RegexBuilder};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod list;
mod process;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.list_colors {
        print!("{}", list::list_colors(&Tinter::new()));
        return;
    }

    // Bare invocation on a terminal: the user almost certainly wanted help,
    // not a filter blocking on a TTY.
    if io::stdin().is_terminal() && cli.is_all_defaults() {
        Cli::command().print_help().ok();
        println!();
        return;
    }

    let pattern = match RegexBuilder::new(&cli.pattern)
        .case_insensitive(!cli.case_sensitive)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("pipetint: invalid pattern: {}", err);
            std::process::exit(1);
        }
    };

    let catalog = ColorCatalog::new();
    let parsed = process::parse_color_groups(&cli.colors);
    let groups = match process::resolve_color_groups(&catalog, &parsed) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("pipetint: {}", err);
            std::process::exit(1);
        }
    };

    debug!(
        pattern = %cli.pattern,
        color_groups = ?parsed,
        replace_all = cli.replace_all,
        "configured"
    );

    if let Err(err) = run(&cli, &pattern, &groups) {
        // Downstream closing the pipe is a normal way for this filter to end
        if err.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("pipetint: {}", err);
        std::process::exit(1);
    }
}

/// The sequential line loop: read, overlay, write.
fn run(cli: &Cli, pattern: &Regex, groups: &[Vec<Style>]) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;
        debug!(input = %line, "processing line");

        let rendered = process::process_line(&line, pattern, groups, cli.replace_all)
            .map_err(io::Error::other)?;
        writeln!(writer, "{}", rendered)?;

        if cli.unbuffered {
            writer.flush()?;
        }
    }

    writer.flush()
}

/// Installs the stderr subscriber; `-v` raises the default level to debug,
/// `RUST_LOG` overrides either way.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
