// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fuzzline::{
    distance, render, search_with_options, similarity, DirectoryCorpus, Rendered, ScanOptions,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, SearchArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Distance { a, b } => {
            run_distance(&a, &b);
            Ok(())
        }
    }
}

fn read_query(args: &SearchArgs) -> anyhow::Result<String> {
    if let Some(query) = &args.query {
        return Ok(query.clone());
    }
    if atty::is(atty::Stream::Stdin) {
        bail!("no query: pass --query or pipe it on stdin");
    }
    let mut query = String::new();
    io::stdin()
        .read_to_string(&mut query)
        .context("reading query from stdin")?;
    Ok(query)
}

fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let config = args.build_config()?;
    let query = read_query(&args)?;

    let corpus = if args.recursive {
        DirectoryCorpus::open_recursive(&args.corpus)
    } else {
        DirectoryCorpus::open(&args.corpus)
    }?;
    debug!(
        root = %corpus.root().display(),
        skipped = corpus.skipped().len(),
        "corpus opened"
    );

    let options = ScanOptions {
        deadline: args
            .timeout_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms)),
    };

    let result = search_with_options(&corpus, &query, &config, options);
    let rendered = render(&result, config.mode, config.preamble.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let value = cli::json_output(&result, &rendered)?;
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    match rendered {
        Rendered::NoMatches => writeln!(out, "{}", display::no_matches())?,
        Rendered::Lines(matches) => {
            for m in &matches {
                writeln!(out, "{}", display::format_line_match(m))?;
            }
        }
        Rendered::Documents(text) => writeln!(out, "{}", text)?,
    }

    for d in corpus.skipped().iter().chain(&result.diagnostics) {
        eprintln!("{}", display::diagnostic(d));
    }
    eprintln!("{}", display::status_line(result.status, result.matches.len()));
    Ok(())
}

fn run_distance(a: &str, b: &str) {
    println!("distance   {}", distance(a, b));
    println!("similarity {}", display::score_value(similarity(a, b)));
}
