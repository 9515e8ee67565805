// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use sitesearch::render::highlight::keyword_ranges;
use sitesearch::render::snippet::snippet_window;
use sitesearch::util::{occurrences_ci, prefix_chars};
use sitesearch::{
    parse_phrase, parse_query, search, FsFetcher, LoadReport, SearchConfig, SearchIndex, SearchMode,
    SearchOutcome, SearchSession,
};

mod cli;
use cli::display::{self, BOX_WIDTH};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            query,
            mode,
            limit,
            seed,
            html,
            config,
        } => run_search(&index, &query, mode.into(), limit, seed, html, config.as_deref()),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn read_config(path: Option<&str>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
    SearchConfig::from_json_str(&json).with_context(|| format!("Invalid config {}", path))
}

/// Load `index_file` into a fresh session, serving its directory the way a
/// static file server serves the site root.
fn load_session(index_file: &str, mut config: SearchConfig, seed: u64) -> Result<(SearchSession, LoadReport)> {
    let file = Path::new(index_file);
    let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
        bail!("Not an index file: {}", index_file);
    };
    let root = file.parent().unwrap_or_else(|| Path::new("."));
    config.index_path = format!("/{}", name);

    let fetcher = FsFetcher::new(root);
    let mut session = SearchSession::new(config, seed);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start runtime")?;
    let report = runtime
        .block_on(session.load(&fetcher))
        .with_context(|| format!("Failed to load {}", index_file))?;

    Ok((session, report))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run_search(
    index_file: &str,
    query: &str,
    mode: SearchMode,
    limit: Option<usize>,
    seed: Option<u64>,
    html: bool,
    config_path: Option<&str>,
) -> Result<()> {
    let mut config = read_config(config_path)?;
    if let Some(limit) = limit {
        config.max_results = limit;
    }
    let (mut session, report) = load_session(index_file, config, seed.unwrap_or_else(clock_seed))?;
    log::info!("loaded {} of {} entries ({})", report.kept, report.parsed, report.format);

    if html {
        let view = session.search(query, mode);
        println!("{}", view.html);
        return Ok(());
    }

    let outcome = search(session.index(), query, mode);
    let messages = &session.config().messages;
    match &outcome {
        SearchOutcome::Cleared => {}
        SearchOutcome::Loading => println!("{}", display::notice(&messages.loading)),
        SearchOutcome::NotFound => println!("{}", display::notice(&messages.not_found)),
        SearchOutcome::Found(_) => match mode {
            SearchMode::Keyword => print_keyword_results(session.index(), session.config(), query, &outcome),
            SearchMode::Phrase => print_phrase_results(session.index(), session.config(), query, &outcome),
        },
    }
    Ok(())
}

/// Room for text inside a box row, after the rank/score gutter.
const TEXT_WIDTH: usize = BOX_WIDTH - 8;

fn print_keyword_results(index: &SearchIndex, config: &SearchConfig, query: &str, outcome: &SearchOutcome) {
    let keywords = parse_query(query);
    let matches = outcome.matches();
    let shown = matches.len().min(config.max_results);

    display::section_top(&format!("RESULTS ({})", matches.len()));
    for (rank, m) in matches[..shown].iter().enumerate() {
        let Some(entry) = index.get(m.doc) else {
            continue;
        };
        let title = prefix_chars(&entry.title, TEXT_WIDTH);
        let preview = display::one_line(prefix_chars(&entry.content, config.preview_chars));
        let preview = prefix_chars(&preview, TEXT_WIDTH);

        display::row(&format!(
            " {:>2} {} {}",
            rank + 1,
            display::score_value(m.score),
            display::highlight(title, &keyword_ranges(title, &keywords))
        ));
        display::row(&format!("         {}", display::url(prefix_chars(&entry.url, TEXT_WIDTH))));
        display::row(&format!(
            "         {}",
            display::highlight(preview, &keyword_ranges(preview, &keywords))
        ));
    }
    if matches.len() > shown {
        display::section_mid("MORE");
        display::row(&format!(" {}", config.messages.showing(shown, matches.len())));
    }
    display::section_bot();
}

fn print_phrase_results(index: &SearchIndex, config: &SearchConfig, query: &str, outcome: &SearchOutcome) {
    let phrase = parse_phrase(query).unwrap_or_default();
    let matches = outcome.matches();

    display::section_top(&format!("RESULTS ({})", matches.len()));
    for (rank, m) in matches.iter().enumerate() {
        let Some(entry) = index.get(m.doc) else {
            continue;
        };
        let title = prefix_chars(&entry.title, TEXT_WIDTH);
        let window = snippet_window(&entry.content, &phrase, config.snippet_before, config.snippet_after);
        let text = display::one_line(window.text);
        let text = prefix_chars(&text, TEXT_WIDTH - 6);
        let snippet = format!(
            "{}{}{}",
            if window.leading_ellipsis { "..." } else { "" },
            display::highlight(text, &occurrences_ci(text, &phrase)),
            if window.trailing_ellipsis { "..." } else { "" }
        );

        display::row(&format!(
            " {:>2} {} {}",
            rank + 1,
            display::score_value(m.score),
            display::highlight(title, &occurrences_ci(title, &phrase))
        ));
        let meta = match &entry.date {
            Some(date) => format!("{}  {}", entry.url, date),
            None => entry.url.clone(),
        };
        display::row(&format!("         {}", display::url(prefix_chars(&meta, TEXT_WIDTH))));
        display::row(&format!("         {}", snippet));
    }
    display::section_bot();
}

fn run_inspect(index_file: &str) -> Result<()> {
    let (session, report) = load_session(index_file, SearchConfig::default(), 0)?;
    let index = session.index();

    display::section_top("INDEX");
    display::row(&format!(" File       {}", index_file));
    display::row(&format!(" Format     {}", report.format));
    display::row(&format!(" Records    {}", report.parsed));
    display::row(&format!(" Kept       {}", report.kept));
    if report.dropped() > 0 {
        display::row(&format!(
            " Dropped    {}",
            display::notice(&format!("{} (missing title or url)", report.dropped()))
        ));
    }

    let dated = index.entries().iter().filter(|e| e.date.is_some()).count();
    let chars: usize = index.entries().iter().map(|e| e.content.chars().count()).sum();
    display::section_mid("CONTENT");
    display::row(&format!(" Dated      {}", dated));
    display::row(&format!(" Characters {}", chars));
    if !index.is_empty() {
        display::row(&format!(" Average    {}", chars / index.len()));
    }

    display::section_mid("ENTRIES");
    for entry in index.entries().iter().take(10) {
        display::row(&format!(" {}", prefix_chars(&entry.title, TEXT_WIDTH)));
        display::row(&format!("   {}", display::url(prefix_chars(&entry.url, TEXT_WIDTH))));
    }
    if index.len() > 10 {
        display::row(&format!(" ... {} more", index.len() - 10));
    }
    display::section_bot();
    Ok(())
}
