// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;
use std::time::Instant;

use sitesearch::render::ViewState;
use sitesearch::{
    build_index, is_searchable, load_path, render, search_with, ConfigError, Document, LoadError,
    RenderOptions, SearchConfig, View,
};

mod cli;
use cli::display::{self, *};
use cli::inspect::IndexReport;
use cli::{Cli, Commands};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)
    {
        eprintln!("{}", error_line(&format!("failed to initialize logging: {}", e)));
    }

    if let Err(e) = run(cli) {
        eprintln!("{}", error_line(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = SearchConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => {
            if let Some(limit) = limit {
                config.max_results = limit;
                config.validate()?;
            }
            let docs = load_docs(&index, &config)?;
            run_search(docs, &query, &config, json)
        }
        Commands::Render {
            index,
            query,
            active,
        } => {
            let docs = load_docs(&index, &config)?;
            run_render(docs, &query, active, &config);
            Ok(())
        }
        Commands::Inspect { index } => {
            let docs = load_docs(&index, &config)?;
            run_inspect(&index, &docs);
            Ok(())
        }
    }
}

fn load_docs(path: &Path, config: &SearchConfig) -> Result<Vec<Document>, LoadError> {
    let docs = load_path(path, &config.index_path)?;
    tracing::info!(path = %path.display(), docs = docs.len(), "loaded index");
    Ok(docs)
}

fn run_search(
    docs: Vec<Document>,
    query: &str,
    config: &SearchConfig,
    json: bool,
) -> Result<(), CliError> {
    let index = build_index(docs);
    let start = Instant::now();
    let results = search_with(&index, query, config);
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", clip(query, 48)));
    if !is_searchable(query, config.min_query_chars) {
        row(&format!(
            "  {}",
            warn_mark(&format!(
                "query shorter than {} characters; nothing searched",
                config.min_query_chars
            ))
        ));
        section_bot();
        return Ok(());
    }
    if results.is_empty() {
        row(&format!("  {}", dim(sitesearch::render::NO_RESULTS_TEXT)));
    }
    for (rank, result) in results.iter().enumerate() {
        row(&format!(
            " {} {}  {}  {}",
            pad_left(&(rank + 1).to_string(), 2),
            score_value(result.score),
            pad_right(&type_label(&result.doc.kind), 12),
            clip(result.title(), 54),
        ));
        row(&format!(
            "                          {}",
            dim(&format!(
                "{}  title×{} content×{}",
                clip(result.url(), 36),
                result.title_matches,
                result.content_matches
            ))
        ));
    }
    section_mid("SUMMARY");
    row(&format!(
        "  {} of {} documents in {:.3} ms",
        results.len(),
        index.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    section_bot();
    Ok(())
}

fn run_render(docs: Vec<Document>, query: &str, active: Option<usize>, config: &SearchConfig) {
    let index = build_index(docs);
    let results = search_with(&index, query, config);
    let active = active.filter(|&i| i < results.len());
    let view = render(
        &ViewState {
            open: true,
            query,
            results: &results,
            active,
        },
        &RenderOptions::from(config),
    );
    if view == View::Empty {
        tracing::warn!(
            min_query_chars = config.min_query_chars,
            "query too short; the modal shows an empty results area"
        );
    }
    println!("{}", view.to_html());
}

fn run_inspect(path: &Path, docs: &[Document]) {
    let report = IndexReport::from_docs(docs);

    section_top(&format!("INDEX {}", clip(&path.display().to_string(), 60)));
    row(&format!("  Documents  {}", report.documents));

    section_mid("TYPES");
    for (kind, count) in &report.types {
        row(&format!("  {} {}", pad_right(&type_label(kind), 16), count));
    }

    section_mid("MISSING OPTIONAL FIELDS");
    for (field, missing) in [
        ("date", report.missing_date),
        ("categories", report.missing_categories),
        ("tags", report.missing_tags),
    ] {
        let line = format!("{:<12} {} of {}", field, missing, report.documents);
        row(&format!(
            "  {}",
            if missing == 0 {
                ok_mark(&line)
            } else {
                display::themed(GRAY, &[], &line)
            }
        ));
    }

    section_mid("PROBLEMS");
    if !report.has_problems() {
        row(&format!("  {}", ok_mark("none")));
    }
    for &i in &report.empty_titles {
        let url = docs.get(i).map_or("", |d| d.url.as_str());
        row(&format!(
            "  {}",
            warn_mark(&format!("empty title at #{} ({})", i, clip(url, 50)))
        ));
    }
    for (url, positions) in &report.duplicate_urls {
        let at: Vec<String> = positions.iter().map(|p| format!("#{}", p)).collect();
        row(&format!(
            "  {}",
            warn_mark(&format!("duplicate url {} at {}", clip(url, 40), at.join(", ")))
        ));
    }
    section_bot();
}
