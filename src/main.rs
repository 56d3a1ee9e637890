use anyhow::{bail, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use insumos::{
    fetch::{load_or_empty, Source},
    present, reference, search, ParsedTable, DEFAULT_DELIMITER,
};
use reqwest::Client;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Above this many records the filter runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Search the insumo reference guide or a semicolon-delimited export"
)]
struct Args {
    /// Search words; every word must appear in a row (accents and case ignored)
    query: Vec<String>,

    /// Delimited file path or http(s) URL; the built-in guide when omitted
    #[arg(short, long, env = "INSUMOS_SOURCE")]
    source: Option<String>,

    #[arg(short, long, env = "INSUMOS_DELIMITER", default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Most rows to print
    #[arg(short, long, env = "INSUMOS_LIMIT", default_value_t = present::DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Print matches as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the guide's table of contents and exit
    #[arg(long)]
    toc: bool,

    /// Print one guide section by id (see --toc) and exit
    #[arg(long)]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::WARN.into())),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.toc {
        print!("{}", present::render_toc());
        return Ok(());
    }
    if let Some(id) = &args.section {
        match reference::section(id) {
            Some(s) => {
                print!("{}", present::render_section(s));
                return Ok(());
            }
            None => bail!("unknown section {:?}, see --toc", id),
        }
    }

    let table = match &args.source {
        Some(s) => load(s, args.delimiter).await,
        None => reference::catalog_table(),
    };

    let query = args.query.join(" ");
    let matches = if table.records.len() > PARALLEL_THRESHOLD {
        search::par_filter(&table.records, &query)
    } else {
        search::filter(&table.records, &query)
    };
    info!(query = %query, total = table.records.len(), matched = matches.len(), "filtered");

    let shown = present::cap(&matches, args.limit);
    if args.json {
        print!("{}", present::json_lines(shown)?);
        return Ok(());
    }

    print!("{}", present::render_text(&table.header, shown));
    if shown.len() < matches.len() {
        println!("({} de {} resultados)", shown.len(), matches.len());
    }
    if args.source.is_none() {
        println!("\nDica rápida: {}", reference::TIP);
    }
    println!("\n{}", present::footer(Local::now().year()));
    Ok(())
}

/// Fetch and parse, or report and continue with an empty table.
async fn load(source: &str, delimiter: char) -> ParsedTable {
    let source = match Source::parse(source) {
        Ok(s) => s,
        Err(e) => {
            warn!("{}", e);
            eprintln!("Não foi possível carregar os dados: {}", e);
            return ParsedTable::empty();
        }
    };

    let client = Client::new();
    let (table, err) = load_or_empty(&client, &source, delimiter).await;
    if let Some(e) = err {
        eprintln!("Não foi possível carregar os dados: {}", e);
    }
    table
}
