mod input;
mod output;
mod telemetry;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracesum_core::config::Config;
use tracesum_core::filter::{SortOrder, SummaryFilter, sort_rows};
use tracesum_core::time::parse_duration_str;
use tracesum_core::{present, summarize_all};
use tracing::info;

use crate::input::load_traces;
use crate::output::print_rows_human;
use crate::telemetry::init_cli_tracing;

#[derive(Parser, Debug)]
#[command(name = "tracesum")]
#[command(about = "Summarize distributed traces into a trace list")]
struct Cli {
    #[arg(help = "Trace JSON files; reads stdin when omitted or '-'")]
    files: Vec<PathBuf>,

    #[arg(long, help = "Report the share of each trace spent in this service")]
    service: Option<String>,

    #[arg(long, help = "Format start times in UTC instead of local time")]
    utc: bool,

    #[arg(long, help = "input, duration_desc, duration_asc or ts_desc")]
    sort: Option<String>,

    #[arg(long, help = "Drop traces shorter than this (e.g. 5ms)")]
    min_duration: Option<String>,

    #[arg(long, help = "Keep traces touching a service matching this glob")]
    service_glob: Option<String>,

    #[arg(long, help = "List the services seen across the retained traces")]
    services: bool,

    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_cli_tracing();
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;

    let traces = load_traces(&cli.files)?;
    let filter = SummaryFilter::new(cfg.service_glob.as_deref(), cfg.min_duration)?;
    let summaries = filter.apply(summarize_all(&traces));
    info!(
        traces = traces.len(),
        summarized = summaries.len(),
        "summarized traces"
    );

    if cli.services {
        let mut names: Vec<String> = summaries.iter().flat_map(|s| s.service_names()).collect();
        names.sort();
        names.dedup();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            names.iter().for_each(|name| println!("{name}"));
        }
        return Ok(());
    }

    let focus = cfg.focus_service.as_deref();
    let mut rows = present(focus, &summaries, cfg.utc);
    sort_rows(&mut rows, cfg.sort);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_rows_human(&rows, focus);
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut cfg = Config::load().context("failed loading configuration")?;
    if let Some(service) = &cli.service {
        cfg.focus_service = Some(service.clone());
    }
    if cli.utc {
        cfg.utc = true;
    }
    if let Some(sort) = &cli.sort {
        cfg.sort = SortOrder::from_str(sort)?;
    }
    if let Some(min) = &cli.min_duration {
        cfg.min_duration = Some(parse_duration_str(min)?);
    }
    if let Some(glob) = &cli.service_glob {
        cfg.service_glob = Some(glob.clone());
    }
    Ok(cfg)
}
