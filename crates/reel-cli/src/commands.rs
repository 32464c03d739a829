use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use reel_cli::config::resolve_options;
use reel_cli::logging::redact_value;
use reel_cli::{CleanReport, CleanRequest, run_clean};
use reel_ingest::load_canonical;
use reel_model::{CanonicalRecord, CanonicalTable, CleaningOptions, DateParseMode};
use reel_report::{Dashboard, search, summarize, write_exploded};
use reel_validate::check_config;

use crate::cli::{CanonicalArgs, CleanArgs, ExplodeArgs, ReportArgs, SchemaArgs, SearchArgs};

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanReport> {
    let mut options = resolve_options(args.config.as_deref())?;
    if args.lenient_dates {
        options.date_mode = DateParseMode::Lenient;
    }
    let mut request = CleanRequest::new(&args.input)
        .with_options(options)
        .with_dry_run(args.dry_run);
    if let Some(output) = &args.output {
        request = request.with_output(output);
    }
    Ok(run_clean(&request)?)
}

pub fn run_report(args: &ReportArgs) -> Result<Dashboard> {
    let table = load_table(&args.canonical)?;
    let _span = info_span!("report", movies = table.len()).entered();
    Ok(summarize(&table, args.top, args.bins))
}

pub fn run_search(args: &SearchArgs) -> Result<Vec<CanonicalRecord>> {
    let table = load_table(&args.canonical)?;
    let matches: Vec<CanonicalRecord> = search(&table, &args.genre, args.year)
        .into_iter()
        .cloned()
        .collect();
    for record in &matches {
        debug!(name = redact_value(&record.name), "search match");
    }
    info!(
        genre = %args.genre,
        year = args.year,
        matches = matches.len(),
        "search complete"
    );
    Ok(matches)
}

pub fn run_explode(args: &ExplodeArgs) -> Result<usize> {
    let table = load_table(&args.canonical)?;
    let rows = write_exploded(&table, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(rows, output = %args.output.display(), "exploded genres");
    Ok(rows)
}

pub fn run_schema(args: &SchemaArgs) -> Result<CleaningOptions> {
    let options = resolve_options(args.config.as_deref())?;
    check_config(&options.schema).context("schema configuration")?;
    Ok(options)
}

fn load_table(args: &CanonicalArgs) -> Result<CanonicalTable> {
    let options = resolve_options(args.config.as_deref())?;
    load_canonical(&args.path, &options.schema)
        .with_context(|| format!("load {}", args.path.display()))
}
