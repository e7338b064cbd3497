use crate::{
    cli::Cli,
    data::{parse_date, Error},
    read, write,
};
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fs::File;

pub(crate) fn run(args: &Cli) -> Result<(), anyhow::Error> {
    let cutoff = Local::now().date_naive() - Duration::days(args.keep_days);
    run_with_cutoff(args, cutoff)
}

/// The whole pipeline with the cutoff pinned, so tests can fix "today".
///
/// The new export is authoritative: it must be readable, non-empty and carry
/// the date column, and its header is the one written out. The old file is
/// best-effort history; if its header drifted we warn and keep going, since
/// the rows we take from it are the pre-cutoff ones the new export can't
/// provide anyway.
pub(crate) fn run_with_cutoff(args: &Cli, cutoff: NaiveDate) -> Result<(), anyhow::Error> {
    let new_rows = read::read_table(
        File::open(&args.new)
            .with_context(|| format!("can't open new CSV {}", args.new.display()))?,
    )?;
    let (header, new_body) = new_rows.split_first().ok_or(Error::EmptyNewTable)?;
    let date_idx = header
        .iter()
        .position(|name| *name == args.date_col)
        .ok_or_else(|| Error::DateColumnMissing(args.date_col.clone()))?;

    let old_rows = args
        .old
        .as_deref()
        .map(read::read_history)
        .unwrap_or_default();
    if let Some(old_header) = old_rows.first() {
        if old_header != header {
            eprintln!("WARNING: headers differ; using NEW header & NEW data for recent window");
        }
    }
    let old_body = old_rows.get(1..).unwrap_or(&[]);

    let body = merge_rows(header.len(), date_idx, cutoff, old_body, new_body);

    let out = File::create(&args.out)
        .with_context(|| format!("can't write output CSV {}", args.out.display()))?;
    write::write_table(out, header, &body)
}

/// The merge itself, on materialized rows. Old rows strictly before the
/// cutoff survive untouched, duplicate dates included; the recent window is
/// rebuilt from the new export with one row per date, the later occurrence
/// winning. The final sort is stable, so rows sharing a date keep their
/// relative input order.
pub(crate) fn merge_rows(
    header_len: usize,
    date_idx: usize,
    cutoff: NaiveDate,
    old_body: &[Vec<String>],
    new_body: &[Vec<String>],
) -> Vec<Vec<String>> {
    let mut recent: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for row in new_body {
        let Some(date) = usable_date(row, header_len, date_idx) else {
            continue;
        };
        if date >= cutoff {
            recent.insert(date, row.clone());
        }
    }

    let mut dated: Vec<(NaiveDate, Vec<String>)> = Vec::new();
    for row in old_body {
        let Some(date) = usable_date(row, header_len, date_idx) else {
            continue;
        };
        if date < cutoff {
            dated.push((date, row.clone()));
        }
    }
    // BTreeMap iterates ascending, so the recent window lands pre-sorted.
    dated.extend(recent);

    dated.sort_by(|a, b| a.0.cmp(&b.0));
    dated.into_iter().map(|(_, row)| row).collect()
}

/// Row validity: right field count and a parseable date. Anything else is
/// legacy drift and gets skipped quietly - callers never hear about it.
fn usable_date(row: &[String], header_len: usize, date_idx: usize) -> Option<NaiveDate> {
    if row.len() != header_len {
        return None;
    }
    parse_date(&row[date_idx])
}
