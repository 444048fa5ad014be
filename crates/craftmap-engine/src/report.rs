//! Output of computed progress records.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use craftmap_progress::{ProgressSummary, RecipeProgress, RecipeType};
use tracing::info;

/// Writes records as a JSON array.
pub fn write_records<W: Write>(
    records: &[RecipeProgress],
    writer: W,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, records)
    } else {
        serde_json::to_writer(writer, records)
    }
}

/// Writes records to `path`, or to stdout when no path is given.
pub fn emit_records(records: &[RecipeProgress], path: Option<&Path>, pretty: bool) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(fs::File::create(path)?);
            write_records(records, &mut writer, pretty)?;
            writer.flush()?;
            info!("Wrote {} records to {}", records.len(), path.display());
        },
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_records(records, &mut writer, pretty)?;
            writeln!(writer)?;
        },
    }
    Ok(())
}

/// One summary line per category, plus a total line.
#[must_use]
pub fn summary_lines(summary: &ProgressSummary) -> Vec<String> {
    let mut lines: Vec<String> = RecipeType::all()
        .iter()
        .filter_map(|&ty| summary.by_type.get(&ty).map(|counts| (ty, counts)))
        .map(|(ty, counts)| {
            format!(
                "{:<20} {:>5} total {:>5} unlocked {:>5} craftable",
                ty.as_str(),
                counts.total,
                counts.unlocked,
                counts.craftable
            )
        })
        .collect();

    let overall = &summary.overall;
    lines.push(format!(
        "{:<20} {:>5} total {:>5} unlocked {:>5} craftable ({:.1}% unlocked)",
        "all",
        overall.total,
        overall.unlocked,
        overall.craftable,
        overall.unlocked_ratio() * 100.0
    ));
    lines
}

/// Logs the per-category summary of `records`.
pub fn log_summary(records: &[RecipeProgress]) {
    let summary = ProgressSummary::from_records(records);
    for line in summary_lines(&summary) {
        info!("{line}");
    }
}
