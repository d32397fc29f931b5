//! Report assembly and channel loading.
//!
//! The report gathers a summary row per channel from both panels plus the
//! snapshot images taken during the session, and writes them as CSV. The
//! layouting of a printable document is a collaborator's job; everything
//! here is plain data.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::data::monitor::{Monitor, PanelId};
use crate::data::stats::ChannelStats;

/// One line of the report's statistics table.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub label: String,
    pub panel: &'static str,
    pub stats: ChannelStats,
}

/// Collect a stats row for every channel of both panels, left panel first.
pub fn report_rows(monitor: &Monitor) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for id in PanelId::BOTH {
        let panel = monitor.panel(id);
        for channel in panel.channels.iter() {
            rows.push(ReportRow {
                label: channel.label.clone(),
                panel: id.label(),
                stats: ChannelStats::compute(channel, panel.sample_rate()),
            });
        }
    }
    rows
}

/// Write the report: a title block, the statistics table, and the list of
/// snapshot images taken since the last report.
pub fn write_report_csv<W: Write>(
    mut w: W,
    generated_at: DateTime<Local>,
    rows: &[ReportRow],
    snapshots: &[PathBuf],
) -> io::Result<()> {
    writeln!(w, "Multi-Port Multi-Channel Signal Viewer Report")?;
    writeln!(w, "date,{}", generated_at.format("%Y-%m-%d"))?;
    writeln!(w, "time,{}", generated_at.format("%H:%M:%S"))?;
    writeln!(w)?;
    writeln!(w, "signal,panel,mean,std,duration_s,min,max")?;
    for row in rows {
        writeln!(
            w,
            "{},{},{:.6},{:.6},{:.3},{:.6},{:.6}",
            row.label,
            row.panel,
            row.stats.mean,
            row.stats.std,
            row.stats.duration_s,
            row.stats.min,
            row.stats.max,
        )?;
    }
    if !snapshots.is_empty() {
        writeln!(w)?;
        writeln!(w, "snapshots")?;
        for path in snapshots {
            writeln!(w, "{}", path.display())?;
        }
    }
    Ok(())
}

/// Read the `Voltage` column of a CSV recording (header row, one value per
/// line). Falls back to the first column when no `Voltage` header is found;
/// blank or unparsable cells read as 0.0 rather than aborting the load.
pub fn load_voltage_csv<P: AsRef<Path>>(path: P) -> io::Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)?;
    let mut lines = text.lines();
    let header = match lines.next() {
        Some(h) => h,
        None => return Ok(Vec::new()),
    };
    let column = header
        .split(',')
        .position(|name| name.trim().eq_ignore_ascii_case("voltage"))
        .unwrap_or(0);

    let mut samples = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cell = line.split(',').nth(column).unwrap_or("");
        samples.push(cell.trim().parse::<f64>().unwrap_or(0.0));
    }
    Ok(samples)
}
