//! Plain-text timeline output and human-readable summary

use crate::stats::TimelineSummary;
use std::io::{self, Write};

/// Format one timestamp with six decimal places (`%f` style)
#[inline]
pub fn format_time(t: f64) -> String {
    format!("{:.6}", t)
}

/// Serialize timestamps as a single comma-separated line (no newline)
pub fn serialize(times: &[f64]) -> String {
    times
        .iter()
        .map(|&t| format_time(t))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write timestamps as one comma-separated line
pub fn write_csv<W: Write>(out: &mut W, times: &[f64]) -> io::Result<()> {
    writeln!(out, "{}", serialize(times))
}

/// Write one timestamp per line
pub fn write_lines<W: Write>(out: &mut W, times: &[f64]) -> io::Result<()> {
    for &t in times {
        writeln!(out, "{}", format_time(t))?;
    }
    Ok(())
}

/// Print a timeline summary
///
/// Meant for stderr so the payload on stdout stays machine-readable.
pub fn print_summary<W: Write>(out: &mut W, summary: &TimelineSummary) -> io::Result<()> {
    writeln!(out, "Timeline Summary:")?;
    writeln!(out, "  Distribution: {}", summary.distribution)?;
    writeln!(
        out,
        "  Arrivals:     {} (requested {})",
        summary.count, summary.requested
    )?;
    writeln!(
        out,
        "  Window:       [{}, {}]",
        format_time(summary.window_start),
        format_time(summary.window_end)
    )?;
    writeln!(
        out,
        "  First/last:   {} / {}",
        format_time(summary.first),
        format_time(summary.last)
    )?;
    writeln!(
        out,
        "  Range:        {} .. {}",
        format_time(summary.min),
        format_time(summary.max)
    )?;
    writeln!(out, "  Mean gap:     {:.6}s", summary.mean_gap)?;
    if let Some(gaps) = &summary.gap_percentiles {
        writeln!(
            out,
            "  Gap p50/p90/p99: {:.6}s / {:.6}s / {:.6}s",
            gaps.p50, gaps.p90, gaps.p99
        )?;
    }
    writeln!(
        out,
        "  Peak rate:    {} arrivals in second {}",
        summary.peak_per_second, summary.peak_second
    )?;
    Ok(())
}
