//! Plain-text reports of conversions and saved history

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, Utc};

use crate::converter::format_result;
use crate::models::{HistoryEntry, NumberBase};
use crate::utils::strip_ansi_codes;

const HISTORY_TITLE: &str = "Conversion History";
const CONVERSION_TITLE: &str = "Number System Conversion";

fn local_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One display line for a saved entry: `255 (Decimal) → 0xFF (Hexadecimal)`
pub fn describe_entry(entry: &HistoryEntry) -> String {
    format!(
        "{} ({}) → {} ({})",
        strip_ansi_codes(&entry.input),
        entry.from_base,
        format_result(&strip_ansi_codes(&entry.result), entry.to_base),
        entry.to_base
    )
}

/// Numbered history report, newest first
pub fn render_history_report(entries: &[HistoryEntry]) -> String {
    let mut report = format!("{}\n{}\n\n", HISTORY_TITLE, "=".repeat(HISTORY_TITLE.len()));
    for (idx, entry) in entries.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", idx + 1, describe_entry(entry)));
        report.push_str(&format!("   {}\n", local_time(&entry.timestamp)));
    }
    report
}

/// Report for a single conversion; `formatted_result` is shown as given
pub fn render_conversion_report(
    input: &str,
    from: NumberBase,
    to: NumberBase,
    formatted_result: &str,
    at: &DateTime<Utc>,
) -> String {
    format!(
        "{}\n{}\n\nInput: {} ({})\nOutput: {} ({})\nDate: {}\n",
        CONVERSION_TITLE,
        "=".repeat(CONVERSION_TITLE.len()),
        input,
        from,
        formatted_result,
        to,
        local_time(at)
    )
}

/// Write the history report to `path`. An empty history is an error.
pub fn export_history(entries: &[HistoryEntry], path: &Path) -> Result<()> {
    if entries.is_empty() {
        bail!("No history to export");
    }
    fs::write(path, render_history_report(entries))
        .with_context(|| format!("Failed to write history report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn sample() -> Vec<HistoryEntry> {
        let ts = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        vec![
            HistoryEntry::with_timestamp(
                "255",
                NumberBase::Decimal,
                NumberBase::Hexadecimal,
                "FF",
                ts,
            ),
            HistoryEntry::with_timestamp("1010", NumberBase::Binary, NumberBase::Decimal, "10", ts),
        ]
    }

    #[test]
    fn test_describe_entry_adds_prefix() {
        let entries = sample();
        assert_eq!(describe_entry(&entries[0]), "255 (Decimal) → 0xFF (Hexadecimal)");
        assert_eq!(describe_entry(&entries[1]), "1010 (Binary) → 10 (Decimal)");
    }

    #[test]
    fn test_describe_entry_strips_escape_sequences() {
        let mut entry = sample().remove(0);
        entry.input = "\x1b[31m255\x1b[0m".to_string();
        assert_eq!(describe_entry(&entry), "255 (Decimal) → 0xFF (Hexadecimal)");
    }

    #[test]
    fn test_history_report_numbered() {
        let report = render_history_report(&sample());
        assert!(report.starts_with("Conversion History\n"));
        assert!(report.contains("1. 255 (Decimal) → 0xFF (Hexadecimal)"));
        assert!(report.contains("2. 1010 (Binary) → 10 (Decimal)"));
    }

    #[test]
    fn test_conversion_report() {
        let at = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        let report = render_conversion_report(
            "255",
            NumberBase::Decimal,
            NumberBase::Hexadecimal,
            "0xFF",
            &at,
        );
        assert!(report.contains("Input: 255 (Decimal)"));
        assert!(report.contains("Output: 0xFF (Hexadecimal)"));
        assert!(report.contains("Date: "));
    }

    #[test]
    fn test_export_history_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        export_history(&sample(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_history_report(&sample()));
    }

    #[test]
    fn test_export_empty_history_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        let err = export_history(&[], &path).unwrap_err();
        assert!(err.to_string().contains("No history to export"));
        assert!(!path.exists());
    }
}
