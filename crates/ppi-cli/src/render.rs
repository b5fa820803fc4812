//! Terminal rendering of prediction results, batch previews and history.
//!
//! Formatting functions return plain strings; colour is applied separately
//! through [`Palette`] so output stays readable when piped.

use chrono::{Local, TimeZone};
use colored::{ColoredString, Colorize};
use ppi_core::batch::{BatchMetadata, BatchRow};
use ppi_core::history::HistoryEntry;
use ppi_core::prediction::PredictionResult;
use ppi_core::session::Theme;
use serde_json::Value;

/// Theme-dependent accent colours.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.blue().bold(),
            Theme::Dark => text.bright_cyan().bold(),
        }
    }

    pub fn success(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.green(),
            Theme::Dark => text.bright_green(),
        }
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.dimmed(),
            Theme::Dark => text.bright_black(),
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Epoch milliseconds as local wall-clock time.
pub fn format_local_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Scalars render as themselves; arrays and objects as compact JSON.
fn format_meta_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

pub fn prediction_result(result: &PredictionResult) -> String {
    let mut lines = vec![
        format!("Score:     {}", format_score(result.score)),
        format!("Label:     {}", result.label),
    ];
    if let Some(model) = &result.model {
        lines.push(format!("Model:     {}", model));
    }
    if let Some(threshold) = result.threshold {
        lines.push(format!("Threshold: {}", threshold));
    }
    if let Some(timestamp) = &result.timestamp {
        lines.push(format!("Timestamp: {}", timestamp));
    }
    if let Some(meta) = result.meta.as_ref().filter(|meta| !meta.is_empty()) {
        lines.push("Metadata:".to_string());
        for (key, value) in meta {
            lines.push(format!("  {}: {}", key, format_meta_value(value)));
        }
    }
    lines.join("\n")
}

/// Renders rows as an aligned table; `"no data"` when empty.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "no data".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![format_row(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        out.push(format_row(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

pub fn batch_rows(rows: &[BatchRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| vec![row.id1.clone(), row.id2.clone(), format_score(row.score)])
        .collect();
    table(&["Protein 1", "Protein 2", "Score"], &cells)
}

pub fn batch_json_results(results: &[PredictionResult]) -> String {
    let cells: Vec<Vec<String>> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            vec![
                (i + 1).to_string(),
                format_score(result.score),
                result.label.clone(),
            ]
        })
        .collect();
    table(&["#", "Score", "Label"], &cells)
}

/// Only the fields the server actually sent; `None` when there were none.
pub fn batch_metadata(metadata: &BatchMetadata) -> Option<String> {
    if metadata.is_empty() {
        return None;
    }
    let mut lines = Vec::new();
    if let Some(model) = &metadata.model {
        lines.push(format!("Model:       {}", model));
    }
    if let Some(threshold) = metadata.threshold {
        lines.push(format!("Threshold:   {}", threshold));
    }
    if let Some(timestamp) = &metadata.timestamp {
        lines.push(format!("Timestamp:   {}", timestamp));
    }
    if let Some(total) = metadata.total_pairs {
        lines.push(format!("Total pairs: {}", total));
    }
    if let Some(ok) = metadata.successful_predictions {
        lines.push(format!("Successful:  {}", ok));
    }
    if let Some(failed) = metadata.failed_predictions {
        lines.push(format!("Failed:      {}", failed));
    }
    Some(lines.join("\n"))
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No predictions in history yet.".to_string();
    }
    let cells: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                format_local_time(entry.timestamp),
                entry.input.id1.clone(),
                entry.input.id2.clone(),
                format_score(entry.result.score),
                entry.result.label.clone(),
                entry.id.clone(),
            ]
        })
        .collect();
    table(
        &["Time", "Protein 1", "Protein 2", "Score", "Label", "ID"],
        &cells,
    )
}
