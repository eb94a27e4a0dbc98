//! Spreadsheet export of aggregated tasks.
//!
//! Turns the output of a range query into a downloadable document. Each task
//! becomes one row with a derived duration and, for the known statuses, a
//! colored Status cell. Neither value is ever written back to storage.
//!
//! ## Formats
//!
//! - **Excel**: `.xlsx` workbook with a single "Tasks" sheet, bold header,
//!   fixed column widths and status fills
//! - **CSV**: the same columns as plain text
//! - **JSON**: the derived rows as a pretty-printed array
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskify::libs::export::{ExportFormat, Exporter};
//! use chrono::NaiveDate;
//!
//! let exporter = Exporter::new("Alice");
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let bytes = exporter.render(ExportFormat::Excel, &[])?;
//! std::fs::write(exporter.file_name(ExportFormat::Excel, today), bytes)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::task_duration;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output formats supported by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Microsoft Excel workbook with status colors.
    Excel,
    /// Comma-separated values, no colors.
    Csv,
    /// Pretty-printed JSON array of export rows.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Fill color of the Status cell for the recognised statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Yellow,
    Blue,
    Red,
}

impl StatusColor {
    /// Maps a status label to its color, ignoring case.
    pub fn from_status(status: Option<&str>) -> Option<Self> {
        match status?.to_lowercase().as_str() {
            "completed" => Some(StatusColor::Green),
            "inprogress" => Some(StatusColor::Yellow),
            "pending" => Some(StatusColor::Blue),
            "blocked" => Some(StatusColor::Red),
            _ => None,
        }
    }

    pub fn rgb(&self) -> u32 {
        match self {
            StatusColor::Green => 0x2ECC71,
            StatusColor::Yellow => 0xF1C40F,
            StatusColor::Blue => 0x3498DB,
            StatusColor::Red => 0xE74C3C,
        }
    }

    /// Opaque ARGB hex, e.g. `FF2ECC71`.
    pub fn argb(&self) -> String {
        format!("FF{:06X}", self.rgb())
    }
}

/// Column headers and widths, in output order.
pub const COLUMNS: [(&str, f64); 8] = [
    ("Client Name", 20.0),
    ("Project Name", 20.0),
    ("Date", 15.0),
    ("Start Time", 15.0),
    ("End Time", 15.0),
    ("Duration", 12.0),
    ("Description", 40.0),
    ("Status", 15.0),
];

const STATUS_COLUMN: u16 = 7;

/// One exported task with its derived fields resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub client_name: String,
    pub project_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_color: Option<StatusColor>,
}

impl ExportRow {
    pub fn from_task(task: &Task) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        ExportRow {
            client_name: text(&task.client_name),
            project_name: text(&task.project_name),
            date: text(&task.date),
            start_time: text(&task.start_time),
            end_time: text(&task.end_time),
            duration: task_duration(task.start_time.as_deref(), task.end_time.as_deref()),
            description: text(&task.description),
            status: text(&task.status),
            status_color: StatusColor::from_status(task.status.as_deref()),
        }
    }

    fn cells(&self) -> [&str; 8] {
        [
            &self.client_name,
            &self.project_name,
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.duration,
            &self.description,
            &self.status,
        ]
    }
}

/// Renders task lists on behalf of one operator.
///
/// The operator name only feeds the generated file name; it is captured once
/// by the caller (usually at server start) and passed in here.
pub struct Exporter {
    operator_name: String,
}

impl Exporter {
    pub fn new(operator_name: &str) -> Self {
        Self {
            operator_name: operator_name.to_string(),
        }
    }

    /// Builds `{operator}_{DD}_{MM}_{YYYY}.{ext}` for the export date.
    ///
    /// Characters that are not allowed in file names or in a quoted
    /// `Content-Disposition` value are replaced with `_`.
    pub fn file_name(&self, format: ExportFormat, date: NaiveDate) -> String {
        let operator: String = self
            .operator_name
            .chars()
            .map(|c| if c.is_control() || "/\\:*?\"<>|".contains(c) { '_' } else { c })
            .collect();
        format!("{}_{}.{}", operator, date.format("%d_%m_%Y"), format.extension())
    }

    pub fn rows(&self, tasks: &[Task]) -> Vec<ExportRow> {
        tasks.iter().map(ExportRow::from_task).collect()
    }

    pub fn render(&self, format: ExportFormat, tasks: &[Task]) -> Result<Vec<u8>> {
        let rows = self.rows(tasks);
        match format {
            ExportFormat::Excel => self.render_excel(&rows),
            ExportFormat::Csv => self.render_csv(&rows),
            ExportFormat::Json => Ok(serde_json::to_vec_pretty(&rows)?),
        }
    }

    /// Renders `tasks` and writes the result to `path`.
    pub fn save(&self, format: ExportFormat, tasks: &[Task], path: &Path) -> Result<()> {
        let bytes = self.render(format, tasks)?;
        fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), rows = tasks.len(), "export written");
        Ok(())
    }

    fn render_excel(&self, rows: &[ExportRow]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Tasks")?;

        let header_format = Format::new().set_bold();
        for (col, (header, width)) in COLUMNS.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, *width)?;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let row_num = i as u32 + 1;
            for (col, value) in row.cells().iter().enumerate() {
                let col = col as u16;
                match row.status_color {
                    Some(color) if col == STATUS_COLUMN => {
                        let fill = Format::new().set_background_color(Color::RGB(color.rgb()));
                        worksheet.write_string_with_format(row_num, col, *value, &fill)?;
                    }
                    _ => {
                        worksheet.write_string(row_num, col, *value)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn render_csv(&self, rows: &[ExportRow]) -> Result<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(COLUMNS.iter().map(|(header, _)| *header))?;
        for row in rows {
            wtr.write_record(row.cells())?;
        }
        Ok(wtr.into_inner()?)
    }
}
