use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sitecal_types::{JobRecord, ReferenceData, StaffDirectory, StaffMember, format_calendar_date};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// UTF-8 byte-order mark prepended to every generated file
pub const BOM: &str = "\u{feff}";

pub const JOB_FIELDS: [&str; 10] = [
    "id",
    "siteName",
    "staffName",
    "date",
    "workContent",
    "contractor",
    "estimateNumber",
    "workPeriod",
    "notes",
    "createdAt",
];

pub const STAFF_FIELDS: [&str; 6] = ["id", "name", "position", "phone", "email", "color"];

/// Destination names for the FileMaker import, paired with the job field they carry
pub const FILEMAKER_FIELDS: [(&str, &str); 10] = [
    ("受注番号", "id"),
    ("現場名", "siteName"),
    ("作業日", "date"),
    ("担当者", "staffName"),
    ("作業内容", "workContent"),
    ("元請け", "contractor"),
    ("見積書番号", "estimateNumber"),
    ("工期", "workPeriod"),
    ("備考", "notes"),
    ("登録日時", "createdAt"),
];

pub const FILEMAKER_LABEL: &str = "FileMaker形式";

/// Flat record handed to the formatter; keeps its insertion order.
pub type ExportRecord = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportStyle {
    pub fn extension(self) -> &'static str {
        match self {
            ExportStyle::Csv => "csv",
            ExportStyle::Tsv => "tsv",
            ExportStyle::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportStyle::Csv => "text/csv;charset=utf-8",
            ExportStyle::Tsv => "text/tab-separated-values;charset=utf-8",
            ExportStyle::Json => "application/json;charset=utf-8",
        }
    }
}

impl FromStr for ExportStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportStyle::Csv),
            "tsv" | "excel" => Ok(ExportStyle::Tsv),
            "json" => Ok(ExportStyle::Json),
            _ => Err(format!("Unknown export style: {}", s)),
        }
    }
}

impl fmt::Display for ExportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDataset {
    Jobs,
    Staff,
}

impl ExportDataset {
    pub fn label(self) -> &'static str {
        match self {
            ExportDataset::Jobs => "案件データ",
            ExportDataset::Staff => "担当者データ",
        }
    }

    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ExportDataset::Jobs => &JOB_FIELDS,
            ExportDataset::Staff => &STAFF_FIELDS,
        }
    }
}

impl FromStr for ExportDataset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "jobs" | "projects" => Ok(ExportDataset::Jobs),
            "staff" => Ok(ExportDataset::Staff),
            _ => Err(format!("Unknown export dataset: {}", s)),
        }
    }
}

/// Quote-wrap a CSV value, doubling internal quotes, iff it contains a
/// comma, a quote or a newline.
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// Not `csv::Writer`: it also quotes on `\r` and ends with a record terminator.
fn to_csv(records: &[ExportRecord], fields: &[&str]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(fields.join(","));

    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|field| csv_escape(&cell_text(record.get(*field))))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Render records as text in the given style, BOM included.
///
/// TSV is the CSV text with every comma turned into a tab, so a value that
/// itself contains a comma is split across columns.
pub fn format(records: &[ExportRecord], fields: &[&str], style: ExportStyle) -> Result<String> {
    let body = match style {
        ExportStyle::Csv => to_csv(records, fields),
        ExportStyle::Tsv => to_csv(records, fields).replace(',', "\t"),
        ExportStyle::Json => serde_json::to_string_pretty(records)?,
    };

    Ok(format!("{}{}", BOM, body))
}

/// Flatten jobs into export rows in [`JOB_FIELDS`] order; period bounds are
/// written as calendar dates in `zone`.
pub fn job_rows(
    jobs: &[&JobRecord],
    staff: StaffDirectory<'_>,
    reference: &ReferenceData,
    include_notes: bool,
    zone: FixedOffset,
) -> Vec<ExportRecord> {
    jobs.iter()
        .map(|job| {
            let staff_name = staff
                .resolve(&job.selected_staff)
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(" / ");

            let date = job
                .work_start(zone)
                .map(format_calendar_date)
                .unwrap_or_default();
            let work_period = match job.work_period(zone) {
                Some((start, end)) => format!(
                    "{}〜{}",
                    format_calendar_date(start),
                    format_calendar_date(end)
                ),
                None => String::new(),
            };
            let notes = if include_notes {
                job.notes.clone().unwrap_or_default()
            } else {
                String::new()
            };

            let values = [
                job.id.to_string(),
                job.site_name.clone(),
                staff_name,
                date,
                job.work_content.clone(),
                reference.contractor_name(job.contractor_ref()).to_string(),
                reference.estimate_number(job.estimate_ref()).to_string(),
                work_period,
                notes,
                job.created_at.clone(),
            ];

            JOB_FIELDS
                .iter()
                .zip(values)
                .map(|(key, value)| (key.to_string(), Value::String(value)))
                .collect()
        })
        .collect()
}

/// Staff rows; absent optional fields stay absent and render empty.
pub fn staff_rows(members: &[StaffMember]) -> Result<Vec<ExportRecord>> {
    members
        .iter()
        .map(|member| -> Result<ExportRecord> {
            match serde_json::to_value(member)? {
                Value::Object(map) => Ok(map),
                _ => Ok(ExportRecord::new()),
            }
        })
        .collect()
}

/// `createdAt` as `YYYY/M/D H:MM:SS` in the given offset; empty if unparseable.
pub fn filemaker_timestamp(created_at: &str, offset: FixedOffset) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|ts| {
            ts.with_timezone(&offset)
                .format("%Y/%-m/%-d %-H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}

/// Replace internal job keys with the FileMaker destination names.
pub fn remap_filemaker(rows: &[ExportRecord], offset: FixedOffset) -> Vec<ExportRecord> {
    rows.iter()
        .map(|row| {
            FILEMAKER_FIELDS
                .iter()
                .map(|(dest, source)| {
                    let text = cell_text(row.get(*source));
                    let value = if *source == "createdAt" {
                        filemaker_timestamp(&text, offset)
                    } else {
                        text
                    };
                    (dest.to_string(), Value::String(value))
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub style: ExportStyle,
    /// Offset for reading stored timestamps and writing FileMaker ones
    pub zone: FixedOffset,
    /// Remap job rows to FileMaker names
    pub filemaker: bool,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

pub fn export_filename(
    dataset: ExportDataset,
    filemaker: bool,
    style: ExportStyle,
    today: NaiveDate,
) -> String {
    let date = format_calendar_date(today);
    let mut parts: Vec<&str> = vec![dataset.label()];
    if filemaker {
        parts.push(FILEMAKER_LABEL);
    }
    parts.push(&date);
    format!("{}.{}", parts.join("_"), style.extension())
}

/// Build one downloadable file from one dataset's rows.
///
/// The FileMaker remap only applies to jobs; staff rows always keep their
/// own field names.
pub fn export_dataset(
    dataset: ExportDataset,
    rows: &[ExportRecord],
    options: &ExportOptions,
) -> Result<ExportArtifact> {
    if rows.is_empty() {
        return Err(Error::EmptyExport(dataset));
    }

    let remap = options.filemaker && dataset == ExportDataset::Jobs;

    let content = if remap {
        let remapped = remap_filemaker(rows, options.zone);
        let fields: Vec<&str> = FILEMAKER_FIELDS.iter().map(|(dest, _)| *dest).collect();
        format(&remapped, &fields, options.style)?
    } else {
        format(rows, dataset.fields(), options.style)?
    };

    let filename = export_filename(dataset, remap, options.style, options.today);
    tracing::info!(
        dataset = dataset.label(),
        rows = rows.len(),
        filename = %filename,
        "export built"
    );

    Ok(ExportArtifact {
        filename,
        mime_type: options.style.mime_type().to_string(),
        content,
    })
}
