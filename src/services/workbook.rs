//! Workbook reader.
//!
//! Reads the TABLE sheet into a time series and the CHART sheet into a
//! metrics snapshot. Reading is strict: any malformed cell fails the whole
//! load, so a dashboard is never built from half a workbook.

use crate::error::{AppError, Result};
use crate::types::{MetricKey, MetricValue, MetricsSnapshot, TimeSeriesRow};
use calamine::{
    open_workbook, open_workbook_auto, Data, ExcelDateTime, Range, Reader, Sheets, Xlsx,
};
use chrono::{NaiveDateTime, NaiveTime, SubsecRound};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub const TABLE_SHEET: &str = "TABLE";
pub const CHART_SHEET: &str = "CHART";

/// Row 0 of TABLE is a banner, row 1 the header; data starts below.
pub const TABLE_HEADER_ROW: u32 = 1;
pub const TIME_COL: u32 = 0;
pub const LIVE_PNL_COL: u32 = 1;
pub const SPOT_COL: u32 = 2;

/// Format of every time string leaving the reader.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Last serial day Excel can represent (9999-12-31, 1900 date system).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Binds a metric to a fixed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBinding {
    pub key: MetricKey,
    pub sheet: &'static str,
    pub row: u32,
    pub col: u32,
}

impl CellBinding {
    const fn chart(key: MetricKey, col: u32) -> Self {
        Self {
            key,
            sheet: CHART_SHEET,
            row: 0,
            col,
        }
    }

    /// A1-style reference of the bound cell.
    pub fn cell_ref(&self) -> String {
        cell_ref(self.row, self.col)
    }
}

/// Where each metric lives: A1, B1, C1, D1, F1, H1 and K1 of CHART.
pub const METRICS_SCHEMA: [CellBinding; 7] = [
    CellBinding::chart(MetricKey::LivePct, 0),
    CellBinding::chart(MetricKey::MaxPct, 1),
    CellBinding::chart(MetricKey::MinPct, 2),
    CellBinding::chart(MetricKey::LivePnl, 3),
    CellBinding::chart(MetricKey::Spot, 5),
    CellBinding::chart(MetricKey::Margin, 7),
    CellBinding::chart(MetricKey::Time, 10),
];

/// Sheets loaded from a workbook, by name.
pub type SheetSet = HashMap<String, Range<Data>>;

/// Both views of the workbook, as read.
#[derive(Debug, Clone)]
pub struct WorkbookData {
    pub rows: Vec<TimeSeriesRow>,
    pub metrics: MetricsSnapshot,
}

static EMPTY: Data = Data::Empty;

/// Open the workbook, read both views and close it again.
pub fn load_workbook(path: &Path) -> Result<WorkbookData> {
    let sheets = load_sheets(path)?;
    let table = sheets
        .get(TABLE_SHEET)
        .ok_or_else(|| AppError::MissingSheet(TABLE_SHEET.to_string()))?;

    let rows = read_table(table)?;
    let metrics = read_metrics(&sheets)?;

    debug!(
        "Loaded {} rows and {} metrics from {}",
        rows.len(),
        metrics.len(),
        path.display()
    );

    Ok(WorkbookData { rows, metrics })
}

/// Load TABLE plus every sheet the metrics schema refers to.
pub fn load_sheets(path: &Path) -> Result<SheetSet> {
    if !path.is_file() {
        return Err(AppError::WorkbookNotFound(path.display().to_string()));
    }

    let mut workbook = open(path)?;
    let available = workbook.sheet_names();

    let mut wanted: Vec<&str> = vec![TABLE_SHEET];
    for binding in &METRICS_SCHEMA {
        if !wanted.contains(&binding.sheet) {
            wanted.push(binding.sheet);
        }
    }

    let mut sheets = SheetSet::new();
    for name in wanted {
        if !available.iter().any(|s| s == name) {
            return Err(AppError::MissingSheet(name.to_string()));
        }
        let range = workbook.worksheet_range(name)?;
        sheets.insert(name.to_string(), range);
    }

    Ok(sheets)
}

fn open(path: &Path) -> Result<Sheets<BufReader<File>>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    // Template workbooks are plain OOXML packages.
    match extension.as_deref() {
        Some("xltm") | Some("xltx") => {
            let workbook: Xlsx<_> = open_workbook(path)?;
            Ok(Sheets::Xlsx(workbook))
        }
        _ => Ok(open_workbook_auto(path)?),
    }
}

/// Read the TABLE sheet. Columns are bound by position, not header text.
pub fn read_table(range: &Range<Data>) -> Result<Vec<TimeSeriesRow>> {
    let (end_row, end_col) = match range.end() {
        Some(end) if !range.is_empty() => end,
        _ => return Err(missing_column(SPOT_COL)),
    };
    if end_col < SPOT_COL {
        return Err(missing_column(end_col + 1));
    }

    let first_row = range
        .start()
        .map(|(row, _)| row.max(TABLE_HEADER_ROW + 1))
        .unwrap_or(TABLE_HEADER_ROW + 1);

    let mut rows = Vec::new();
    for row in first_row..=end_row {
        let time = cell(range, row, TIME_COL);
        let live_pnl = cell(range, row, LIVE_PNL_COL);
        let spot = cell(range, row, SPOT_COL);

        if is_blank(time) && is_blank(live_pnl) && is_blank(spot) {
            continue;
        }

        let time = parse_time(time).ok_or_else(|| AppError::InvalidTime {
            sheet: TABLE_SHEET.to_string(),
            cell: cell_ref(row, TIME_COL),
            value: time.to_string(),
        })?;

        rows.push(TimeSeriesRow {
            time,
            live_pnl: table_number(live_pnl, row, LIVE_PNL_COL)?,
            spot: table_number(spot, row, SPOT_COL)?,
        });
    }

    Ok(rows)
}

/// Read every metric named in the schema.
pub fn read_metrics(sheets: &SheetSet) -> Result<MetricsSnapshot> {
    let mut metrics = MetricsSnapshot::new();

    for binding in &METRICS_SCHEMA {
        let range = sheets
            .get(binding.sheet)
            .ok_or_else(|| AppError::MissingSheet(binding.sheet.to_string()))?;

        let in_bounds = match range.end() {
            Some((end_row, end_col)) => {
                !range.is_empty() && binding.row <= end_row && binding.col <= end_col
            }
            None => false,
        };
        if !in_bounds {
            return Err(AppError::MissingCell {
                sheet: binding.sheet.to_string(),
                cell: binding.cell_ref(),
            });
        }

        let value = metric_value(cell(range, binding.row, binding.col));
        metrics.insert(binding.key, value);
    }

    Ok(metrics)
}

fn cell(range: &Range<Data>, row: u32, col: u32) -> &Data {
    range.get_value((row, col)).unwrap_or(&EMPTY)
}

fn is_blank(value: &Data) -> bool {
    match value {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn missing_column(col: u32) -> AppError {
    AppError::MissingColumn {
        sheet: TABLE_SHEET.to_string(),
        column: column_name(col),
    }
}

fn table_number(value: &Data, row: u32, col: u32) -> Result<f64> {
    parse_number(value).ok_or_else(|| AppError::InvalidNumber {
        sheet: TABLE_SHEET.to_string(),
        cell: cell_ref(row, col),
        value: value.to_string(),
    })
}

/// Parse a time cell into `HH:MM:SS`.
///
/// Text must match the format exactly; native time cells are converted from
/// their serial day fraction. Plain numbers are rejected.
pub fn parse_time(value: &Data) -> Option<String> {
    let time = match value {
        Data::String(s) => NaiveTime::parse_from_str(s, TIME_FORMAT).ok()?,
        Data::DateTime(dt) => cell_datetime(dt)?.time(),
        Data::DateTimeIso(s) => NaiveTime::parse_from_str(s, TIME_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|dt| dt.time())
            })?,
        _ => return None,
    };

    Some(time.format(TIME_FORMAT).to_string())
}

/// Numeric value of a cell; numeric text counts.
pub fn parse_number(value: &Data) -> Option<f64> {
    match value {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert a CHART cell. Never fails; anything without a number becomes text.
pub fn metric_value(value: &Data) -> MetricValue {
    match value {
        Data::Float(v) => MetricValue::Number(*v),
        Data::Int(v) => MetricValue::Number(*v as f64),
        Data::String(s) => MetricValue::Text(s.clone()),
        Data::Bool(b) => MetricValue::Bool(*b),
        Data::DateTime(dt) => match cell_datetime(dt) {
            Some(datetime) if dt.as_f64() < 1.0 => {
                MetricValue::Text(datetime.time().format(TIME_FORMAT).to_string())
            }
            Some(datetime) => {
                MetricValue::Text(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            None => MetricValue::Number(dt.as_f64()),
        },
        Data::Empty => MetricValue::Empty,
        other => MetricValue::Text(other.to_string()),
    }
}

/// Wall-clock datetime of a native date/time cell, rounded to the second.
///
/// calamine applies the workbook's date system (1900 or 1904).
pub fn cell_datetime(dt: &ExcelDateTime) -> Option<NaiveDateTime> {
    let serial = dt.as_f64();
    if !serial.is_finite() || !(0.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    dt.as_datetime().map(|datetime| datetime.round_subsecs(0))
}

/// Zero-based row/column to an A1 reference.
pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", column_name(col), row + 1)
}

/// Zero-based column index to spreadsheet letters (0 -> A, 26 -> AA).
pub fn column_name(col: u32) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}
