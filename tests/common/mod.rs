//! Workbook fixtures shared by the integration tests.

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Number(f64),
    Text(&'static str),
    Bool(bool),
}

/// A typical live sheet: ticks out of order and one duplicate time.
pub fn sample_rows() -> Vec<(&'static str, f64, f64)> {
    vec![
        ("09:15:00", -1250.5, 22450.0),
        ("09:15:05", -800.0, 22452.5),
        ("09:15:03", 120.25, 22449.0),
        ("09:15:05", 640.0, 22455.75),
    ]
}

/// CHART row 0 as the live sheet lays it out (A1..K1).
pub fn sample_metrics() -> Vec<(u16, Cell)> {
    vec![
        (0, Cell::Number(0.0005)),
        (1, Cell::Number(0.0125)),
        (2, Cell::Number(-0.00001)),
        (3, Cell::Number(640.0)),
        (4, Cell::Text("spot")),
        (5, Cell::Number(22455.75)),
        (6, Cell::Text("margin")),
        (7, Cell::Number(1234567.891)),
        (9, Cell::Text("time")),
        (10, Cell::Text("09:15:05")),
    ]
}

/// Write a workbook with a TABLE sheet and, if given, a CHART sheet.
pub fn write_workbook(
    path: &Path,
    rows: &[(&str, f64, f64)],
    metrics: Option<&[(u16, Cell)]>,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let table = workbook.add_worksheet();
    table.set_name("TABLE")?;
    table.write_string(0, 0, "LIVE P&L LOG")?;
    table.write_string(1, 0, "Time")?;
    table.write_string(1, 1, "PnL")?;
    table.write_string(1, 2, "Nifty")?;
    for (i, (time, pnl, spot)) in rows.iter().enumerate() {
        let row = 2 + i as u32;
        table.write_string(row, 0, *time)?;
        table.write_number(row, 1, *pnl)?;
        table.write_number(row, 2, *spot)?;
    }

    if let Some(metrics) = metrics {
        let chart = workbook.add_worksheet();
        chart.set_name("CHART")?;
        for (col, cell) in metrics {
            match cell {
                Cell::Number(v) => chart.write_number(0, *col, *v)?,
                Cell::Text(s) => chart.write_string(0, *col, *s)?,
                Cell::Bool(b) => chart.write_boolean(0, *col, *b)?,
            };
        }
    }

    workbook.save(path)
}

/// Write the sample workbook and return its path.
pub fn sample_workbook(dir: &Path, file_name: &str) -> std::path::PathBuf {
    let path = dir.join(file_name);
    write_workbook(&path, &sample_rows(), Some(&sample_metrics())).unwrap();
    path
}
