use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Workbook not found: {0}")]
    WorkbookNotFound(String),

    #[error("Missing sheet: {0}")]
    MissingSheet(String),

    #[error("Missing column {column} in sheet {sheet}")]
    MissingColumn { sheet: String, column: String },

    #[error("Missing cell {sheet}!{cell}")]
    MissingCell { sheet: String, cell: String },

    #[error("Invalid time {value:?} at {sheet}!{cell}, expected HH:MM:SS")]
    InvalidTime {
        sheet: String,
        cell: String,
        value: String,
    },

    #[error("Invalid number {value:?} at {sheet}!{cell}")]
    InvalidNumber {
        sheet: String,
        cell: String,
        value: String,
    },

    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),

    #[error(transparent)]
    Xlsx(#[from] calamine::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error came from reading the workbook rather than from the server itself.
    pub fn is_workbook_error(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::SerdeJson(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_workbook_error() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
