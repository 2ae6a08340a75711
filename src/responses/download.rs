use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Spreadsheet bytes served as a file download.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment(buffer, XLSX_CONTENT_TYPE, filename)
}

fn attachment(buffer: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .header("Cache-Control", "no-store")
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
