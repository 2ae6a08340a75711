use crate::domain::{Listing, TABLE_COLUMNS};
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use crate::views::TableRecord;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

pub const EXPORT_FILENAME: &str = "car_listings.xlsx";

/// Writes the filtered view as one sheet, same columns and order as the table tab.
pub fn export_view_xlsx(rows: &[&Listing]) -> ResultResp {
    let buffer = build_workbook(rows)
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    xlsx_response(buffer, EXPORT_FILENAME)
}

fn build_workbook(rows: &[&Listing]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Listings")?;

    let bold = Format::new().set_bold();
    for (col, header) in TABLE_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, listing) in rows.iter().enumerate() {
        write_record(worksheet, (i + 1) as u32, &TableRecord::from(*listing))?;
    }

    workbook.save_to_buffer()
}

fn write_record(ws: &mut Worksheet, r: u32, record: &TableRecord) -> Result<(), XlsxError> {
    ws.write_string(r, 0, &record.state)?;
    ws.write_string(r, 1, &record.location)?;
    ws.write_string(r, 2, &record.make)?;
    ws.write_number(r, 3, record.predicted_price)?;
    ws.write_number(r, 4, record.price)?;
    ws.write_string(r, 5, record.time_posted.format("%Y-%m-%d").to_string())?;
    ws.write_number(r, 6, record.odometer)?;
    ws.write_number(r, 7, record.year as f64)?;
    Ok(())
}
