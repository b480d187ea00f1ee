//! Loading the supplier stock feed.
//!
//! The supplier publishes a zip archive holding the stock table as an Excel
//! workbook. This module reads the table from the workbook (legacy `.xls` or
//! `.xlsx`) or from a CSV export of it, either from a local file or from the
//! archive at the feed URL.

use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::{debug, error, info, warn};
use reqwest::Client;
use zip::ZipArchive;

use crate::error::{SyncError, SyncResult};
use crate::models::FeedRecord;

pub const DEFAULT_FEED_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";

/// Rows above the column header in the supplier's workbook.
pub const SHEET_HEADER_ROW: usize = 17;

const CODE_COLUMN: &str = "Код";
const QUANTITY_COLUMN: &str = "Количество";
const PRICE_COLUMN: &str = "Цена";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const XLS_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";
const XLSX_WORKBOOK_PART: &str = "xl/workbook.xml";

/// How the stock table is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    /// Column delimiter of CSV tables.
    pub delimiter: u8,
    /// Rows above the header row (report title, supplier address, ...).
    /// Defaults to 0 for CSV and [`SHEET_HEADER_ROW`] for workbooks.
    pub skip_rows: Option<usize>,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            skip_rows: None,
        }
    }
}

fn is_spreadsheet(name: &str) -> bool {
    let name = name.to_lowercase();
    name.ends_with(".xls") || name.ends_with(".xlsx")
}

/// Parses feed rows from CSV text.
///
/// Rows without a product code are dropped; they are section headings and
/// totals in the supplier's export.
pub fn parse_feed<R: Read>(reader: R, options: &FeedOptions) -> SyncResult<Vec<FeedRecord>> {
    let mut reader = BufReader::new(reader);
    let mut skipped = String::new();
    for _ in 0..options.skip_rows.unwrap_or(0) {
        skipped.clear();
        if reader.read_line(&mut skipped)? == 0 {
            break;
        }
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut blank = 0;
    for result in csv_reader.deserialize() {
        let record: FeedRecord = result?;
        if record.code.is_empty() {
            blank += 1;
            continue;
        }
        records.push(record);
    }

    if blank > 0 {
        debug!("Skipped {blank} feed rows without a product code");
    }
    info!("Parsed {} feed records", records.len());
    Ok(records)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn cell_at(row: &[Data], column: Option<usize>) -> String {
    column
        .and_then(|c| row.get(c))
        .map(cell_text)
        .unwrap_or_default()
}

/// Parses feed rows from the first sheet of an `.xls` or `.xlsx` workbook.
///
/// The header row sits below `skip_rows` rows, counted from the top of the
/// sheet. Numeric cells are rendered without a fractional part when they
/// hold whole numbers, so a quantity cell of `4` reads as `"4"`.
pub fn parse_workbook(bytes: Vec<u8>, options: &FeedOptions) -> SyncResult<Vec<FeedRecord>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SyncError::Feed("workbook has no sheets".to_string()))??;

    let header_row = options.skip_rows.unwrap_or(SHEET_HEADER_ROW);
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let missing_header = || SyncError::Feed(format!("sheet has no header at row {}", header_row + 1));

    let offset = header_row.checked_sub(first_row).ok_or_else(missing_header)?;
    let mut rows = range.rows().skip(offset);
    let header = rows.next().ok_or_else(missing_header)?;

    let column = |name: &str| header.iter().position(|cell| cell_text(cell) == name);
    let code_column = column(CODE_COLUMN).ok_or_else(|| {
        SyncError::Feed(format!(
            "header at row {} has no '{CODE_COLUMN}' column",
            header_row + 1
        ))
    })?;
    let quantity_column = column(QUANTITY_COLUMN);
    let price_column = column(PRICE_COLUMN);
    if quantity_column.is_none() || price_column.is_none() {
        warn!("Stock sheet lacks a quantity or price column");
    }

    let mut records = Vec::new();
    let mut blank = 0;
    for row in rows {
        let code = cell_at(row, Some(code_column));
        if code.is_empty() {
            blank += 1;
            continue;
        }
        records.push(FeedRecord {
            code,
            quantity: cell_at(row, quantity_column),
            price: cell_at(row, price_column),
        });
    }

    if blank > 0 {
        debug!("Skipped {blank} sheet rows without a product code");
    }
    info!("Parsed {} feed records from workbook", records.len());
    Ok(records)
}

/// Reads the feed from a local file: a workbook when the extension is `.xls`
/// or `.xlsx`, CSV otherwise.
pub fn load_feed_file<P: AsRef<Path>>(path: P, options: &FeedOptions) -> SyncResult<Vec<FeedRecord>> {
    let path = path.as_ref();
    info!("Loading feed from file: {path:?}");
    if is_spreadsheet(&path.to_string_lossy()) {
        return parse_workbook(std::fs::read(path)?, options);
    }
    let file = std::fs::File::open(path)?;
    parse_feed(file, options)
}

/// Parses a downloaded feed.
///
/// Accepts a zip archive holding a workbook or CSV table, a bare workbook,
/// or plain CSV text.
pub fn parse_feed_bytes(bytes: Vec<u8>, options: &FeedOptions) -> SyncResult<Vec<FeedRecord>> {
    if bytes.starts_with(XLS_MAGIC) {
        debug!("Feed is a legacy xls workbook");
        return parse_workbook(bytes, options);
    }
    if !bytes.starts_with(ZIP_MAGIC) {
        debug!("Feed is not a zip archive, parsing as CSV");
        return parse_feed(Cursor::new(bytes), options);
    }

    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    if archive.file_names().any(|name| name == XLSX_WORKBOOK_PART) {
        debug!("Feed is an xlsx workbook");
        return parse_workbook(archive.into_inner().into_inner(), options);
    }
    debug!("Feed archive holds {} entries", archive.len());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        if is_spreadsheet(&name) {
            info!("Reading feed workbook {name} from archive");
            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;
            return parse_workbook(content, options);
        }
        if name.to_lowercase().ends_with(".csv") {
            info!("Reading feed table {name} from archive");
            return parse_feed(entry, options);
        }
        debug!("Skipping archive entry {name}");
    }

    warn!("Feed archive holds no stock table");
    Err(SyncError::Feed(
        "archive contains no .xls, .xlsx or .csv stock table".to_string(),
    ))
}

/// Downloads the feed from `url`.
pub async fn download_feed(
    client: &Client,
    url: &str,
    options: &FeedOptions,
) -> SyncResult<Vec<FeedRecord>> {
    info!("Downloading feed from: {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        error!("Feed download failed with status {status}: {body}");
        return Err(SyncError::Status { status, body });
    }

    let bytes = response.bytes().await?;
    debug!("Downloaded {} bytes", bytes.len());
    parse_feed_bytes(bytes.to_vec(), options)
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
