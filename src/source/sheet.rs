//! Google Sheets client for the live order worksheet.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::SourceError;
use crate::orders::{Order, OrderStatus};

/// Client for the Google Sheets v4 values API.
#[derive(Debug, Clone)]
pub struct SheetClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Sheets API base URL.
    base_url: String,
    /// Spreadsheet ID.
    sheet_id: String,
    /// Optional API key appended to requests.
    api_key: Option<String>,
    /// Worksheet (tab) holding the order rows.
    worksheet: String,
}

/// Value range response from the Sheets API.
#[derive(Debug, Clone, Deserialize)]
struct ValueRange {
    /// Row-major cell values. Absent when the worksheet is empty.
    values: Option<Vec<Vec<String>>>,
}

/// Column positions resolved from the worksheet header row.
#[derive(Debug, Default)]
struct ColumnMap {
    date: Option<usize>,
    booth: Option<usize>,
    exhibitor: Option<usize>,
    item: Option<usize>,
    description: Option<usize>,
    color: Option<usize>,
    quantity: Option<usize>,
    status: Option<usize>,
    comments: Option<usize>,
    section: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from the header row.
    ///
    /// Header matching trims whitespace but is otherwise exact; only the
    /// booth and exhibitor columns are required.
    fn from_header(header: &[String]) -> Result<Self, SourceError> {
        let mut map = Self::default();

        for (idx, cell) in header.iter().enumerate() {
            match cell.trim() {
                "Date" => map.date = Some(idx),
                "Booth #" => map.booth = Some(idx),
                "Exhibitor Name" => map.exhibitor = Some(idx),
                "Item" => map.item = Some(idx),
                "Description" => map.description = Some(idx),
                "Color" => map.color = Some(idx),
                "Quantity" => map.quantity = Some(idx),
                "Status" => map.status = Some(idx),
                "Comments" => map.comments = Some(idx),
                "Section" => map.section = Some(idx),
                _ => {}
            }
        }

        if map.booth.is_none() {
            return Err(SourceError::MissingColumn {
                name: "Booth #".to_string(),
            });
        }
        if map.exhibitor.is_none() {
            return Err(SourceError::MissingColumn {
                name: "Exhibitor Name".to_string(),
            });
        }

        Ok(map)
    }

    /// Get a display cell from a row, empty string when absent.
    fn cell<'a>(&self, row: &'a [String], idx: Option<usize>) -> &'a str {
        idx.and_then(|i| row.get(i))
            .map(|s| s.trim())
            .unwrap_or("")
    }
}

impl SheetClient {
    /// Create a new sheet client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.sheets_api_url.clone(),
            sheet_id: config.sheet_id.clone().unwrap_or_default(),
            api_key: config.sheets_api_key.clone(),
            worksheet: config.orders_worksheet.clone(),
        }
    }

    /// Fetch and parse the full order sequence from the worksheet.
    #[instrument(skip(self), fields(worksheet = %self.worksheet))]
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, SourceError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.sheet_id, self.worksheet
        );

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SourceError::FetchFailed {
                worksheet: self.worksheet.clone(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| SourceError::ParseError(format!("invalid value range: {}", e)))?;

        let rows = range.values.ok_or_else(|| SourceError::EmptyWorksheet {
            worksheet: self.worksheet.clone(),
        })?;

        let orders = parse_rows(&rows)?;
        debug!(count = orders.len(), "parsed orders from worksheet");

        Ok(orders)
    }
}

/// Parse worksheet rows (header first) into orders.
///
/// Rows with neither booth nor exhibitor are skipped; all display fields
/// coerce to empty strings when their column is missing or short.
pub fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<Order>, SourceError> {
    let Some((header, data_rows)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let columns = ColumnMap::from_header(header)?;
    let mut orders = Vec::with_capacity(data_rows.len());

    for row in data_rows {
        let booth = columns.cell(row, columns.booth);
        let exhibitor = columns.cell(row, columns.exhibitor);
        if booth.is_empty() && exhibitor.is_empty() {
            continue;
        }

        let date = columns.cell(row, columns.date);
        let quantity = columns
            .cell(row, columns.quantity)
            .parse::<u32>()
            .ok()
            .filter(|&q| q >= 1)
            .unwrap_or(1);

        orders.push(Order {
            id: derive_order_id(date, booth),
            booth_number: booth.to_string(),
            exhibitor_name: exhibitor.to_string(),
            item: columns.cell(row, columns.item).to_string(),
            description: columns.cell(row, columns.description).to_string(),
            color: columns.cell(row, columns.color).to_string(),
            quantity,
            status: OrderStatus::from_sheet_label(columns.cell(row, columns.status)),
            order_date: date.to_string(),
            comments: columns.cell(row, columns.comments).to_string(),
            section: columns.cell(row, columns.section).to_string(),
        });
    }

    Ok(orders)
}

/// Derive an order ID from the date and booth cells.
fn derive_order_id(date: &str, booth: &str) -> String {
    let compact: String = date.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("ORD-{}-{}", compact, booth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> Vec<String> {
        [
            "Date",
            "Booth #",
            "Exhibitor Name",
            "Item",
            "Color",
            "Quantity",
            "Status",
            "Comments",
            "Section",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_a_complete_row() {
        let rows = vec![
            header(),
            row(&[
                "June 14, 2025",
                "A-245",
                "TechFlow Innovations",
                "Booth Package",
                "White",
                "2",
                "Out for delivery",
                "Rush",
                "Section A",
            ]),
        ];

        let orders = parse_rows(&rows).unwrap();
        assert_eq!(orders.len(), 1);

        let order = &orders[0];
        assert_eq!(order.id, "ORD-June142025-A-245");
        assert_eq!(order.booth_number, "A-245");
        assert_eq!(order.exhibitor_name, "TechFlow Innovations");
        assert_eq!(order.quantity, 2);
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.order_date, "June 14, 2025");
    }

    #[test]
    fn short_rows_coerce_missing_cells_to_empty() {
        let rows = vec![header(), row(&["June 14, 2025", "B-156", "GreenWave"])];

        let orders = parse_rows(&rows).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].item, "");
        assert_eq!(orders[0].comments, "");
        assert_eq!(orders[0].status, OrderStatus::InProcess);
    }

    #[test]
    fn unparseable_quantity_defaults_to_one() {
        let rows = vec![
            header(),
            row(&["d", "A-1", "Acme", "Item", "Red", "lots", "In Process"]),
            row(&["d", "A-2", "Acme", "Item", "Red", "0", "In Process"]),
            row(&["d", "A-3", "Acme", "Item", "Red", "", "In Process"]),
        ];

        let orders = parse_rows(&rows).unwrap();
        assert!(orders.iter().all(|o| o.quantity == 1));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![
            header(),
            row(&["", "", "", "", "", "", "", "", ""]),
            row(&["June 12, 2025", "B-156", "GreenWave Energy"]),
        ];

        let orders = parse_rows(&rows).unwrap();
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn raw_status_labels_are_normalized() {
        let rows = vec![
            header(),
            row(&["d", "A-1", "Acme", "", "", "1", "Received"]),
            row(&["d", "A-2", "Acme", "", "", "1", "In route from warehouse"]),
            row(&["d", "A-3", "Acme", "", "", "1", "something odd"]),
        ];

        let orders = parse_rows(&rows).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[1].status, OrderStatus::InRoute);
        assert_eq!(orders[2].status, OrderStatus::InProcess);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let rows = vec![row(&["Date", "Item"]), row(&["June", "Chair"])];

        let err = parse_rows(&rows).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn { .. }));
    }

    #[test]
    fn header_only_worksheet_yields_no_orders() {
        let rows = vec![header()];
        assert!(parse_rows(&rows).unwrap().is_empty());
    }
}
