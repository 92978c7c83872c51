use csv::{ReaderBuilder, StringRecord, Trim};

use super::ExportFormat;
use crate::{
    app::utils::{non_negative, parse_date, parse_decimal},
    error::{Result, TrackerError},
    models::{Transaction, TransactionType},
};

const HEADER: [&str; 6] = ["date", "kind", "code", "title", "shares", "price"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bank agnostic CSV with a `date,kind,code,title,shares,price` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericCsv;

impl GenericCsv {
    fn parse_record(&self, record: &StringRecord, line: usize) -> Result<Transaction> {
        if record.len() < HEADER.len() {
            return Err(TrackerError::parse(
                line,
                format!(
                    "expected at least {} columns, found {}",
                    HEADER.len(),
                    record.len()
                ),
            ));
        }

        let date = parse_date(&record[0], DATE_FORMAT, line)?;
        let transaction_type = record[1].parse::<TransactionType>().map_err(|_| {
            TrackerError::parse(line, format!("unknown transaction kind '{}'", &record[1]))
        })?;

        let code = record[2].to_uppercase();
        if code.is_empty() {
            return Err(TrackerError::parse(line, "missing fund code"));
        }

        let quantity = parse_decimal(&record[4], "share count", line)?;
        let quantity = non_negative(quantity, "share count", line)?;
        let price = parse_decimal(&record[5], "share price", line)?;
        let price = non_negative(price, "share price", line)?;

        Ok(Transaction::new(
            line,
            transaction_type,
            date,
            code,
            record[3].to_string(),
            quantity,
            price,
        ))
    }
}

impl ExportFormat for GenericCsv {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn transactions(&self, raw_data: &str) -> Result<Vec<Transaction>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(raw_data.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| TrackerError::parse(1, e.to_string()))?
            .clone();
        let columns: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        if columns.len() < HEADER.len() || columns[..HEADER.len()] != HEADER {
            return Err(TrackerError::parse(
                1,
                format!("expected header '{}'", HEADER.join(",")),
            ));
        }

        let mut transactions = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TrackerError::parse(row_idx + 2, e.to_string()))?;
            let line = record
                .position()
                .map(|position| position.line() as usize)
                .unwrap_or(row_idx + 2);

            transactions.push(self.parse_record(&record, line)?);
        }

        Ok(transactions)
    }
}
