use std::{str::FromStr, sync::LazyLock};

use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use strum_macros::EnumString;

use super::ExportFormat;
use crate::{
    app::utils::{non_negative, parse_date, parse_turkish_decimal},
    error::{Result, TrackerError},
    models::{Transaction, TransactionType},
};

// <dd/mm/yyyy> <CODE>-<TITLE> <Alış|Satış> <BRANCH> <ACCOUNT> <SHARES> <PRICE> <CURRENCY> <AMOUNT>
const COLUMNS: usize = 9;
const DATE_FORMAT: &str = "%d/%m/%Y";

static FUND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<code>[A-Z0-9]+)\s*-\s*(?P<title>.*?)\s*$")
        .expect("valid fund name pattern")
});

#[derive(Clone, Copy, Debug, EnumString)]
enum TebAction {
    #[strum(serialize = "Alış")]
    Buy,
    #[strum(serialize = "Satış")]
    Sell,
}

impl From<TebAction> for TransactionType {
    fn from(action: TebAction) -> Self {
        match action {
            TebAction::Buy => TransactionType::Buy,
            TebAction::Sell => TransactionType::Sell,
        }
    }
}

/// Tab separated account statement exported by TEB.
#[derive(Clone, Copy, Debug, Default)]
pub struct Teb;

impl Teb {
    fn parse_record(&self, record: &StringRecord, line: usize) -> Result<Transaction> {
        if record.len() != COLUMNS {
            return Err(TrackerError::parse(
                line,
                format!("expected {} tab separated columns, found {}", COLUMNS, record.len()),
            ));
        }

        let date = parse_date(&record[0], DATE_FORMAT, line)?;

        let captures = FUND_NAME.captures(&record[1]).ok_or_else(|| {
            TrackerError::parse(line, format!("invalid fund name '{}'", &record[1]))
        })?;
        let code = captures["code"].to_string();
        let title = captures["title"].to_string();

        let action = TebAction::from_str(record[2].trim()).map_err(|_| {
            TrackerError::parse(line, format!("unknown transaction kind '{}'", &record[2]))
        })?;

        // The bank only trades whole shares.
        let quantity = parse_turkish_decimal(&record[5], "share count", line)?.trunc();
        let quantity = non_negative(quantity, "share count", line)?;
        let price = parse_turkish_decimal(&record[6], "share price", line)?;
        let price = non_negative(price, "share price", line)?;

        Ok(Transaction::new(
            line,
            action.into(),
            date,
            code,
            title,
            quantity,
            price,
        ))
    }
}

impl ExportFormat for Teb {
    fn name(&self) -> &'static str {
        "teb"
    }

    fn transactions(&self, raw_data: &str) -> Result<Vec<Transaction>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(raw_data.as_bytes());

        let mut transactions = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TrackerError::parse(row_idx + 1, e.to_string()))?;
            let line = record
                .position()
                .map(|position| position.line() as usize)
                .unwrap_or(row_idx + 1);

            transactions.push(self.parse_record(&record, line)?);
        }

        Ok(transactions)
    }
}
