use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct TefasHistoryDto {
    #[serde(default)]
    data: Vec<TefasPriceDto>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct TefasPriceDto {
    /// Milliseconds since the epoch, sent as a string.
    #[serde(rename = "TARIH")]
    date: String,
    #[serde(rename = "FONKODU")]
    code: String,
    #[serde(rename = "FONUNVAN")]
    title: String,
    #[serde(rename = "FIYAT")]
    price: Decimal,
}

impl TefasPriceDto {
    pub fn trading_date(&self) -> Result<NaiveDate> {
        let millis = self
            .date
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Failed to parse TEFAS date '{}'", self.date))?;
        DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.date_naive())
            .with_context(|| format!("TEFAS date '{}' out of range", self.date))
    }
}
