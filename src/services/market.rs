use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    api::{frank, tefas},
    error::{Result, TrackerError},
    models::PriceSeries,
};

/// Source of historical unit prices for a fund.
#[async_trait]
pub trait PriceSource {
    async fn fetch_series(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;
}

/// Source of a single point-in-time exchange rate.
#[async_trait]
pub trait RateProvider {
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal>;
}

#[derive(Clone, Debug)]
pub struct TefasPriceSource {
    client: Client,
    base_url: String,
}

impl TefasPriceSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PriceSource for TefasPriceSource {
    async fn fetch_series(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let rows = tefas::get_price_history(code, start, end, &self.base_url, &self.client)
            .await
            .map_err(|e| TrackerError::data_unavailable(code, format!("{:#}", e)))?;

        let title = rows.first().map(|row| row.title().trim().to_string());
        let mut series = PriceSeries::new(code, title);

        for row in &rows {
            match row.trading_date() {
                Ok(date) => series.insert(date, *row.price()),
                Err(e) => warn!(%code, error = %e, "Skipping TEFAS row"),
            }
        }

        if series.is_empty() {
            return Err(TrackerError::data_unavailable(
                code,
                "TEFAS rows carried no usable dates",
            ));
        }

        debug!(%code, prices = series.len(), "Fetched price series");
        Ok(series)
    }
}

#[derive(Clone, Debug)]
pub struct FrankfurterRates {
    client: Client,
    base_url: String,
}

impl FrankfurterRates {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RateProvider for FrankfurterRates {
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal> {
        if from.eq_ignore_ascii_case(to) {
            return Ok(Decimal::ONE);
        }

        let unavailable = |reason: String| TrackerError::ConversionUnavailable {
            from: from.to_string(),
            to: to.to_string(),
            reason,
        };

        let forex = frank::get_latest_rate(from, to, &self.base_url, &self.client)
            .await
            .map_err(|e| unavailable(format!("{:#}", e)))?;

        let rate = forex.rates().get(to).copied().ok_or_else(|| {
            unavailable(format!("rate missing from response dated {}", forex.date()))
        })?;

        debug!(%from, %to, %rate, date = %forex.date(), "Fetched exchange rate");
        Ok(rate)
    }
}
