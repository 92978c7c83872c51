use chrono::{Days, NaiveDate};
use tracing::{info, instrument};

use crate::{
    app::calc::calculate_profits,
    config::BASE_CURRENCY,
    error::{Result, TrackerError},
    formats::{self, ExportFormat},
    models::{PortfolioTotal, Position, Profits, Report},
    services::{PriceSource, RateProvider},
};

#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Reads an export file (a leading `~` is expanded) in the named bank format,
    /// keeping only transactions dated on or before `as_of`.
    pub fn from_file(path: &str, format_name: &str, as_of: NaiveDate) -> Result<Self> {
        let format = formats::lookup(format_name)?;
        let path = shellexpand::tilde(path);
        let raw_data = std::fs::read_to_string(&*path)?;
        Self::from_export(&raw_data, format, as_of)
    }

    pub fn from_export(
        raw_data: &str,
        format: &dyn ExportFormat,
        as_of: NaiveDate,
    ) -> Result<Self> {
        let positions = format.parse(raw_data, as_of)?;
        info!(
            format = format.name(),
            funds = positions.len(),
            "Loaded positions"
        );
        Ok(Self::new(positions))
    }

    pub fn positions(&self) -> &Vec<Position> {
        &self.positions
    }

    /// Fetches prices for every position, one after another, and computes P/L
    /// as of `today` in `currency`.
    #[instrument(skip(self, prices, rates), fields(funds = self.positions.len()))]
    pub async fn report<P, R>(
        &self,
        prices: &P,
        rates: &R,
        currency: &str,
        today: NaiveDate,
        lookback_days: u64,
    ) -> Result<Report>
    where
        P: PriceSource + ?Sized,
        R: RateProvider + ?Sized,
    {
        let rate = rates.rate(BASE_CURRENCY, currency).await?;
        let window_start = today
            .checked_sub_days(Days::new(lookback_days))
            .ok_or_else(|| {
                TrackerError::Config(format!(
                    "a lookback of {} days from {} is out of range",
                    lookback_days, today
                ))
            })?;

        let mut profits: Vec<Profits> = Vec::with_capacity(self.positions.len());
        for position in &self.positions {
            info!(code = %position.code(), "Fetching the latest data from TEFAS");
            let start = window_start.max(*position.purchase_date()).min(today);
            let series = prices.fetch_series(position.code(), start, today).await?;
            profits.push(calculate_profits(position, &series, today, rate)?);
        }

        let total: PortfolioTotal = profits.iter().sum();
        Ok(Report::new(currency.to_string(), profits, total))
    }
}
