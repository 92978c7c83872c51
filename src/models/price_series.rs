use std::collections::BTreeMap;

use chrono::NaiveDate;
use derive_getters::Getters;
use rust_decimal::Decimal;

/// Unit prices of one fund keyed by trading date.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct PriceSeries {
    code: String,
    title: Option<String>,
    prices: BTreeMap<NaiveDate, Decimal>,
}

impl PriceSeries {
    pub fn new(code: impl Into<String>, title: Option<String>) -> Self {
        Self {
            code: code.into(),
            title,
            prices: BTreeMap::new(),
        }
    }

    pub fn from_prices<I>(code: impl Into<String>, prices: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Decimal)>,
    {
        Self {
            code: code.into(),
            title: None,
            prices: prices.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate, price: Decimal) {
        self.prices.insert(date, price);
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Price on `date`, or on the closest trading date before it. Never looks forward.
    pub fn price_on(&self, date: NaiveDate) -> Option<(NaiveDate, Decimal)> {
        self.prices
            .range(..=date)
            .next_back()
            .map(|(date, price)| (*date, *price))
    }

    /// Like [`PriceSeries::price_on`], but when nothing precedes `date` the
    /// earliest known price is used instead.
    pub fn price_on_or_earliest(&self, date: NaiveDate) -> Option<(NaiveDate, Decimal)> {
        self.price_on(date).or_else(|| self.earliest())
    }

    pub fn earliest(&self) -> Option<(NaiveDate, Decimal)> {
        self.prices
            .iter()
            .next()
            .map(|(date, price)| (*date, *price))
    }
}
