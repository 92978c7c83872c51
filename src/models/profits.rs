use std::iter::Sum;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Worth and P/L of one position, in the report currency.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct Profits {
    code: String,
    title: String,
    purchase_date: NaiveDate,
    quantity: Decimal,
    total_worth: Decimal,
    pl_today: Decimal,
    pl_week: Decimal,
    pl_all_time: Decimal,
}

impl Profits {
    /// Applies one exchange rate to the worth and every delta.
    pub fn converted(&self, rate: Decimal) -> Self {
        Self {
            total_worth: self.total_worth * rate,
            pl_today: self.pl_today * rate,
            pl_week: self.pl_week * rate,
            pl_all_time: self.pl_all_time * rate,
            ..self.clone()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Getters, new, PartialEq)]
pub struct PortfolioTotal {
    total_worth: Decimal,
    pl_today: Decimal,
    pl_week: Decimal,
    pl_all_time: Decimal,
}

impl PortfolioTotal {
    pub fn converted(&self, rate: Decimal) -> Self {
        Self {
            total_worth: self.total_worth * rate,
            pl_today: self.pl_today * rate,
            pl_week: self.pl_week * rate,
            pl_all_time: self.pl_all_time * rate,
        }
    }
}

impl<'a> Sum<&'a Profits> for PortfolioTotal {
    fn sum<I: Iterator<Item = &'a Profits>>(iter: I) -> Self {
        iter.fold(PortfolioTotal::default(), |total, profits| PortfolioTotal {
            total_worth: total.total_worth + profits.total_worth,
            pl_today: total.pl_today + profits.pl_today,
            pl_week: total.pl_week + profits.pl_week,
            pl_all_time: total.pl_all_time + profits.pl_all_time,
        })
    }
}

/// Everything the renderer needs for one run.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct Report {
    currency: String,
    profits: Vec<Profits>,
    total: PortfolioTotal,
}
