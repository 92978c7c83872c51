use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Shares of one fund still held after sales are netted out.
#[derive(Clone, Debug, Eq, Getters, new, PartialEq)]
pub struct Position {
    code: String,
    title: String,
    purchase_date: NaiveDate,
    quantity: Decimal,
    total_cost: Decimal,
}
