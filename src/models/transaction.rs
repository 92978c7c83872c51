use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};

/// A single buy or sale row read from a bank export.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct Transaction {
    line: usize,
    transaction_type: TransactionType,
    date: NaiveDate,
    code: String,
    title: String,
    quantity: Decimal,
    price: Decimal,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransactionType {
    Buy,
    Sell,
}
