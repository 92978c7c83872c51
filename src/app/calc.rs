use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    error::{Result, TrackerError},
    models::{Position, PriceSeries, Profits, Transaction, TransactionType},
};

const WEEK: Days = Days::new(7);
const DAY: Days = Days::new(1);

/// Worth and today/week/all-time P/L of `position` as of `today`, in the
/// series' own currency multiplied by `rate`.
pub fn calculate_profits(
    position: &Position,
    series: &PriceSeries,
    today: NaiveDate,
    rate: Decimal,
) -> Result<Profits> {
    let (price_date, current) = series.price_on(today).ok_or_else(|| {
        TrackerError::data_unavailable(
            position.code(),
            format!("no price on or before {}", today),
        )
    })?;

    // Both fall back to the earliest price, which exists because `current` does.
    let previous = previous_price(series, today - DAY, current);
    let week_ago = previous_price(series, today - WEEK, current);

    let quantity = *position.quantity();
    let total_worth = quantity * current;

    debug!(
        code = %position.code(),
        %price_date,
        %current,
        %previous,
        %week_ago,
        "Resolved prices"
    );

    let title = series
        .title()
        .clone()
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| position.title().clone());

    let profits = Profits::new(
        position.code().clone(),
        title,
        *position.purchase_date(),
        quantity,
        total_worth,
        quantity * (current - previous),
        quantity * (current - week_ago),
        total_worth - *position.total_cost(),
    );

    Ok(profits.converted(rate))
}

fn previous_price(series: &PriceSeries, date: NaiveDate, fallback: Decimal) -> Decimal {
    series
        .price_on_or_earliest(date)
        .map(|(_, price)| price)
        .unwrap_or(fallback)
}

/// Nets sales against earlier buys oldest-lot-first and returns the funds that
/// still hold shares, in the order they first appear in `transactions`.
pub fn net_positions(transactions: Vec<Transaction>) -> Result<Vec<Position>> {
    let mut order: Vec<String> = Vec::new();
    let mut by_code: HashMap<String, Vec<Transaction>> = HashMap::new();

    for transaction in transactions {
        let code = transaction.code().clone();
        if !by_code.contains_key(&code) {
            order.push(code.clone());
        }
        by_code.entry(code).or_default().push(transaction);
    }

    let mut positions = Vec::new();

    for code in order {
        let mut transactions = by_code.remove(&code).unwrap_or_default();
        transactions.sort_by_key(|transaction| *transaction.date());

        let title = transactions
            .first()
            .map(|transaction| transaction.title().clone())
            .unwrap_or_default();

        // (purchase date, quantity, unit price)
        let mut fifo_lots: Vec<(NaiveDate, Decimal, Decimal)> = Vec::new();

        for transaction in &transactions {
            match transaction.transaction_type() {
                TransactionType::Buy => {
                    fifo_lots.push((
                        *transaction.date(),
                        *transaction.quantity(),
                        *transaction.price(),
                    ));
                }
                TransactionType::Sell => {
                    let mut remaining_sell_quantity = *transaction.quantity();

                    let owned: Decimal = fifo_lots.iter().map(|(_, qty, _)| *qty).sum();
                    if owned < remaining_sell_quantity {
                        return Err(TrackerError::parse(
                            *transaction.line(),
                            format!(
                                "sale of {} shares of {} on {} exceeds the {} shares held",
                                remaining_sell_quantity,
                                code,
                                transaction.date(),
                                owned
                            ),
                        ));
                    }

                    while remaining_sell_quantity > Decimal::ZERO && !fifo_lots.is_empty() {
                        let lot_quantity = fifo_lots[0].1;

                        if remaining_sell_quantity >= lot_quantity {
                            fifo_lots.remove(0);
                            remaining_sell_quantity -= lot_quantity;
                        } else {
                            fifo_lots[0].1 -= remaining_sell_quantity;
                            remaining_sell_quantity = Decimal::ZERO;
                        }
                    }
                }
            }
        }

        let Some((purchase_date, _, _)) = fifo_lots.first().copied() else {
            debug!(%code, "Fund fully sold, dropping");
            continue;
        };

        let mut total_quantity = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;

        for (_, quantity, price) in &fifo_lots {
            total_quantity += *quantity;
            total_cost += *quantity * *price;
        }

        positions.push(Position::new(
            code,
            title,
            purchase_date,
            total_quantity,
            total_cost,
        ));
    }

    Ok(positions)
}
