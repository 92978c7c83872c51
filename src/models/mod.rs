pub mod position;
pub mod price_series;
pub mod profits;
pub mod transaction;

pub use position::Position;
pub use price_series::PriceSeries;
pub use profits::{PortfolioTotal, Profits, Report};
pub use transaction::{Transaction, TransactionType};
