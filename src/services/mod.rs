pub mod market;

pub use market::{FrankfurterRates, PriceSource, RateProvider, TefasPriceSource};
