pub mod calc;
pub mod portfolio;
pub mod ui;
pub mod utils;

pub use portfolio::Portfolio;
