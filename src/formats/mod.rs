pub mod generic;
pub mod teb;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    app::calc::net_positions,
    error::{Result, TrackerError},
    models::{Position, Transaction},
};

/// A bank export layout that can be read into transactions.
pub trait ExportFormat: Sync {
    fn name(&self) -> &'static str;

    fn transactions(&self, raw_data: &str) -> Result<Vec<Transaction>>;

    /// Positions still held on `as_of` once sales are netted out. Rows dated
    /// after `as_of` are ignored.
    fn parse(&self, raw_data: &str, as_of: NaiveDate) -> Result<Vec<Position>> {
        let mut transactions = self.transactions(raw_data)?;
        let count = transactions.len();
        transactions.retain(|transaction| *transaction.date() <= as_of);
        debug!(
            format = self.name(),
            count,
            later = count - transactions.len(),
            %as_of,
            "Read transactions"
        );
        net_positions(transactions)
    }
}

static EXPORT_FORMATS: &[&dyn ExportFormat] = &[&generic::GenericCsv, &teb::Teb];

pub fn supported_formats() -> Vec<&'static str> {
    EXPORT_FORMATS.iter().map(|format| format.name()).collect()
}

pub fn lookup(name: &str) -> Result<&'static dyn ExportFormat> {
    let name = name.trim().to_lowercase();
    EXPORT_FORMATS
        .iter()
        .find(|format| format.name() == name)
        .copied()
        .ok_or_else(|| TrackerError::UnsupportedFormat(name, supported_formats().join(", ")))
}
