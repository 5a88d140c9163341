//! Accounting persistence contract

use crate::error::DataResult;
use crate::models::{Sale, SaleItem};

/// Sales record lookups. Range bounds are Unix millis; date string
/// conversion happens at the controller layer.
pub trait AccountingData {
    /// Sales whose timestamp falls inside `[from, to]`.
    fn sales_between(&self, from: i64, to: i64) -> DataResult<Vec<Sale>>;

    /// Line items of one sale.
    fn sale_items(&self, sale_id: &str) -> DataResult<Vec<SaleItem>>;
}
