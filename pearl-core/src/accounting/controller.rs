//! Accounting Controller

use crate::error::DataResult;
use crate::models::{Sale, SaleItem};
use crate::utils::time::{date_time_to_millis, parse_date_time};

use super::{AccountingData, AccountingView};

/// Read-only sales record viewing over an injected store.
pub struct AccountingController<D, V> {
    data: D,
    view: V,
}

impl<D, V> AccountingController<D, V>
where
    D: AccountingData,
    V: AccountingView,
{
    pub fn new(data: D, view: V) -> Self {
        Self { data, view }
    }

    /// Sales inside a `YYYY-MM-DD HH:MM:SS` range, bounds inclusive.
    ///
    /// An unparsable bound or an inverted range raises the invalid-range
    /// notification and yields an empty report without asking the store.
    pub fn sales_report(&self, from: &str, to: &str) -> DataResult<Vec<Sale>> {
        tracing::debug!(from = %from, to = %to, "building sales report");
        let (Some(from_dt), Some(to_dt)) = (parse_date_time(from), parse_date_time(to)) else {
            tracing::warn!("malformed date-time bound in sales query");
            self.view.show_invalid_date_time_range();
            return Ok(Vec::new());
        };
        if from_dt > to_dt {
            tracing::warn!("inverted date-time range in sales query");
            self.view.show_invalid_date_time_range();
            return Ok(Vec::new());
        }
        let sales = self
            .data
            .sales_between(date_time_to_millis(from_dt), date_time_to_millis(to_dt))?;
        if sales.is_empty() {
            tracing::info!("no sales in the queried range");
            self.view.show_sales_empty();
        } else {
            tracing::info!(count = sales.len(), "sales report ready");
        }
        Ok(sales)
    }

    pub fn sale_items(&self, sale_id: &str) -> DataResult<Vec<SaleItem>> {
        tracing::debug!(sale_id = %sale_id, "fetching sale items");
        self.data.sale_items(sale_id)
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
