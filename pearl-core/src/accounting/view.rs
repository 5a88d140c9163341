//! Accounting presentation contract

pub trait AccountingView {
    /// The date-time range used in the query is invalid.
    fn show_invalid_date_time_range(&self);

    /// No sales fell inside the queried range.
    fn show_sales_empty(&self);
}
