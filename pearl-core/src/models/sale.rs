//! Sale Models
//!
//! Monetary amounts are integer cents. Timestamps are Unix millis; date
//! string conversion happens at the controller layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub sold_at: i64,
    pub cashier_user_id: String,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub sale_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}
