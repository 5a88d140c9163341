//! JSON fixture seeding

use std::collections::HashMap;

use serde::Deserialize;

use pearl_core::models::{Employee, Sale, SaleItem, User};

use crate::MemoryStore;

/// Deserialized fixture file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub users: Vec<User>,
    /// user_id → password
    #[serde(default)]
    pub passwords: HashMap<String, String>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub sale_items: Vec<SaleItem>,
}

/// Build a [`MemoryStore`] from a JSON fixture.
pub fn store_from_json(json: &str) -> serde_json::Result<MemoryStore> {
    let seed: Seed = serde_json::from_str(json)?;
    let mut store = MemoryStore::new();
    for employee in seed.employees {
        store.insert_employee(employee);
    }
    for user in seed.users {
        store.insert_user(user);
    }
    for (user_id, password) in seed.passwords {
        store.set_password(user_id, password);
    }
    for sale in seed.sales {
        store.insert_sale(sale);
    }
    for item in seed.sale_items {
        store.insert_sale_item(item);
    }
    Ok(store)
}
