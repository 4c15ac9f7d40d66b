//! Menu service
//!
//! Owns the mapping between the category/item domain model and the KV key
//! space, and keeps item orders contiguous from 0 within each category.
//!
//! Key space (durable contract):
//! - `menu:{main}:category:{categoryId}` -> category record (no items)
//! - `menu:{main}:items:{categoryId}:{order}` -> item record
//!
//! Mutations to one `(main, categoryId)` partition are serialized behind a
//! per-partition async mutex. The store has no multi-key atomicity, so a
//! delete still exposes a transient window where concurrent readers see
//! the category partially rewritten.

use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use crate::domain::{Category, CategorySeed, CategoryWithItems, ItemSeed, MainCategory, MenuItem};
use crate::error::DomainError;
use crate::repositories::KvStore;
use crate::services::require;

const CURRENCY_MARKER: &str = "RWF";

pub struct MenuService {
    store: Arc<dyn KvStore>,
    partition_locks: DashMap<(MainCategory, i64), Arc<Mutex<()>>>,
}

impl MenuService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            partition_locks: DashMap::new(),
        }
    }

    /// All categories of a partition, ascending by id.
    pub async fn categories(&self, main: MainCategory) -> Result<Vec<Category>, DomainError> {
        let raw = self.store.get_by_prefix(&category_prefix(main)).await?;
        let mut categories = decode_records::<Category>(raw, "category")?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    /// Items of one category, ascending by order.
    pub async fn items(
        &self,
        main: MainCategory,
        category_id: i64,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let raw = self
            .store
            .get_by_prefix(&items_prefix(main, category_id))
            .await?;
        let mut items = decode_records::<MenuItem>(raw, "item")?;
        items.sort_by_key(|i| i.order);
        Ok(items)
    }

    /// The full menu of a partition: categories sorted by id, each carrying
    /// its items sorted by order.
    pub async fn complete_menu(
        &self,
        main: MainCategory,
    ) -> Result<Vec<CategoryWithItems>, DomainError> {
        let categories = self.categories(main).await?;
        let mut menu = Vec::with_capacity(categories.len());
        for category in categories {
            let items = self.items(main, category.id).await?;
            menu.push(CategoryWithItems { category, items });
        }
        Ok(menu)
    }

    /// Append a new item at one past the current maximum order.
    pub async fn create_item(
        &self,
        main: MainCategory,
        category_id: i64,
        seed: ItemSeed,
    ) -> Result<MenuItem, DomainError> {
        let name = require("name", &seed.name)?;
        let price = require("price", &seed.price)?;

        let _guard = self.lock_partition(main, category_id).await;

        let existing = self.items(main, category_id).await?;
        let order = existing.iter().map(|i| i.order + 1).max().unwrap_or(0);

        let item = MenuItem {
            name,
            price: normalize_price(&price),
            description: seed.description.unwrap_or_default(),
            order,
        };
        self.put_item(main, category_id, &item).await?;

        info!(main = %main, category_id, order, "created menu item");
        Ok(item)
    }

    /// Overwrite the item at `(main, categoryId, order)`. The order itself
    /// is immutable through this operation.
    pub async fn update_item(
        &self,
        main: MainCategory,
        category_id: i64,
        order: u32,
        seed: ItemSeed,
    ) -> Result<MenuItem, DomainError> {
        let name = require("name", &seed.name)?;
        let price = require("price", &seed.price)?;

        let _guard = self.lock_partition(main, category_id).await;

        let key = item_key(main, category_id, order);
        if self.store.get(&key).await?.is_none() {
            return Err(DomainError::NotFound("Item not found".to_string()));
        }

        let item = MenuItem {
            name,
            price: normalize_price(&price),
            description: seed.description.unwrap_or_default(),
            order,
        };
        self.store.set(&key, encode_record(&item)?).await?;

        info!(main = %main, category_id, order, "updated menu item");
        Ok(item)
    }

    /// Remove the item at `order` and re-pack the survivors to contiguous
    /// orders 0..n, preserving their relative sequence. Deleting an order
    /// that does not exist still succeeds; the partition is re-packed
    /// either way.
    pub async fn delete_item(
        &self,
        main: MainCategory,
        category_id: i64,
        order: u32,
    ) -> Result<(), DomainError> {
        let _guard = self.lock_partition(main, category_id).await;

        let mut items = self.items(main, category_id).await?;
        for item in &items {
            self.store
                .del(&item_key(main, category_id, item.order))
                .await?;
        }

        items.retain(|i| i.order != order);
        for (new_order, mut item) in items.into_iter().enumerate() {
            item.order = new_order as u32;
            self.put_item(main, category_id, &item).await?;
        }

        info!(main = %main, category_id, order, "deleted menu item");
        Ok(())
    }

    /// Merge new display fields over an existing category record. Unsupplied
    /// or empty `icon`/`color` keep their previous value; `id` and `note`
    /// are untouched.
    pub async fn update_category(
        &self,
        main: MainCategory,
        category_id: i64,
        name: &str,
        icon: Option<String>,
        color: Option<String>,
    ) -> Result<Category, DomainError> {
        let name = require("name", name)?;

        let key = category_key(main, category_id);
        let existing = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| DomainError::NotFound("Category not found".to_string()))?;
        let existing: Category = decode_record(existing, "category")?;

        let updated = Category {
            id: existing.id,
            name,
            icon: non_empty(icon).unwrap_or(existing.icon),
            color: non_empty(color).unwrap_or(existing.color),
            note: existing.note,
        };
        self.store.set(&key, encode_record(&updated)?).await?;

        info!(main = %main, category_id, "updated category");
        Ok(updated)
    }

    /// Bulk seed of a partition. Each category record is written with its
    /// items stripped, then every item is written at the order given by its
    /// input position. Destructive per key touched; idempotent when called
    /// twice with identical input.
    pub async fn initialize(
        &self,
        main: MainCategory,
        categories: Vec<CategorySeed>,
    ) -> Result<(), DomainError> {
        for seed in categories {
            let _guard = self.lock_partition(main, seed.id).await;

            let category = Category {
                id: seed.id,
                name: seed.name,
                icon: seed.icon,
                color: seed.color,
                note: seed.note,
            };
            self.store
                .set(&category_key(main, category.id), encode_record(&category)?)
                .await?;

            for (position, item) in seed.items.into_iter().enumerate() {
                let item = MenuItem {
                    name: item.name,
                    price: normalize_price(&item.price),
                    description: item.description.unwrap_or_default(),
                    order: position as u32,
                };
                self.put_item(main, category.id, &item).await?;
            }
            debug!(main = %main, category_id = category.id, "seeded category");
        }
        info!(main = %main, "menu initialized");
        Ok(())
    }

    async fn put_item(
        &self,
        main: MainCategory,
        category_id: i64,
        item: &MenuItem,
    ) -> Result<(), DomainError> {
        self.store
            .set(&item_key(main, category_id, item.order), encode_record(item)?)
            .await
    }

    async fn lock_partition(&self, main: MainCategory, category_id: i64) -> OwnedMutexGuard<()> {
        let lock = self
            .partition_locks
            .entry((main, category_id))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

fn category_prefix(main: MainCategory) -> String {
    format!("menu:{main}:category:")
}

fn category_key(main: MainCategory, category_id: i64) -> String {
    format!("menu:{main}:category:{category_id}")
}

fn items_prefix(main: MainCategory, category_id: i64) -> String {
    format!("menu:{main}:items:{category_id}:")
}

fn item_key(main: MainCategory, category_id: i64, order: u32) -> String {
    format!("menu:{main}:items:{category_id}:{order}")
}

/// Append the currency marker unless the price already carries it, matching
/// case-insensitively so "1,500 rwf" is left alone.
fn normalize_price(price: &str) -> String {
    let trimmed = price.trim();
    if trimmed.to_uppercase().contains(CURRENCY_MARKER) {
        trimmed.to_string()
    } else {
        format!("{trimmed} {CURRENCY_MARKER}")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn encode_record<T: serde::Serialize>(record: &T) -> Result<Value, DomainError> {
    serde_json::to_value(record).map_err(|e| DomainError::Storage(e.to_string()))
}

fn decode_record<T: serde::de::DeserializeOwned>(
    value: Value,
    kind: &str,
) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::Storage(format!("malformed {kind} record: {e}")))
}

fn decode_records<T: serde::de::DeserializeOwned>(
    values: Vec<Value>,
    kind: &str,
) -> Result<Vec<T>, DomainError> {
    values
        .into_iter()
        .map(|v| decode_record(v, kind))
        .collect()
}
