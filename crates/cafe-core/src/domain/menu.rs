//! Menu entities: main-category partitions, categories, and priced items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Top-level partition of the menu. Category ids are only unique within
/// one partition; storage keys are namespaced by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    Eats,
    Drinks,
}

impl MainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainCategory::Eats => "eats",
            MainCategory::Drinks => "drinks",
        }
    }
}

impl FromStr for MainCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eats" => Ok(MainCategory::Eats),
            "drinks" => Ok(MainCategory::Drinks),
            other => Err(DomainError::Validation(format!(
                "Invalid main category '{other}'. Must be 'eats' or 'drinks'"
            ))),
        }
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named grouping of menu items. Display order follows ascending `id`;
/// there is no separate order field. `icon` and `color` are opaque
/// presentation tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A single priced entry. `order` is the item's identity within its
/// category and must stay contiguous from 0 across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    pub order: u32,
}

/// A category together with its ordered item list, as served by the
/// complete-menu endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithItems {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Item fields as supplied by clients; `order` is assigned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSeed {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Category definition for bulk initialization, carrying its embedded
/// item list. Input position becomes the canonical item order.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySeed {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub note: Option<String>,
    pub items: Vec<ItemSeed>,
}
