// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use simplebiz_core::EntityId;

/// Top level of the menu hierarchy. Deleting an item deletes its
/// categories and, transitively, their pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItemDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

/// Middle level; `menu_item_id` must reference an existing menu item.
/// Categories carry no slug, so there is no uniqueness precondition here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: EntityId,
    pub menu_item_id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryDraft {
    pub menu_item_id: EntityId,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Leaf page. `slug` is unique across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPage {
    pub id: EntityId,
    pub menu_category_id: EntityId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    pub date_modified: DateTime<Utc>,
    pub featured_image: Option<String>,
    pub header_image: Option<String>,
    pub status: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPageDraft {
    pub menu_category_id: EntityId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub header_image: Option<String>,
    #[serde(default)]
    pub status: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

/// Full menu hierarchy in one read, title-ordered at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    pub items: Vec<MenuTreeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTreeItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub categories: Vec<MenuTreeCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTreeCategory {
    #[serde(flatten)]
    pub category: MenuCategory,
    pub pages: Vec<MenuItemPage>,
}
