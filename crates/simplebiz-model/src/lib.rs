// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod content;
mod menu;

pub const CRATE_NAME: &str = "simplebiz-model";

/// Conventional status values. Status is free text by contract; these two
/// are the values visibility filtering keys on.
pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_DRAFT: &str = "draft";

pub use content::{
    Article, ArticleDraft, CategoryDraft, FeaturedProduct, FeaturedProductDraft, Product,
    ProductCategory, ProductDraft,
};
pub use menu::{
    MenuCategory, MenuCategoryDraft, MenuItem, MenuItemDraft, MenuItemPage, MenuPageDraft,
    MenuTree, MenuTreeCategory, MenuTreeItem,
};
