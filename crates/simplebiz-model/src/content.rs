// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use simplebiz_core::EntityId;

/// Published editorial article. `slug` is unique across all articles,
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    pub date_modified: NaiveDate,
    pub category: Option<String>,
    pub reading_minutes: i64,
    pub badges: Vec<String>,
    pub featured_image: Option<String>,
    pub header_image: Option<String>,
    pub status: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

/// Create/update payload for an article. Updates are full-field replaces;
/// dates are store-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub reading_minutes: i64,
    pub badges: Vec<String>,
    pub featured_image: Option<String>,
    pub header_image: Option<String>,
    pub status: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

/// Product category. `slug` is unique across categories; deleting a
/// category deletes its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: EntityId,
    pub slug: String,
    pub name: String,
    pub summary: Option<String>,
    pub how_this_helps: Option<String>,
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDraft {
    pub slug: String,
    pub name: String,
    pub summary: Option<String>,
    pub how_this_helps: Option<String>,
    pub hero_image: Option<String>,
}

/// Catalog product. `slug` is unique within its category, not globally;
/// `category_id` must reference an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub problem: Option<String>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
    pub category_id: EntityId,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub slug: String,
    pub problem: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
    pub category_id: EntityId,
    #[serde(default)]
    pub status: String,
}

/// Standalone highlighted product, no parent relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProduct {
    pub id: EntityId,
    pub title: String,
    pub problem: Option<String>,
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedProductDraft {
    pub title: String,
    pub problem: Option<String>,
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplebiz_core::{EntityId, NS_ARTICLE};

    #[test]
    fn article_wire_form_uses_camel_case_and_date_iso() {
        let article = Article {
            id: EntityId::derive(NS_ARTICLE, "hello"),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            subtitle: None,
            description: None,
            content: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 12).expect("date"),
            date_modified: NaiveDate::from_ymd_opt(2026, 3, 12).expect("date"),
            category: None,
            reading_minutes: 4,
            badges: vec!["new".to_string()],
            featured_image: None,
            header_image: None,
            status: crate::STATUS_PUBLISHED.to_string(),
            seo_title: None,
            seo_description: None,
            og_image: None,
            canonical_url: None,
        };
        let json = serde_json::to_value(&article).expect("serialize");
        assert_eq!(json["dateISO"], "2026-03-12");
        assert_eq!(json["readingMinutes"], 4);
        assert!(json["dateModified"].is_string());
    }

    #[test]
    fn draft_tolerates_missing_optionals() {
        let draft: ArticleDraft =
            serde_json::from_str(r#"{"slug":"a","title":"A","status":"draft"}"#).expect("decode");
        assert!(draft.badges.is_empty());
        assert_eq!(draft.reading_minutes, 0);
    }
}
