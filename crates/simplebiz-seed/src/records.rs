// SPDX-License-Identifier: Apache-2.0

//! Typed seed records, tolerant of missing fields. Field names mirror the
//! camelCase keys the hand-authored sources use.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostSeed {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,
    pub category: Option<String>,
    pub reading_minutes: i64,
    pub badges: Vec<String>,
    pub featured_image: Option<String>,
    pub header_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySeed {
    pub slug: String,
    pub name: String,
    pub summary: Option<String>,
    pub how_this_helps: Option<String>,
    pub hero_image: Option<String>,
    pub items: Vec<ProductSeed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSeed {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub problem: Option<String>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub etsy_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedSeed {
    pub title: String,
    pub problem: Option<String>,
    pub bullets: Vec<String>,
    pub image: Option<String>,
    pub etsy_url: Option<String>,
    pub price: Option<String>,
    pub product_page_url: Option<String>,
}
