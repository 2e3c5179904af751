// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! One-time seed ingestion.
//!
//! Reads hand-authored loose-literal sources, mints deterministic
//! identifiers, and bulk-loads them through the store's guarded
//! insert-if-table-empty path. Re-running against a populated database is a
//! no-op per table; re-running against a fresh one reproduces byte-identical
//! identifiers, so rows that reference each other (products → categories)
//! resolve without any lookup table.

mod literal;
mod records;

pub const CRATE_NAME: &str = "simplebiz-seed";

pub use literal::extract_array;
pub use records::{CategorySeed, FeaturedSeed, PostSeed, ProductSeed};

use simplebiz_core::{
    slug_from_url, slugify, today_utc, EntityId, NS_ARTICLE, NS_CATEGORY, NS_FEATURED, NS_PRODUCT,
};
use simplebiz_model::{Article, FeaturedProduct, Product, ProductCategory, STATUS_PUBLISHED};
use simplebiz_store::{ContentStore, StoreError};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

pub const POSTS_MARKER: &str = "export const posts";
pub const CATEGORIES_MARKER: &str = "export const categories";
pub const FEATURED_MARKER: &str = "export const featuredProducts";

/// Filesystem locations of the three seed sources. Absence of any one
/// source is not an error; that kind is simply skipped.
#[derive(Debug, Clone)]
pub struct SeedSources {
    pub posts: PathBuf,
    pub products: PathBuf,
    pub featured: PathBuf,
}

impl SeedSources {
    /// Conventional layout: `posts.ts`, `products.ts`, `featured.ts` under
    /// one directory.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            posts: dir.join("posts.ts"),
            products: dir.join("products.ts"),
            featured: dir.join("featured.ts"),
        }
    }
}

/// Rows written per entity kind; 0 means the table was non-empty (skipped)
/// or the source yielded nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub articles_inserted: usize,
    pub categories_inserted: usize,
    pub products_inserted: usize,
    pub featured_inserted: usize,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum SeedError {
    Store(StoreError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "seed insertion failed: {err}"),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<StoreError> for SeedError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Drives extraction, identifier derivation, and guarded insertion.
/// Expected to run once at startup, before concurrent traffic; per-table
/// emptiness checks in the store make a second invocation harmless.
pub struct Seeder {
    content: ContentStore,
}

impl Seeder {
    #[must_use]
    pub fn new(content: ContentStore) -> Self {
        Self { content }
    }

    pub fn run(&self, sources: &SeedSources) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        let articles = load_articles(&sources.posts);
        report.articles_inserted = self.content.seed_articles(&articles)?;
        info!(
            kind = "articles",
            parsed = articles.len(),
            inserted = report.articles_inserted,
            "seed ingestion"
        );

        let (categories, products) = load_catalog(&sources.products);
        report.categories_inserted = self.content.seed_categories(&categories)?;
        report.products_inserted = self.content.seed_products(&products)?;
        info!(
            kind = "catalog",
            categories = categories.len(),
            products = products.len(),
            categories_inserted = report.categories_inserted,
            products_inserted = report.products_inserted,
            "seed ingestion"
        );

        let featured = load_featured(&sources.featured);
        report.featured_inserted = self.content.seed_featured(&featured)?;
        info!(
            kind = "featured",
            parsed = featured.len(),
            inserted = report.featured_inserted,
            "seed ingestion"
        );

        Ok(report)
    }
}

fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            info!(path = %path.display(), error = %err, "seed source unreadable, skipping");
            None
        }
    }
}

fn decode_records<T: serde::de::DeserializeOwned>(path: &Path, marker: &str) -> Vec<T> {
    let Some(raw) = read_source(path) else {
        return Vec::new();
    };
    let value = extract_array(&raw, Some(marker));
    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(err) => {
            info!(path = %path.display(), error = %err, "seed source malformed, skipping");
            Vec::new()
        }
    }
}

/// Articles from the posts source. Blank slugs are dropped; duplicate slugs
/// (case-insensitive, matching the store's collation) keep the first
/// occurrence so derived identifiers cannot collide on insert.
fn load_articles(path: &Path) -> Vec<Article> {
    let posts: Vec<PostSeed> = decode_records(path, POSTS_MARKER);
    let today = today_utc();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for post in posts {
        let slug = post.slug.trim();
        if slug.is_empty() || !seen.insert(slug.to_lowercase()) {
            continue;
        }
        let date = post
            .date_iso
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(today);
        out.push(Article {
            id: EntityId::derive(NS_ARTICLE, slug),
            slug: slug.to_string(),
            title: post.title,
            subtitle: post.subtitle,
            description: post.description,
            content: None,
            date,
            date_modified: date,
            category: post.category,
            reading_minutes: post.reading_minutes,
            badges: post.badges,
            featured_image: post.featured_image,
            header_image: post.header_image,
            status: STATUS_PUBLISHED.to_string(),
            seo_title: None,
            seo_description: None,
            og_image: None,
            canonical_url: None,
        });
    }
    out
}

/// Categories with their nested products. A product's category id is
/// recomputed from the category slug, never looked up, so the derivation
/// convention is the foreign key.
fn load_catalog(path: &Path) -> (Vec<ProductCategory>, Vec<Product>) {
    let seeds: Vec<CategorySeed> = decode_records(path, CATEGORIES_MARKER);
    let mut seen_categories = HashSet::new();
    let mut seen_products = HashSet::new();
    let mut categories = Vec::new();
    let mut products = Vec::new();

    for seed in seeds {
        let category_slug = seed.slug.trim();
        if category_slug.is_empty() || !seen_categories.insert(category_slug.to_string()) {
            continue;
        }
        let category_id = EntityId::derive(NS_CATEGORY, category_slug);
        categories.push(ProductCategory {
            id: category_id,
            slug: category_slug.to_string(),
            name: seed.name,
            summary: seed.summary,
            how_this_helps: seed.how_this_helps,
            hero_image: seed.hero_image,
        });

        for item in seed.items {
            let title = item.title.unwrap_or_default();
            let slug = resolve_product_slug(
                item.slug.as_deref(),
                item.product_page_url.as_deref(),
                &title,
            );
            if !seen_products.insert((category_slug.to_string(), slug.clone())) {
                continue;
            }
            products.push(Product {
                id: EntityId::derive(NS_PRODUCT, &format!("{category_slug}:{slug}")),
                title,
                slug,
                problem: item.problem,
                description: item.description,
                bullets: item.bullets,
                image: item.image,
                external_url: item.etsy_url,
                price: item.price,
                product_page_url: item.product_page_url,
                category_id,
                status: STATUS_PUBLISHED.to_string(),
            });
        }
    }
    (categories, products)
}

/// Slug priority: explicit field, then the product page URL's trailing
/// segment, then the slugified title.
fn resolve_product_slug(explicit: Option<&str>, page_url: Option<&str>, title: &str) -> String {
    if let Some(slug) = explicit {
        if !slug.trim().is_empty() {
            return slug.trim().to_string();
        }
    }
    if let Some(segment) = page_url.and_then(slug_from_url) {
        return segment.to_string();
    }
    slugify(title)
}

/// Featured rows keyed by page URL when present, else title. Blank titles
/// are dropped, as is any later row repeating an earlier natural key.
fn load_featured(path: &Path) -> Vec<FeaturedProduct> {
    let seeds: Vec<FeaturedSeed> = decode_records(path, FEATURED_MARKER);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for seed in seeds {
        if seed.title.trim().is_empty() {
            continue;
        }
        let key = seed
            .product_page_url
            .clone()
            .unwrap_or_else(|| seed.title.clone());
        if !seen.insert(key.clone()) {
            continue;
        }
        out.push(FeaturedProduct {
            id: EntityId::derive(NS_FEATURED, &key),
            title: seed.title,
            problem: seed.problem,
            bullets: seed.bullets,
            image: seed.image,
            external_url: seed.etsy_url,
            price: seed.price,
            product_page_url: seed.product_page_url,
        });
    }
    out
}
