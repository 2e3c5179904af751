// SPDX-License-Identifier: Apache-2.0

use simplebiz_core::{today_utc, EntityId, NS_ARTICLE, NS_CATEGORY, NS_FEATURED, NS_PRODUCT};
use simplebiz_seed::{SeedSources, Seeder};
use simplebiz_store::{ContentStore, Db};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const POSTS_TS: &str = r#"
// hand-authored editorial seed
export const posts = [
  {
    slug: 'garden-basics',
    title: 'Garden Basics',
    description: "Start here.",
    dateISO: '2026-03-12',
    category: 'Guides',
    readingMinutes: 7,
    badges: ['popular', 'beginner',],
  },
  {
    slug: 'garden-basics',
    title: 'Duplicate slug, dropped',
  },
  {
    slug: '',
    title: 'Blank slug, dropped',
  },
  {
    slug: 'no-date',
    title: 'No Date',
    dateISO: 'not a date',
  },
]
"#;

const PRODUCTS_TS: &str = r#"
export const categories = [
  {
    slug: 'garden',
    name: 'Garden',
    summary: 'Everything outdoors',
    items: [
      { title: 'Planner', slug: 'planner', price: '9.00' },
      { title: 'Trellis Kit', productPageUrl: 'https://shop.example.com/items/trellis-kit/' },
      { title: 'Seed Bundle' },
    ],
  },
  {
    slug: 'office',
    name: 'Office',
    items: [
      { title: 'Planner', slug: 'planner' },
    ],
  },
]
"#;

const FEATURED_TS: &str = r#"
export const featuredProducts = [
  {
    title: 'Spotlight',
    productPageUrl: 'https://shop.example.com/items/spotlight',
    bullets: ['bright', 'bold',],
  },
  { title: 'No URL Item' },
  { title: '' },
]
"#;

fn write_sources(dir: &Path) -> SeedSources {
    fs::write(dir.join("posts.ts"), POSTS_TS).expect("write posts");
    fs::write(dir.join("products.ts"), PRODUCTS_TS).expect("write products");
    fs::write(dir.join("featured.ts"), FEATURED_TS).expect("write featured");
    SeedSources::in_dir(dir)
}

#[test]
fn full_pipeline_mints_deterministic_rows() {
    let dir = tempdir().expect("tmp");
    let sources = write_sources(dir.path());
    let content = ContentStore::new(Db::open_in_memory().expect("db"));

    let report = Seeder::new(content.clone()).run(&sources).expect("seed");
    assert_eq!(report.articles_inserted, 2);
    assert_eq!(report.categories_inserted, 2);
    assert_eq!(report.products_inserted, 4);
    assert_eq!(report.featured_inserted, 2);

    let article = content
        .get_article_by_slug("garden-basics")
        .expect("seeded article");
    assert_eq!(article.id, EntityId::derive(NS_ARTICLE, "garden-basics"));
    assert_eq!(article.date.to_string(), "2026-03-12");
    assert_eq!(article.badges, ["popular", "beginner"]);
    assert_eq!(article.status, "published");

    // unparsable date falls back to today
    let undated = content.get_article_by_slug("no-date").expect("no-date");
    assert_eq!(undated.date, today_utc());

    // products reference their category by independently derived id
    let garden = content.get_category_by_slug("garden").expect("garden");
    assert_eq!(garden.id, EntityId::derive(NS_CATEGORY, "garden"));
    let planner = content
        .get_product_by_slug("garden", "planner")
        .expect("planner");
    assert_eq!(planner.id, EntityId::derive(NS_PRODUCT, "garden:planner"));
    assert_eq!(planner.category_id, garden.id);

    // slug resolution: url segment, then slugified title
    content
        .get_product_by_slug("garden", "trellis-kit")
        .expect("slug from url");
    content
        .get_product_by_slug("garden", "seed-bundle")
        .expect("slug from title");

    // the same product slug lives in both categories
    content
        .get_product_by_slug("office", "planner")
        .expect("scoped slug");

    let featured = content.list_featured_products().expect("featured");
    assert_eq!(featured.len(), 2);
    let spotlight = featured
        .iter()
        .find(|f| f.title == "Spotlight")
        .expect("spotlight");
    assert_eq!(
        spotlight.id,
        EntityId::derive(NS_FEATURED, "https://shop.example.com/items/spotlight")
    );
    let no_url = featured
        .iter()
        .find(|f| f.title == "No URL Item")
        .expect("keyed by title");
    assert_eq!(no_url.id, EntityId::derive(NS_FEATURED, "No URL Item"));
}

#[test]
fn rerunning_ingestion_is_idempotent_per_table() {
    let dir = tempdir().expect("tmp");
    let sources = write_sources(dir.path());
    let content = ContentStore::new(Db::open_in_memory().expect("db"));
    let seeder = Seeder::new(content.clone());

    let first = seeder.run(&sources).expect("first run");
    assert_eq!(first.articles_inserted, 2);

    let second = seeder.run(&sources).expect("second run");
    assert_eq!(second, simplebiz_seed::SeedReport::default());
    assert_eq!(content.list_articles(None, true).expect("list").len(), 2);
    assert_eq!(content.list_products().expect("products").len(), 4);
}

#[test]
fn absent_sources_are_skipped_silently() {
    let dir = tempdir().expect("tmp");
    // only posts.ts exists
    fs::write(dir.path().join("posts.ts"), POSTS_TS).expect("write posts");
    let sources = SeedSources::in_dir(dir.path());
    let content = ContentStore::new(Db::open_in_memory().expect("db"));

    let report = Seeder::new(content.clone()).run(&sources).expect("seed");
    assert_eq!(report.articles_inserted, 2);
    assert_eq!(report.categories_inserted, 0);
    assert_eq!(report.products_inserted, 0);
    assert_eq!(report.featured_inserted, 0);
}

#[test]
fn malformed_source_degrades_to_empty_for_that_kind_only() {
    let dir = tempdir().expect("tmp");
    fs::write(dir.path().join("posts.ts"), "export const posts = [{{{ not a literal")
        .expect("write posts");
    fs::write(dir.path().join("products.ts"), PRODUCTS_TS).expect("write products");
    let sources = SeedSources::in_dir(dir.path());
    let content = ContentStore::new(Db::open_in_memory().expect("db"));

    let report = Seeder::new(content.clone()).run(&sources).expect("seed");
    assert_eq!(report.articles_inserted, 0);
    assert_eq!(report.categories_inserted, 2);
    assert_eq!(report.products_inserted, 4);
}

#[test]
fn derivation_agrees_with_a_fresh_database() {
    // Two independent databases seeded from the same sources carry
    // byte-identical identifiers.
    let dir = tempdir().expect("tmp");
    let sources = write_sources(dir.path());

    let first = ContentStore::new(Db::open_in_memory().expect("db"));
    let second = ContentStore::new(Db::open_in_memory().expect("db"));
    Seeder::new(first.clone()).run(&sources).expect("first");
    Seeder::new(second.clone()).run(&sources).expect("second");

    let a = first.get_product_by_slug("garden", "planner").expect("a");
    let b = second.get_product_by_slug("garden", "planner").expect("b");
    assert_eq!(a.id, b.id);
    assert_eq!(a.category_id, b.category_id);
}
