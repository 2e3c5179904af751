// SPDX-License-Identifier: Apache-2.0

use crate::db::Db;
use crate::error::{StoreError, StoreErrorCode};
use crate::rows::{read_date, read_id, read_string_list, string_list_json};
use rusqlite::{params, Connection, Row};
use simplebiz_core::{today_utc, EntityId};
use simplebiz_model::{
    Article, ArticleDraft, CategoryDraft, FeaturedProduct, FeaturedProductDraft, Product,
    ProductCategory, ProductDraft, STATUS_PUBLISHED,
};

const ARTICLE_COLS: &str = "id, slug, title, subtitle, description, content, date, \
     date_modified, category, reading_minutes, badges, featured_image, header_image, \
     status, seo_title, seo_description, og_image, canonical_url";

const CATEGORY_COLS: &str = "id, slug, name, summary, how_this_helps, hero_image";

const PRODUCT_COLS: &str = "id, title, slug, problem, description, bullets, image, \
     external_url, price, product_page_url, category_id, status";

const FEATURED_COLS: &str =
    "id, title, problem, bullets, image, external_url, price, product_page_url";

/// Catalog store: articles, product categories, products, and featured
/// products. Each create/update runs its uniqueness/parent check and the
/// write under one connection lock, so the check-then-act pair is a single
/// logical unit within the process; the schema's constraints cover the rest.
#[derive(Clone)]
pub struct ContentStore {
    db: Db,
}

impl ContentStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    // ── articles ─────────────────────────────────────────────────────────

    /// An explicit status filter wins over `include_all`; with neither,
    /// only published articles are returned. Newest publish date first.
    pub fn list_articles(
        &self,
        status: Option<&str>,
        include_all: bool,
    ) -> Result<Vec<Article>, StoreError> {
        let conn = self.db.lock()?;
        let (sql, filter) = match status {
            Some(value) => (
                format!("SELECT {ARTICLE_COLS} FROM articles WHERE status = ?1 ORDER BY date DESC"),
                Some(value),
            ),
            None if !include_all => (
                format!("SELECT {ARTICLE_COLS} FROM articles WHERE status = ?1 ORDER BY date DESC"),
                Some(STATUS_PUBLISHED),
            ),
            None => (
                format!("SELECT {ARTICLE_COLS} FROM articles ORDER BY date DESC"),
                None,
            ),
        };
        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = match filter {
            Some(value) => stmt.query_map(params![value], article_from_row)?,
            None => stmt.query_map([], article_from_row)?,
        };
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn get_article(&self, id: &EntityId) -> Result<Article, StoreError> {
        let conn = self.db.lock()?;
        fetch_article(&conn, id)?.ok_or_else(|| StoreError::not_found("article", &id.to_hex()))
    }

    pub fn get_article_by_slug(&self, slug: &str) -> Result<Article, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {ARTICLE_COLS} FROM articles WHERE slug = ?1"
        ))?;
        let mut rows = stmt.query_map(params![slug], article_from_row)?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(StoreError::not_found("article", slug)),
        }
    }

    pub fn create_article(&self, draft: &ArticleDraft) -> Result<Article, StoreError> {
        let conn = self.db.lock()?;
        if article_slug_taken(&conn, &draft.slug, None)? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("article slug already exists: {}", draft.slug),
            ));
        }
        let today = today_utc();
        let article = article_from_draft(EntityId::random(), draft, today, today);
        insert_article(&conn, &article)?;
        Ok(article)
    }

    /// Full-field replace. The publish date is preserved; the modified date
    /// is bumped to today.
    pub fn update_article(
        &self,
        id: &EntityId,
        draft: &ArticleDraft,
    ) -> Result<Article, StoreError> {
        let conn = self.db.lock()?;
        let existing =
            fetch_article(&conn, id)?.ok_or_else(|| StoreError::not_found("article", &id.to_hex()))?;
        if article_slug_taken(&conn, &draft.slug, Some(id))? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("article slug already exists: {}", draft.slug),
            ));
        }
        let article = article_from_draft(*id, draft, existing.date, today_utc());
        conn.execute(
            "UPDATE articles SET slug = ?2, title = ?3, subtitle = ?4, description = ?5, \
             content = ?6, date = ?7, date_modified = ?8, category = ?9, reading_minutes = ?10, \
             badges = ?11, featured_image = ?12, header_image = ?13, status = ?14, \
             seo_title = ?15, seo_description = ?16, og_image = ?17, canonical_url = ?18 \
             WHERE id = ?1",
            params![
                article.id.to_hex(),
                article.slug,
                article.title,
                article.subtitle,
                article.description,
                article.content,
                article.date.to_string(),
                article.date_modified.to_string(),
                article.category,
                article.reading_minutes,
                string_list_json(&article.badges),
                article.featured_image,
                article.header_image,
                article.status,
                article.seo_title,
                article.seo_description,
                article.og_image,
                article.canonical_url,
            ],
        )?;
        Ok(article)
    }

    pub fn delete_article(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected = conn.execute("DELETE FROM articles WHERE id = ?1", params![id.to_hex()])?;
        if affected == 0 {
            return Err(StoreError::not_found("article", &id.to_hex()));
        }
        Ok(())
    }

    // ── categories ───────────────────────────────────────────────────────

    pub fn list_categories(&self) -> Result<Vec<ProductCategory>, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {CATEGORY_COLS} FROM categories ORDER BY name"
        ))?;
        let rows = stmt.query_map([], category_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn get_category(&self, id: &EntityId) -> Result<ProductCategory, StoreError> {
        let conn = self.db.lock()?;
        fetch_category(&conn, id)?.ok_or_else(|| StoreError::not_found("category", &id.to_hex()))
    }

    pub fn get_category_by_slug(&self, slug: &str) -> Result<ProductCategory, StoreError> {
        let conn = self.db.lock()?;
        fetch_category_by_slug(&conn, slug)?.ok_or_else(|| StoreError::not_found("category", slug))
    }

    pub fn create_category(&self, draft: &CategoryDraft) -> Result<ProductCategory, StoreError> {
        let conn = self.db.lock()?;
        if category_slug_taken(&conn, &draft.slug, None)? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("category slug already exists: {}", draft.slug),
            ));
        }
        let category = category_from_draft(EntityId::random(), draft);
        insert_category(&conn, &category)?;
        Ok(category)
    }

    pub fn update_category(
        &self,
        id: &EntityId,
        draft: &CategoryDraft,
    ) -> Result<ProductCategory, StoreError> {
        let conn = self.db.lock()?;
        if fetch_category(&conn, id)?.is_none() {
            return Err(StoreError::not_found("category", &id.to_hex()));
        }
        if category_slug_taken(&conn, &draft.slug, Some(id))? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("category slug already exists: {}", draft.slug),
            ));
        }
        let category = category_from_draft(*id, draft);
        conn.execute(
            "UPDATE categories SET slug = ?2, name = ?3, summary = ?4, how_this_helps = ?5, \
             hero_image = ?6 WHERE id = ?1",
            params![
                category.id.to_hex(),
                category.slug,
                category.name,
                category.summary,
                category.how_this_helps,
                category.hero_image,
            ],
        )?;
        Ok(category)
    }

    /// Deleting a category cascades to its products via the schema's
    /// foreign-key action.
    pub fn delete_category(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected =
            conn.execute("DELETE FROM categories WHERE id = ?1", params![id.to_hex()])?;
        if affected == 0 {
            return Err(StoreError::not_found("category", &id.to_hex()));
        }
        Ok(())
    }

    // ── products ─────────────────────────────────────────────────────────

    pub fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare_cached(&format!("SELECT {PRODUCT_COLS} FROM products"))?;
        let rows = stmt.query_map([], product_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn list_products_by_category(
        &self,
        category_id: &EntityId,
        published_only: bool,
    ) -> Result<Vec<Product>, StoreError> {
        let conn = self.db.lock()?;
        let sql = if published_only {
            format!("SELECT {PRODUCT_COLS} FROM products WHERE category_id = ?1 AND status = ?2")
        } else {
            format!("SELECT {PRODUCT_COLS} FROM products WHERE category_id = ?1")
        };
        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = if published_only {
            stmt.query_map(
                params![category_id.to_hex(), STATUS_PUBLISHED],
                product_from_row,
            )?
        } else {
            stmt.query_map(params![category_id.to_hex()], product_from_row)?
        };
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn get_product(&self, id: &EntityId) -> Result<Product, StoreError> {
        let conn = self.db.lock()?;
        fetch_product(&conn, id)?.ok_or_else(|| StoreError::not_found("product", &id.to_hex()))
    }

    /// Resolves the category by slug first, then the product within it.
    pub fn get_product_by_slug(
        &self,
        category_slug: &str,
        product_slug: &str,
    ) -> Result<Product, StoreError> {
        let conn = self.db.lock()?;
        let category = fetch_category_by_slug(&conn, category_slug)?
            .ok_or_else(|| StoreError::not_found("category", category_slug))?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {PRODUCT_COLS} FROM products WHERE category_id = ?1 AND slug = ?2"
        ))?;
        let mut rows = stmt.query_map(
            params![category.id.to_hex(), product_slug],
            product_from_row,
        )?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(StoreError::not_found("product", product_slug)),
        }
    }

    pub fn create_product(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let conn = self.db.lock()?;
        if fetch_category(&conn, &draft.category_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("category not found: {}", draft.category_id),
            ));
        }
        if product_pair_taken(&conn, &draft.category_id, &draft.slug, None)? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("product slug already exists in this category: {}", draft.slug),
            ));
        }
        let product = product_from_draft(EntityId::random(), draft);
        insert_product(&conn, &product)?;
        Ok(product)
    }

    pub fn update_product(
        &self,
        id: &EntityId,
        draft: &ProductDraft,
    ) -> Result<Product, StoreError> {
        let conn = self.db.lock()?;
        if fetch_product(&conn, id)?.is_none() {
            return Err(StoreError::not_found("product", &id.to_hex()));
        }
        if fetch_category(&conn, &draft.category_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("category not found: {}", draft.category_id),
            ));
        }
        if product_pair_taken(&conn, &draft.category_id, &draft.slug, Some(id))? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("product slug already exists in this category: {}", draft.slug),
            ));
        }
        let product = product_from_draft(*id, draft);
        conn.execute(
            "UPDATE products SET title = ?2, slug = ?3, problem = ?4, description = ?5, \
             bullets = ?6, image = ?7, external_url = ?8, price = ?9, product_page_url = ?10, \
             category_id = ?11, status = ?12 WHERE id = ?1",
            params![
                product.id.to_hex(),
                product.title,
                product.slug,
                product.problem,
                product.description,
                string_list_json(&product.bullets),
                product.image,
                product.external_url,
                product.price,
                product.product_page_url,
                product.category_id.to_hex(),
                product.status,
            ],
        )?;
        Ok(product)
    }

    pub fn delete_product(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected = conn.execute("DELETE FROM products WHERE id = ?1", params![id.to_hex()])?;
        if affected == 0 {
            return Err(StoreError::not_found("product", &id.to_hex()));
        }
        Ok(())
    }

    // ── featured products ────────────────────────────────────────────────

    pub fn list_featured_products(&self) -> Result<Vec<FeaturedProduct>, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt =
            conn.prepare_cached(&format!("SELECT {FEATURED_COLS} FROM featured_products"))?;
        let rows = stmt.query_map([], featured_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn create_featured_product(
        &self,
        draft: &FeaturedProductDraft,
    ) -> Result<FeaturedProduct, StoreError> {
        let conn = self.db.lock()?;
        let featured = FeaturedProduct {
            id: EntityId::random(),
            title: draft.title.clone(),
            problem: draft.problem.clone(),
            bullets: draft.bullets.clone(),
            image: draft.image.clone(),
            external_url: draft.external_url.clone(),
            price: draft.price.clone(),
            product_page_url: draft.product_page_url.clone(),
        };
        insert_featured(&conn, &featured)?;
        Ok(featured)
    }

    // ── seed bulk inserts ────────────────────────────────────────────────
    //
    // Insert-only-if-table-empty semantics: ingestion is a one-time
    // bootstrap, not a merge. Each call is one transaction; the return
    // value is the number of rows written (0 when the table was skipped).

    pub fn seed_articles(&self, rows: &[Article]) -> Result<usize, StoreError> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if !table_is_empty(&tx, "articles")? {
            tracing::debug!(table = "articles", "already populated, seed skipped");
            return Ok(0);
        }
        for article in rows {
            insert_article(&tx, article)?;
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn seed_categories(&self, rows: &[ProductCategory]) -> Result<usize, StoreError> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if !table_is_empty(&tx, "categories")? {
            tracing::debug!(table = "categories", "already populated, seed skipped");
            return Ok(0);
        }
        for category in rows {
            insert_category(&tx, category)?;
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn seed_products(&self, rows: &[Product]) -> Result<usize, StoreError> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if !table_is_empty(&tx, "products")? {
            tracing::debug!(table = "products", "already populated, seed skipped");
            return Ok(0);
        }
        for product in rows {
            insert_product(&tx, product)?;
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn seed_featured(&self, rows: &[FeaturedProduct]) -> Result<usize, StoreError> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if !table_is_empty(&tx, "featured_products")? {
            tracing::debug!(table = "featured_products", "already populated, seed skipped");
            return Ok(0);
        }
        for featured in rows {
            insert_featured(&tx, featured)?;
        }
        tx.commit()?;
        Ok(rows.len())
    }
}

fn table_is_empty(conn: &Connection, table: &str) -> Result<bool, StoreError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count == 0)
}

// ── row decoding ─────────────────────────────────────────────────────────

fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: read_id(row, 0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        subtitle: row.get(3)?,
        description: row.get(4)?,
        content: row.get(5)?,
        date: read_date(row, 6)?,
        date_modified: read_date(row, 7)?,
        category: row.get(8)?,
        reading_minutes: row.get(9)?,
        badges: read_string_list(row, 10)?,
        featured_image: row.get(11)?,
        header_image: row.get(12)?,
        status: row.get(13)?,
        seo_title: row.get(14)?,
        seo_description: row.get(15)?,
        og_image: row.get(16)?,
        canonical_url: row.get(17)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<ProductCategory> {
    Ok(ProductCategory {
        id: read_id(row, 0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        summary: row.get(3)?,
        how_this_helps: row.get(4)?,
        hero_image: row.get(5)?,
    })
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: read_id(row, 0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        problem: row.get(3)?,
        description: row.get(4)?,
        bullets: read_string_list(row, 5)?,
        image: row.get(6)?,
        external_url: row.get(7)?,
        price: row.get(8)?,
        product_page_url: row.get(9)?,
        category_id: read_id(row, 10)?,
        status: row.get(11)?,
    })
}

fn featured_from_row(row: &Row<'_>) -> rusqlite::Result<FeaturedProduct> {
    Ok(FeaturedProduct {
        id: read_id(row, 0)?,
        title: row.get(1)?,
        problem: row.get(2)?,
        bullets: read_string_list(row, 3)?,
        image: row.get(4)?,
        external_url: row.get(5)?,
        price: row.get(6)?,
        product_page_url: row.get(7)?,
    })
}

// ── single-row fetches and existence checks ──────────────────────────────

fn fetch_article(conn: &Connection, id: &EntityId) -> Result<Option<Article>, StoreError> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {ARTICLE_COLS} FROM articles WHERE id = ?1"))?;
    let mut rows = stmt.query_map(params![id.to_hex()], article_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn fetch_category(conn: &Connection, id: &EntityId) -> Result<Option<ProductCategory>, StoreError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {CATEGORY_COLS} FROM categories WHERE id = ?1"
    ))?;
    let mut rows = stmt.query_map(params![id.to_hex()], category_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn fetch_category_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<ProductCategory>, StoreError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {CATEGORY_COLS} FROM categories WHERE slug = ?1"
    ))?;
    let mut rows = stmt.query_map(params![slug], category_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn fetch_product(conn: &Connection, id: &EntityId) -> Result<Option<Product>, StoreError> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {PRODUCT_COLS} FROM products WHERE id = ?1"))?;
    let mut rows = stmt.query_map(params![id.to_hex()], product_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

/// Case-insensitive thanks to the slug column's NOCASE collation.
fn article_slug_taken(
    conn: &Connection,
    slug: &str,
    exclude: Option<&EntityId>,
) -> Result<bool, StoreError> {
    let excluded = exclude.map(EntityId::to_hex).unwrap_or_default();
    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = ?1 AND id <> ?2)",
        params![slug, excluded],
        |row| row.get(0),
    )?;
    Ok(taken)
}

fn category_slug_taken(
    conn: &Connection,
    slug: &str,
    exclude: Option<&EntityId>,
) -> Result<bool, StoreError> {
    let excluded = exclude.map(EntityId::to_hex).unwrap_or_default();
    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM categories WHERE slug = ?1 AND id <> ?2)",
        params![slug, excluded],
        |row| row.get(0),
    )?;
    Ok(taken)
}

fn product_pair_taken(
    conn: &Connection,
    category_id: &EntityId,
    slug: &str,
    exclude: Option<&EntityId>,
) -> Result<bool, StoreError> {
    let excluded = exclude.map(EntityId::to_hex).unwrap_or_default();
    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM products WHERE category_id = ?1 AND slug = ?2 AND id <> ?3)",
        params![category_id.to_hex(), slug, excluded],
        |row| row.get(0),
    )?;
    Ok(taken)
}

// ── inserts shared by interactive creates and seed bulk loads ────────────

fn insert_article(conn: &Connection, article: &Article) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO articles (id, slug, title, subtitle, description, content, date, \
         date_modified, category, reading_minutes, badges, featured_image, header_image, \
         status, seo_title, seo_description, og_image, canonical_url) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
    )?;
    stmt.execute(params![
        article.id.to_hex(),
        article.slug,
        article.title,
        article.subtitle,
        article.description,
        article.content,
        article.date.to_string(),
        article.date_modified.to_string(),
        article.category,
        article.reading_minutes,
        string_list_json(&article.badges),
        article.featured_image,
        article.header_image,
        article.status,
        article.seo_title,
        article.seo_description,
        article.og_image,
        article.canonical_url,
    ])?;
    Ok(())
}

fn insert_category(conn: &Connection, category: &ProductCategory) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO categories (id, slug, name, summary, how_this_helps, hero_image) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    stmt.execute(params![
        category.id.to_hex(),
        category.slug,
        category.name,
        category.summary,
        category.how_this_helps,
        category.hero_image,
    ])?;
    Ok(())
}

fn insert_product(conn: &Connection, product: &Product) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO products (id, title, slug, problem, description, bullets, image, \
         external_url, price, product_page_url, category_id, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )?;
    stmt.execute(params![
        product.id.to_hex(),
        product.title,
        product.slug,
        product.problem,
        product.description,
        string_list_json(&product.bullets),
        product.image,
        product.external_url,
        product.price,
        product.product_page_url,
        product.category_id.to_hex(),
        product.status,
    ])?;
    Ok(())
}

fn insert_featured(conn: &Connection, featured: &FeaturedProduct) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO featured_products (id, title, problem, bullets, image, external_url, \
         price, product_page_url) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    stmt.execute(params![
        featured.id.to_hex(),
        featured.title,
        featured.problem,
        string_list_json(&featured.bullets),
        featured.image,
        featured.external_url,
        featured.price,
        featured.product_page_url,
    ])?;
    Ok(())
}

// ── draft materialization ────────────────────────────────────────────────

fn article_from_draft(
    id: EntityId,
    draft: &ArticleDraft,
    date: chrono::NaiveDate,
    date_modified: chrono::NaiveDate,
) -> Article {
    Article {
        id,
        slug: draft.slug.clone(),
        title: draft.title.clone(),
        subtitle: draft.subtitle.clone(),
        description: draft.description.clone(),
        content: draft.content.clone(),
        date,
        date_modified,
        category: draft.category.clone(),
        reading_minutes: draft.reading_minutes,
        badges: draft.badges.clone(),
        featured_image: draft.featured_image.clone(),
        header_image: draft.header_image.clone(),
        status: draft.status.clone(),
        seo_title: draft.seo_title.clone(),
        seo_description: draft.seo_description.clone(),
        og_image: draft.og_image.clone(),
        canonical_url: draft.canonical_url.clone(),
    }
}

fn category_from_draft(id: EntityId, draft: &CategoryDraft) -> ProductCategory {
    ProductCategory {
        id,
        slug: draft.slug.clone(),
        name: draft.name.clone(),
        summary: draft.summary.clone(),
        how_this_helps: draft.how_this_helps.clone(),
        hero_image: draft.hero_image.clone(),
    }
}

fn product_from_draft(id: EntityId, draft: &ProductDraft) -> Product {
    Product {
        id,
        title: draft.title.clone(),
        slug: draft.slug.clone(),
        problem: draft.problem.clone(),
        description: draft.description.clone(),
        bullets: draft.bullets.clone(),
        image: draft.image.clone(),
        external_url: draft.external_url.clone(),
        price: draft.price.clone(),
        product_page_url: draft.product_page_url.clone(),
        category_id: draft.category_id,
        status: draft.status.clone(),
    }
}
