// SPDX-License-Identifier: Apache-2.0

use crate::error::{StoreError, StoreErrorCode};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS articles (
      id TEXT PRIMARY KEY,
      slug TEXT NOT NULL COLLATE NOCASE,
      title TEXT NOT NULL,
      subtitle TEXT,
      description TEXT,
      content TEXT,
      date TEXT NOT NULL,
      date_modified TEXT NOT NULL,
      category TEXT,
      reading_minutes INTEGER NOT NULL DEFAULT 0,
      badges TEXT NOT NULL DEFAULT '[]',
      featured_image TEXT,
      header_image TEXT,
      status TEXT NOT NULL,
      seo_title TEXT,
      seo_description TEXT,
      og_image TEXT,
      canonical_url TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS idx_articles_slug ON articles(slug);
    CREATE INDEX IF NOT EXISTS idx_articles_status ON articles(status);

    CREATE TABLE IF NOT EXISTS categories (
      id TEXT PRIMARY KEY,
      slug TEXT NOT NULL,
      name TEXT NOT NULL,
      summary TEXT,
      how_this_helps TEXT,
      hero_image TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_slug ON categories(slug);

    CREATE TABLE IF NOT EXISTS products (
      id TEXT PRIMARY KEY,
      title TEXT NOT NULL,
      slug TEXT NOT NULL,
      problem TEXT,
      description TEXT,
      bullets TEXT NOT NULL DEFAULT '[]',
      image TEXT,
      external_url TEXT,
      price TEXT,
      product_page_url TEXT,
      category_id TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
      status TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id);
    CREATE UNIQUE INDEX IF NOT EXISTS idx_products_category_slug
      ON products(category_id, slug);

    CREATE TABLE IF NOT EXISTS featured_products (
      id TEXT PRIMARY KEY,
      title TEXT NOT NULL,
      problem TEXT,
      bullets TEXT NOT NULL DEFAULT '[]',
      image TEXT,
      external_url TEXT,
      price TEXT,
      product_page_url TEXT
    );

    CREATE TABLE IF NOT EXISTS menu_items (
      id TEXT PRIMARY KEY,
      title TEXT NOT NULL,
      description TEXT,
      status TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS menu_categories (
      id TEXT PRIMARY KEY,
      menu_item_id TEXT NOT NULL REFERENCES menu_items(id) ON DELETE CASCADE,
      title TEXT NOT NULL,
      description TEXT,
      status TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_menu_categories_item ON menu_categories(menu_item_id);

    CREATE TABLE IF NOT EXISTS menu_pages (
      id TEXT PRIMARY KEY,
      menu_category_id TEXT NOT NULL REFERENCES menu_categories(id) ON DELETE CASCADE,
      slug TEXT NOT NULL,
      title TEXT NOT NULL,
      subtitle TEXT,
      description TEXT,
      content TEXT,
      date TEXT NOT NULL,
      date_modified TEXT NOT NULL,
      featured_image TEXT,
      header_image TEXT,
      status TEXT NOT NULL,
      seo_title TEXT,
      seo_description TEXT,
      og_image TEXT,
      canonical_url TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS idx_menu_pages_slug ON menu_pages(slug);
    CREATE INDEX IF NOT EXISTS idx_menu_pages_category ON menu_pages(menu_category_id);

    CREATE TABLE IF NOT EXISTS simplebiz_meta (
      k TEXT PRIMARY KEY,
      v TEXT NOT NULL
    );
";

/// Shared connection handle. All stores and the seeder write through the
/// same connection, so the schema's constraints apply to both interactively
/// created and bulk-seeded rows.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        // Foreign keys are a per-connection setting; cascade deletion
        // depends on it.
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO simplebiz_meta (k, v) VALUES ('schema_version', ?1)",
            [SCHEMA_VERSION.to_string()],
        )?;
        tracing::debug!(schema_version = SCHEMA_VERSION, "database ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::new(StoreErrorCode::Internal, "connection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_records_schema_version_once() {
        let db = Db::open_in_memory().expect("open");
        let conn = db.lock().expect("lock");
        let version: String = conn
            .query_row(
                "SELECT v FROM simplebiz_meta WHERE k = 'schema_version'",
                [],
                |row| row.get(0),
            )
            .expect("version row");
        assert_eq!(version, SCHEMA_VERSION.to_string());
    }

    #[test]
    fn reopening_an_existing_database_is_idempotent() {
        let dir = tempfile::tempdir().expect("tmp");
        let path = dir.path().join("content.db");
        drop(Db::open(&path).expect("first open"));
        drop(Db::open(&path).expect("second open"));
    }
}
