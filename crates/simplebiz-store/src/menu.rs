// SPDX-License-Identifier: Apache-2.0

use crate::db::Db;
use crate::error::{StoreError, StoreErrorCode};
use crate::rows::{read_date, read_id, read_timestamp};
use rusqlite::{params, Connection, Row};
use simplebiz_core::{now_utc, today_utc, EntityId};
use simplebiz_model::{
    MenuCategory, MenuCategoryDraft, MenuItem, MenuItemDraft, MenuItemPage, MenuPageDraft,
    MenuTree, MenuTreeCategory, MenuTreeItem,
};

const ITEM_COLS: &str = "id, title, description, status";

const CATEGORY_COLS: &str = "id, menu_item_id, title, description, status";

const PAGE_COLS: &str = "id, menu_category_id, slug, title, subtitle, description, content, \
     date, date_modified, featured_image, header_image, status, seo_title, seo_description, \
     og_image, canonical_url";

/// Menu store: the item → category → page hierarchy. Parent existence is
/// checked before writes; cascading deletion is the schema's foreign-key
/// action, not application code walking the tree.
#[derive(Clone)]
pub struct MenuStore {
    db: Db,
}

impl MenuStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    // ── menu items ───────────────────────────────────────────────────────

    pub fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {ITEM_COLS} FROM menu_items ORDER BY title"
        ))?;
        let rows = stmt.query_map([], item_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    /// Full hierarchy in one read: one title-ordered query per level,
    /// joined in memory.
    pub fn get_menu_tree(&self) -> Result<MenuTree, StoreError> {
        let conn = self.db.lock()?;

        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {ITEM_COLS} FROM menu_items ORDER BY title"
        ))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {CATEGORY_COLS} FROM menu_categories ORDER BY title"
        ))?;
        let categories = stmt
            .query_map([], category_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {PAGE_COLS} FROM menu_pages ORDER BY title"
        ))?;
        let pages = stmt
            .query_map([], page_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let tree_items = items
            .into_iter()
            .map(|item| {
                let tree_categories = categories
                    .iter()
                    .filter(|category| category.menu_item_id == item.id)
                    .map(|category| MenuTreeCategory {
                        category: category.clone(),
                        pages: pages
                            .iter()
                            .filter(|page| page.menu_category_id == category.id)
                            .cloned()
                            .collect(),
                    })
                    .collect();
                MenuTreeItem {
                    item,
                    categories: tree_categories,
                }
            })
            .collect();

        Ok(MenuTree { items: tree_items })
    }

    pub fn get_menu_item(&self, id: &EntityId) -> Result<MenuItem, StoreError> {
        let conn = self.db.lock()?;
        fetch_item(&conn, id)?.ok_or_else(|| StoreError::not_found("menu item", &id.to_hex()))
    }

    pub fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, StoreError> {
        let conn = self.db.lock()?;
        let item = MenuItem {
            id: EntityId::random(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
        };
        conn.execute(
            "INSERT INTO menu_items (id, title, description, status) VALUES (?1, ?2, ?3, ?4)",
            params![item.id.to_hex(), item.title, item.description, item.status],
        )?;
        Ok(item)
    }

    pub fn update_menu_item(
        &self,
        id: &EntityId,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, StoreError> {
        let conn = self.db.lock()?;
        if fetch_item(&conn, id)?.is_none() {
            return Err(StoreError::not_found("menu item", &id.to_hex()));
        }
        let item = MenuItem {
            id: *id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
        };
        conn.execute(
            "UPDATE menu_items SET title = ?2, description = ?3, status = ?4 WHERE id = ?1",
            params![item.id.to_hex(), item.title, item.description, item.status],
        )?;
        Ok(item)
    }

    pub fn delete_menu_item(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected =
            conn.execute("DELETE FROM menu_items WHERE id = ?1", params![id.to_hex()])?;
        if affected == 0 {
            return Err(StoreError::not_found("menu item", &id.to_hex()));
        }
        Ok(())
    }

    // ── menu categories ──────────────────────────────────────────────────

    pub fn list_menu_categories(
        &self,
        menu_item_id: Option<&EntityId>,
    ) -> Result<Vec<MenuCategory>, StoreError> {
        let conn = self.db.lock()?;
        let (sql, filter) = match menu_item_id {
            Some(id) => (
                format!(
                    "SELECT {CATEGORY_COLS} FROM menu_categories \
                     WHERE menu_item_id = ?1 ORDER BY title"
                ),
                Some(id.to_hex()),
            ),
            None => (
                format!("SELECT {CATEGORY_COLS} FROM menu_categories ORDER BY title"),
                None,
            ),
        };
        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = match filter {
            Some(value) => stmt.query_map(params![value], category_from_row)?,
            None => stmt.query_map([], category_from_row)?,
        };
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn get_menu_category(&self, id: &EntityId) -> Result<MenuCategory, StoreError> {
        let conn = self.db.lock()?;
        fetch_category(&conn, id)?
            .ok_or_else(|| StoreError::not_found("menu category", &id.to_hex()))
    }

    pub fn create_menu_category(
        &self,
        draft: &MenuCategoryDraft,
    ) -> Result<MenuCategory, StoreError> {
        let conn = self.db.lock()?;
        if fetch_item(&conn, &draft.menu_item_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("menu item not found: {}", draft.menu_item_id),
            ));
        }
        let category = MenuCategory {
            id: EntityId::random(),
            menu_item_id: draft.menu_item_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
        };
        conn.execute(
            "INSERT INTO menu_categories (id, menu_item_id, title, description, status) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                category.id.to_hex(),
                category.menu_item_id.to_hex(),
                category.title,
                category.description,
                category.status,
            ],
        )?;
        Ok(category)
    }

    pub fn update_menu_category(
        &self,
        id: &EntityId,
        draft: &MenuCategoryDraft,
    ) -> Result<MenuCategory, StoreError> {
        let conn = self.db.lock()?;
        if fetch_category(&conn, id)?.is_none() {
            return Err(StoreError::not_found("menu category", &id.to_hex()));
        }
        if fetch_item(&conn, &draft.menu_item_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("menu item not found: {}", draft.menu_item_id),
            ));
        }
        let category = MenuCategory {
            id: *id,
            menu_item_id: draft.menu_item_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
        };
        conn.execute(
            "UPDATE menu_categories SET menu_item_id = ?2, title = ?3, description = ?4, \
             status = ?5 WHERE id = ?1",
            params![
                category.id.to_hex(),
                category.menu_item_id.to_hex(),
                category.title,
                category.description,
                category.status,
            ],
        )?;
        Ok(category)
    }

    pub fn delete_menu_category(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected = conn.execute(
            "DELETE FROM menu_categories WHERE id = ?1",
            params![id.to_hex()],
        )?;
        if affected == 0 {
            return Err(StoreError::not_found("menu category", &id.to_hex()));
        }
        Ok(())
    }

    // ── menu pages ───────────────────────────────────────────────────────

    /// Both filters are optional and independently applicable. Newest
    /// publish date first.
    pub fn list_menu_pages(
        &self,
        menu_category_id: Option<&EntityId>,
        status: Option<&str>,
    ) -> Result<Vec<MenuItemPage>, StoreError> {
        let conn = self.db.lock()?;
        let category_filter = menu_category_id.map(EntityId::to_hex).unwrap_or_default();
        let status_filter = status.unwrap_or_default();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {PAGE_COLS} FROM menu_pages \
             WHERE (?1 = '' OR menu_category_id = ?1) AND (?2 = '' OR status = ?2) \
             ORDER BY date DESC"
        ))?;
        let rows = stmt.query_map(params![category_filter, status_filter], page_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn get_menu_page(&self, id: &EntityId) -> Result<MenuItemPage, StoreError> {
        let conn = self.db.lock()?;
        fetch_page(&conn, id)?.ok_or_else(|| StoreError::not_found("menu page", &id.to_hex()))
    }

    pub fn get_menu_page_by_slug(&self, slug: &str) -> Result<MenuItemPage, StoreError> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {PAGE_COLS} FROM menu_pages WHERE slug = ?1"
        ))?;
        let mut rows = stmt.query_map(params![slug], page_from_row)?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(StoreError::not_found("menu page", slug)),
        }
    }

    pub fn create_menu_page(&self, draft: &MenuPageDraft) -> Result<MenuItemPage, StoreError> {
        let conn = self.db.lock()?;
        if fetch_category(&conn, &draft.menu_category_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("menu category not found: {}", draft.menu_category_id),
            ));
        }
        if page_slug_taken(&conn, &draft.slug, None)? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("page slug already exists: {}", draft.slug),
            ));
        }
        let page = page_from_draft(EntityId::random(), draft, today_utc());
        insert_page(&conn, &page)?;
        Ok(page)
    }

    /// Re-checks parent existence and slug uniqueness, excluding the row's
    /// own identifier from the collision check.
    pub fn update_menu_page(
        &self,
        id: &EntityId,
        draft: &MenuPageDraft,
    ) -> Result<MenuItemPage, StoreError> {
        let conn = self.db.lock()?;
        let existing =
            fetch_page(&conn, id)?.ok_or_else(|| StoreError::not_found("menu page", &id.to_hex()))?;
        if fetch_category(&conn, &draft.menu_category_id)?.is_none() {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("menu category not found: {}", draft.menu_category_id),
            ));
        }
        if page_slug_taken(&conn, &draft.slug, Some(id))? {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("page slug already exists: {}", draft.slug),
            ));
        }
        let page = page_from_draft(*id, draft, existing.date);
        conn.execute(
            "UPDATE menu_pages SET menu_category_id = ?2, slug = ?3, title = ?4, subtitle = ?5, \
             description = ?6, content = ?7, date = ?8, date_modified = ?9, featured_image = ?10, \
             header_image = ?11, status = ?12, seo_title = ?13, seo_description = ?14, \
             og_image = ?15, canonical_url = ?16 WHERE id = ?1",
            params![
                page.id.to_hex(),
                page.menu_category_id.to_hex(),
                page.slug,
                page.title,
                page.subtitle,
                page.description,
                page.content,
                page.date.to_string(),
                page.date_modified.to_rfc3339(),
                page.featured_image,
                page.header_image,
                page.status,
                page.seo_title,
                page.seo_description,
                page.og_image,
                page.canonical_url,
            ],
        )?;
        Ok(page)
    }

    pub fn delete_menu_page(&self, id: &EntityId) -> Result<(), StoreError> {
        let conn = self.db.lock()?;
        let affected =
            conn.execute("DELETE FROM menu_pages WHERE id = ?1", params![id.to_hex()])?;
        if affected == 0 {
            return Err(StoreError::not_found("menu page", &id.to_hex()));
        }
        Ok(())
    }
}

// ── row decoding ─────────────────────────────────────────────────────────

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: read_id(row, 0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<MenuCategory> {
    Ok(MenuCategory {
        id: read_id(row, 0)?,
        menu_item_id: read_id(row, 1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        status: row.get(4)?,
    })
}

fn page_from_row(row: &Row<'_>) -> rusqlite::Result<MenuItemPage> {
    Ok(MenuItemPage {
        id: read_id(row, 0)?,
        menu_category_id: read_id(row, 1)?,
        slug: row.get(2)?,
        title: row.get(3)?,
        subtitle: row.get(4)?,
        description: row.get(5)?,
        content: row.get(6)?,
        date: read_date(row, 7)?,
        date_modified: read_timestamp(row, 8)?,
        featured_image: row.get(9)?,
        header_image: row.get(10)?,
        status: row.get(11)?,
        seo_title: row.get(12)?,
        seo_description: row.get(13)?,
        og_image: row.get(14)?,
        canonical_url: row.get(15)?,
    })
}

// ── fetches and checks ───────────────────────────────────────────────────

fn fetch_item(conn: &Connection, id: &EntityId) -> Result<Option<MenuItem>, StoreError> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {ITEM_COLS} FROM menu_items WHERE id = ?1"))?;
    let mut rows = stmt.query_map(params![id.to_hex()], item_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn fetch_category(conn: &Connection, id: &EntityId) -> Result<Option<MenuCategory>, StoreError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {CATEGORY_COLS} FROM menu_categories WHERE id = ?1"
    ))?;
    let mut rows = stmt.query_map(params![id.to_hex()], category_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn fetch_page(conn: &Connection, id: &EntityId) -> Result<Option<MenuItemPage>, StoreError> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {PAGE_COLS} FROM menu_pages WHERE id = ?1"))?;
    let mut rows = stmt.query_map(params![id.to_hex()], page_from_row)?;
    rows.next().transpose().map_err(StoreError::from)
}

fn page_slug_taken(
    conn: &Connection,
    slug: &str,
    exclude: Option<&EntityId>,
) -> Result<bool, StoreError> {
    let excluded = exclude.map(EntityId::to_hex).unwrap_or_default();
    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM menu_pages WHERE slug = ?1 AND id <> ?2)",
        params![slug, excluded],
        |row| row.get(0),
    )?;
    Ok(taken)
}

fn insert_page(conn: &Connection, page: &MenuItemPage) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO menu_pages (id, menu_category_id, slug, title, subtitle, description, \
         content, date, date_modified, featured_image, header_image, status, seo_title, \
         seo_description, og_image, canonical_url) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
    )?;
    stmt.execute(params![
        page.id.to_hex(),
        page.menu_category_id.to_hex(),
        page.slug,
        page.title,
        page.subtitle,
        page.description,
        page.content,
        page.date.to_string(),
        page.date_modified.to_rfc3339(),
        page.featured_image,
        page.header_image,
        page.status,
        page.seo_title,
        page.seo_description,
        page.og_image,
        page.canonical_url,
    ])?;
    Ok(())
}

fn page_from_draft(id: EntityId, draft: &MenuPageDraft, date: chrono::NaiveDate) -> MenuItemPage {
    MenuItemPage {
        id,
        menu_category_id: draft.menu_category_id,
        slug: draft.slug.clone(),
        title: draft.title.clone(),
        subtitle: draft.subtitle.clone(),
        description: draft.description.clone(),
        content: draft.content.clone(),
        date,
        date_modified: now_utc(),
        featured_image: draft.featured_image.clone(),
        header_image: draft.header_image.clone(),
        status: draft.status.clone(),
        seo_title: draft.seo_title.clone(),
        seo_description: draft.seo_description.clone(),
        og_image: draft.og_image.clone(),
        canonical_url: draft.canonical_url.clone(),
    }
}
