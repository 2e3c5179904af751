// SPDX-License-Identifier: Apache-2.0

use simplebiz_core::EntityId;
use simplebiz_model::{MenuCategoryDraft, MenuItemDraft, MenuPageDraft, STATUS_PUBLISHED};
use simplebiz_store::{Db, MenuStore, StoreErrorCode};

fn store() -> MenuStore {
    MenuStore::new(Db::open_in_memory().expect("open db"))
}

fn item_draft(title: &str) -> MenuItemDraft {
    MenuItemDraft {
        title: title.to_string(),
        description: None,
        status: STATUS_PUBLISHED.to_string(),
    }
}

fn category_draft(title: &str, menu_item_id: EntityId) -> MenuCategoryDraft {
    MenuCategoryDraft {
        menu_item_id,
        title: title.to_string(),
        description: None,
        status: STATUS_PUBLISHED.to_string(),
    }
}

fn page_draft(slug: &str, menu_category_id: EntityId) -> MenuPageDraft {
    MenuPageDraft {
        menu_category_id,
        slug: slug.to_string(),
        title: format!("Page {slug}"),
        subtitle: None,
        description: None,
        content: Some("body".to_string()),
        featured_image: None,
        header_image: None,
        status: STATUS_PUBLISHED.to_string(),
        seo_title: None,
        seo_description: None,
        og_image: None,
        canonical_url: None,
    }
}

#[test]
fn menu_items_list_title_ascending() {
    let store = store();
    store.create_menu_item(&item_draft("Services")).expect("services");
    store.create_menu_item(&item_draft("About")).expect("about");

    let titles: Vec<String> = store
        .list_menu_items()
        .expect("list")
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, ["About", "Services"]);
}

#[test]
fn menu_category_requires_an_existing_parent() {
    let store = store();
    let err = store
        .create_menu_category(&category_draft("Orphan", EntityId::random()))
        .expect_err("missing parent");
    assert_eq!(err.code, StoreErrorCode::Validation);
}

#[test]
fn menu_categories_filter_by_parent() {
    let store = store();
    let services = store.create_menu_item(&item_draft("Services")).expect("services");
    let about = store.create_menu_item(&item_draft("About")).expect("about");
    store
        .create_menu_category(&category_draft("Consulting", services.id))
        .expect("consulting");
    store
        .create_menu_category(&category_draft("Team", about.id))
        .expect("team");

    let filtered = store
        .list_menu_categories(Some(&services.id))
        .expect("filtered");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Consulting");

    assert_eq!(store.list_menu_categories(None).expect("all").len(), 2);
}

#[test]
fn page_slug_is_globally_unique() {
    let store = store();
    let item = store.create_menu_item(&item_draft("Item")).expect("item");
    let first = store
        .create_menu_category(&category_draft("First", item.id))
        .expect("first");
    let second = store
        .create_menu_category(&category_draft("Second", item.id))
        .expect("second");

    store
        .create_menu_page(&page_draft("shared", first.id))
        .expect("page in first");
    // a different parent does not free the slug
    let err = store
        .create_menu_page(&page_draft("shared", second.id))
        .expect_err("global slug collision");
    assert_eq!(err.code, StoreErrorCode::Conflict);
}

#[test]
fn page_create_and_update_validate_parent_first() {
    let store = store();
    let err = store
        .create_menu_page(&page_draft("lonely", EntityId::random()))
        .expect_err("missing category");
    assert_eq!(err.code, StoreErrorCode::Validation);

    let item = store.create_menu_item(&item_draft("Item")).expect("item");
    let category = store
        .create_menu_category(&category_draft("Cat", item.id))
        .expect("cat");
    let page = store
        .create_menu_page(&page_draft("real", category.id))
        .expect("page");

    let err = store
        .update_menu_page(&page.id, &page_draft("real", EntityId::random()))
        .expect_err("update onto missing category");
    assert_eq!(err.code, StoreErrorCode::Validation);
}

#[test]
fn page_update_excludes_its_own_slug() {
    let store = store();
    let item = store.create_menu_item(&item_draft("Item")).expect("item");
    let category = store
        .create_menu_category(&category_draft("Cat", item.id))
        .expect("cat");
    let page = store
        .create_menu_page(&page_draft("keep-me", category.id))
        .expect("page");
    let other = store
        .create_menu_page(&page_draft("other", category.id))
        .expect("other");

    let mut draft = page_draft("keep-me", category.id);
    draft.title = "Renamed".to_string();
    let updated = store.update_menu_page(&page.id, &draft).expect("update");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.date, page.date);
    assert!(updated.date_modified >= page.date_modified);

    let err = store
        .update_menu_page(&other.id, &page_draft("keep-me", category.id))
        .expect_err("stealing a slug");
    assert_eq!(err.code, StoreErrorCode::Conflict);
}

#[test]
fn page_listing_filters_are_independent() {
    let store = store();
    let item = store.create_menu_item(&item_draft("Item")).expect("item");
    let first = store
        .create_menu_category(&category_draft("First", item.id))
        .expect("first");
    let second = store
        .create_menu_category(&category_draft("Second", item.id))
        .expect("second");

    store
        .create_menu_page(&page_draft("a", first.id))
        .expect("a");
    let mut draft_page = page_draft("b", first.id);
    draft_page.status = "draft".to_string();
    store.create_menu_page(&draft_page).expect("b");
    store
        .create_menu_page(&page_draft("c", second.id))
        .expect("c");

    assert_eq!(store.list_menu_pages(None, None).expect("all").len(), 3);
    assert_eq!(
        store
            .list_menu_pages(Some(&first.id), None)
            .expect("by category")
            .len(),
        2
    );
    assert_eq!(
        store
            .list_menu_pages(None, Some(STATUS_PUBLISHED))
            .expect("by status")
            .len(),
        2
    );
    let both = store
        .list_menu_pages(Some(&first.id), Some(STATUS_PUBLISHED))
        .expect("both filters");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].slug, "a");
}

#[test]
fn menu_tree_nests_children_under_the_right_parents() {
    let store = store();
    let beta = store.create_menu_item(&item_draft("Beta")).expect("beta");
    let alpha = store.create_menu_item(&item_draft("Alpha")).expect("alpha");
    let alpha_cat = store
        .create_menu_category(&category_draft("Alpha Cat", alpha.id))
        .expect("alpha cat");
    let beta_cat = store
        .create_menu_category(&category_draft("Beta Cat", beta.id))
        .expect("beta cat");
    store
        .create_menu_page(&page_draft("alpha-page", alpha_cat.id))
        .expect("alpha page");
    store
        .create_menu_page(&page_draft("beta-page", beta_cat.id))
        .expect("beta page");

    let tree = store.get_menu_tree().expect("tree");
    assert_eq!(tree.items.len(), 2);
    assert_eq!(tree.items[0].item.title, "Alpha");
    assert_eq!(tree.items[1].item.title, "Beta");

    let alpha_node = &tree.items[0];
    assert_eq!(alpha_node.categories.len(), 1);
    assert_eq!(alpha_node.categories[0].category.title, "Alpha Cat");
    assert_eq!(alpha_node.categories[0].pages.len(), 1);
    assert_eq!(alpha_node.categories[0].pages[0].slug, "alpha-page");

    let beta_node = &tree.items[1];
    assert_eq!(beta_node.categories[0].pages[0].slug, "beta-page");
}

#[test]
fn deleting_parents_cascades_transitively() {
    let store = store();
    let item = store.create_menu_item(&item_draft("Item")).expect("item");
    let category = store
        .create_menu_category(&category_draft("Cat", item.id))
        .expect("cat");
    let page = store
        .create_menu_page(&page_draft("leaf", category.id))
        .expect("leaf");

    store.delete_menu_item(&item.id).expect("delete root");

    assert_eq!(
        store
            .get_menu_category(&category.id)
            .expect_err("category gone")
            .code,
        StoreErrorCode::NotFound
    );
    assert_eq!(
        store.get_menu_page(&page.id).expect_err("page gone").code,
        StoreErrorCode::NotFound
    );
    assert!(store.list_menu_pages(None, None).expect("list").is_empty());
}

#[test]
fn missing_rows_are_not_found() {
    let store = store();
    let ghost = EntityId::random();
    assert_eq!(
        store.get_menu_item(&ghost).expect_err("item").code,
        StoreErrorCode::NotFound
    );
    assert_eq!(
        store.delete_menu_category(&ghost).expect_err("category").code,
        StoreErrorCode::NotFound
    );
    assert_eq!(
        store.delete_menu_page(&ghost).expect_err("page").code,
        StoreErrorCode::NotFound
    );
    assert_eq!(
        store
            .update_menu_item(&ghost, &item_draft("x"))
            .expect_err("update item")
            .code,
        StoreErrorCode::NotFound
    );
}
