use crate::domain::Page;
use crate::store::PageStore;
use crate::store::local::LocalPageStore;
use tempfile::tempdir;

// every store test works against a throwaway directory so nothing leaks
// between tests or into the repo
fn setup_test_store() -> (tempfile::TempDir, LocalPageStore) {
    let dir = tempdir().expect("Should create temp dir");
    let store = LocalPageStore::new(dir.path().to_path_buf());
    (dir, store)
}

// test the store's ability to save and retrieve pages
#[tokio::test]
async fn test_store_save_then_load_round_trip() {
    let (_dir, store) = setup_test_store();

    let page = Page::new("Test".to_string(), "hello".to_string());
    store.save_page(&page).await.expect("Should save page");

    // the page lands on disk as exactly <title>.txt holding exactly the body
    let on_disk = std::fs::read_to_string(store.root().join("Test.txt"))
        .expect("Should read the page file directly");
    assert_eq!(on_disk, "hello");

    // and it comes back identical through the store
    let loaded = store
        .load_page("Test")
        .await
        .expect("Should query")
        .expect("Should find page");
    assert_eq!(loaded, page);
}

// a title with no file behind it is a None, not an error
#[tokio::test]
async fn test_store_load_missing_is_none() {
    let (_dir, store) = setup_test_store();

    let loaded = store.load_page("Ghost").await.expect("Should query");
    assert!(loaded.is_none());
}

// concurrent saves have no conflict detection, the last writer simply wins
#[tokio::test]
async fn test_store_overwrite_last_writer_wins() {
    let (_dir, store) = setup_test_store();

    let first = Page::new("Foo".to_string(), "first".to_string());
    store.save_page(&first).await.unwrap();

    let second = Page::new("Foo".to_string(), "second".to_string());
    store.save_page(&second).await.unwrap();

    let loaded = store.load_page("Foo").await.unwrap().unwrap();
    assert_eq!(loaded.body, "second");
}

// bodies are stored as-is, newlines and all
#[tokio::test]
async fn test_store_body_survives_multiline_content() {
    let (_dir, store) = setup_test_store();

    let body = "line one\nline two\n\n  indented\n";
    let page = Page::new("Multi".to_string(), body.to_string());
    store.save_page(&page).await.unwrap();

    let loaded = store.load_page("Multi").await.unwrap().unwrap();
    assert_eq!(loaded.body, body);
}

// the title listing only reports things that could have come through a save
#[tokio::test]
async fn test_store_list_titles_ignores_foreign_files() {
    let (_dir, store) = setup_test_store();

    store
        .save_page(&Page::new("Beta".to_string(), "b".to_string()))
        .await
        .unwrap();
    store
        .save_page(&Page::new("Alpha".to_string(), "a".to_string()))
        .await
        .unwrap();

    // drop some files into the directory that are not pages
    std::fs::write(store.root().join("notes.md"), "not a page").unwrap();
    std::fs::write(store.root().join("bad name.txt"), "invalid stem").unwrap();
    std::fs::create_dir(store.root().join("nested")).unwrap();
    std::fs::write(store.root().join("nested").join("Deep.txt"), "too deep").unwrap();

    let titles = store.list_titles().await.expect("Should list titles");
    assert_eq!(titles, vec!["Alpha".to_string(), "Beta".to_string()]);
}

// an empty body is a legal page, the file just ends up zero bytes
#[tokio::test]
async fn test_store_empty_body_round_trip() {
    let (_dir, store) = setup_test_store();

    let page = Page::new("Empty".to_string(), String::new());
    store.save_page(&page).await.unwrap();

    let loaded = store.load_page("Empty").await.unwrap().unwrap();
    assert_eq!(loaded.body, "");
}
