//! Book service integration tests
//!
//! Runs the full service flow against the in-memory store, the same
//! backend the server falls back to without a database.

use byfood_app::books::{
    BookDraft, BookError, BookSearchParams, BookService, BookStore, MemoryBookStore, Page,
};

fn service() -> BookService {
    BookService::new(BookStore::Memory(MemoryBookStore::new()))
}

fn draft(title: &str, author: &str, publish_year: i64) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        publish_year,
    }
}

#[tokio::test]
async fn test_full_book_lifecycle() {
    let service = service();

    let stored = service
        .store_book(draft("Anatolian Flavors", "E. Kaya", 2018))
        .await
        .unwrap();

    let fetched = service.get_book(&stored.id).await.unwrap();
    assert_eq!(fetched.title, "Anatolian Flavors");

    let updated = service
        .update_book(&stored.id, draft("Anatolian Flavors, 2nd ed.", "E. Kaya", 2022))
        .await
        .unwrap();
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.publish_year, 2022);
    assert!(updated.updated_at >= updated.created_at);

    service.delete_book(&stored.id).await.unwrap();
    assert_eq!(service.get_book(&stored.id).await, Err(BookError::NotFound));
}

#[tokio::test]
async fn test_listing_is_ordered_and_paged() {
    let service = service();
    let mut ids = Vec::new();
    for i in 1..=25 {
        let book = service
            .store_book(draft(&format!("Volume {:02}", i), "Editor", 1990 + i))
            .await
            .unwrap();
        ids.push(book.id);
    }

    let (first, meta) = service
        .list_books(&BookSearchParams::default(), &Page::new(Some(1), Some(10)))
        .await
        .unwrap();
    assert_eq!(meta.total, 25);
    assert_eq!(meta.total_pages, 3);
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, ids[0]);

    let (last, _) = service
        .list_books(&BookSearchParams::default(), &Page::new(Some(3), Some(10)))
        .await
        .unwrap();
    assert_eq!(last.len(), 5);
    assert_eq!(last[4].id, ids[24]);

    // Past the end: still a normal, empty response.
    let (empty, meta) = service
        .list_books(&BookSearchParams::default(), &Page::new(Some(9), Some(10)))
        .await
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(meta.total, 25);
}

#[tokio::test]
async fn test_search_matches_title_or_author_case_insensitively() {
    let service = service();
    service
        .store_book(draft("Street Food of Istanbul", "G. Yilmaz", 2021))
        .await
        .unwrap();
    service
        .store_book(draft("Desserts", "Streeter", 2019))
        .await
        .unwrap();
    service
        .store_book(draft("Unrelated", "Nobody", 2000))
        .await
        .unwrap();

    let params = BookSearchParams {
        search: Some("STREET".to_string()),
    };
    let (data, meta) = service.list_books(&params, &Page::default()).await.unwrap();

    assert_eq!(meta.total, 2);
    assert!(data.iter().any(|b| b.title.contains("Street Food")));
    assert!(data.iter().any(|b| b.author == "Streeter"));
}

#[tokio::test]
async fn test_client_errors_are_distinguished_from_missing_data() {
    let service = service();

    assert_eq!(service.get_book("").await, Err(BookError::InvalidId));
    assert_eq!(
        service.get_book("not-a-valid-id").await,
        Err(BookError::InvalidId)
    );
    assert_eq!(service.get_book("424242").await, Err(BookError::NotFound));

    let err = service.store_book(draft("", "A", 2000)).await.unwrap_err();
    assert!(matches!(err, BookError::Validation(_)));
}
