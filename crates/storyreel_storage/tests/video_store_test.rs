//! Tests for the filesystem video store.

use storyreel_storage::{VideoStore, PLACEHOLDER_FILENAME};

#[tokio::test]
async fn store_embeds_story_id_in_filename() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();

    let url = store.store(42, b"fake mp4 bytes").await.unwrap();

    assert!(url.starts_with("/videos/story_42_"), "unexpected url {url}");
    assert!(url.ends_with(".mp4"));

    let filename = url.strip_prefix("/videos/").unwrap();
    let on_disk = std::fs::read(temp_dir.path().join(filename)).unwrap();
    assert_eq!(on_disk, b"fake mp4 bytes");
}

#[tokio::test]
async fn repeated_stores_do_not_collide() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();

    store.store(7, b"first").await.unwrap();
    // Second write lands at a distinct path or, within the same second,
    // replaces atomically; either way the directory only ever holds
    // complete files.
    store.store(7, b"second").await.unwrap();

    let files: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert!(files.iter().all(|f| !f.ends_with(".tmp")));
}

#[tokio::test]
async fn placeholder_is_provisioned_once() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();

    store.provision_placeholder().await.unwrap();
    let path = temp_dir.path().join(PLACEHOLDER_FILENAME);
    let first = std::fs::read(&path).unwrap();
    assert!(!first.is_empty());

    // Second call is a no-op and leaves the file untouched.
    store.provision_placeholder().await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), first);

    assert_eq!(store.placeholder_url(), "/videos/placeholder.mp4");
}
