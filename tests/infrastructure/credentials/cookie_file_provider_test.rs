use std::sync::Arc;

use futures::future::join_all;
use tempfile::TempDir;

use audiograb::application::ports::CredentialProvider;
use audiograb::infrastructure::credentials::{CookieFileProvider, DEFAULT_SCRATCH_FILE_NAME};

const COOKIES: &str = "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\tTRUE\t0\tSID\tabc";

#[tokio::test]
async fn given_inline_content_when_resolving_then_writes_scratch_file() {
    let dir = TempDir::new().unwrap();
    let scratch = dir.path().join(DEFAULT_SCRATCH_FILE_NAME);
    let provider = CookieFileProvider::new(Some(COOKIES.to_string()), scratch.clone(), None);

    let credential = provider.resolve().await.unwrap();

    assert_eq!(credential.cookie_file(), Some(scratch.as_path()));
    assert_eq!(std::fs::read_to_string(&scratch).unwrap(), COOKIES);
}

#[tokio::test]
async fn given_inline_and_local_file_when_resolving_then_inline_wins() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("cookies.txt");
    std::fs::write(&local, "local").unwrap();
    let scratch = dir.path().join(DEFAULT_SCRATCH_FILE_NAME);
    let provider = CookieFileProvider::new(Some(COOKIES.to_string()), scratch.clone(), Some(local));

    let credential = provider.resolve().await.unwrap();

    assert_eq!(credential.cookie_file(), Some(scratch.as_path()));
}

#[tokio::test]
async fn given_only_local_file_when_resolving_then_uses_it() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("cookies.txt");
    std::fs::write(&local, "local").unwrap();
    let provider = CookieFileProvider::new(
        None,
        dir.path().join(DEFAULT_SCRATCH_FILE_NAME),
        Some(local.clone()),
    );

    let credential = provider.resolve().await.unwrap();

    assert_eq!(credential.cookie_file(), Some(local.as_path()));
}

#[tokio::test]
async fn given_blank_inline_and_missing_local_when_resolving_then_anonymous() {
    let dir = TempDir::new().unwrap();
    let provider = CookieFileProvider::new(
        Some("  \n".to_string()),
        dir.path().join(DEFAULT_SCRATCH_FILE_NAME),
        Some(dir.path().join("absent.txt")),
    );

    let credential = provider.resolve().await.unwrap();

    assert!(credential.is_anonymous());
    assert!(!provider.has_inline_content());
}

#[tokio::test]
async fn given_stale_scratch_file_when_resolving_then_overwrites_it() {
    let dir = TempDir::new().unwrap();
    let scratch = dir.path().join(DEFAULT_SCRATCH_FILE_NAME);
    std::fs::write(&scratch, "old cookies that are much longer than the new ones").unwrap();
    let provider = CookieFileProvider::new(Some("new".to_string()), scratch.clone(), None);

    provider.resolve().await.unwrap();

    assert_eq!(std::fs::read_to_string(&scratch).unwrap(), "new");
}

#[tokio::test]
async fn given_concurrent_resolves_when_running_then_file_is_always_complete() {
    let dir = TempDir::new().unwrap();
    let scratch = dir.path().join(DEFAULT_SCRATCH_FILE_NAME);
    let provider = Arc::new(CookieFileProvider::new(
        Some(COOKIES.to_string()),
        scratch.clone(),
        None,
    ));

    let results = join_all((0..16).map(|_| provider.resolve())).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(std::fs::read_to_string(&scratch).unwrap(), COOKIES);
    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
