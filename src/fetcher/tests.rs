//! Tests for fetcher module

use super::download::HttpDownloadManager;
use super::extract::extract_zip;
use super::DownloadManager;
use std::io::Write;
use tempfile::TempDir;

fn fixture_zip() -> Vec<u8> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.add_directory("jsnli_1.1/", options).unwrap();
        zip.start_file("jsnli_1.1/dev.tsv", options).unwrap();
        zip.write_all("neutral\t\u{732b}\u{304c}\u{5bdd}\u{308b}\ta\n".as_bytes()).unwrap();
        zip.start_file("jsnli_1.1/train_w_filtering.tsv", options).unwrap();
        zip.write_all(b"entailment\ta\tb\n").unwrap();
        zip.finish().unwrap();
    }
    buffer.into_inner()
}

// =========================================================================
// Extraction Tests
// =========================================================================

#[test]
fn test_extract_zip_preserves_layout() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("jsnli.zip");
    std::fs::write(&archive, fixture_zip()).unwrap();

    let dest = dir.path().join("extracted");
    extract_zip(&archive, &dest).unwrap();

    assert!(dest.join("jsnli_1.1").is_dir());
    let dev = std::fs::read_to_string(dest.join("jsnli_1.1/dev.tsv")).unwrap();
    assert!(dev.starts_with("neutral\t"));
    assert!(dest.join("jsnli_1.1/train_w_filtering.tsv").is_file());
}

#[test]
fn test_extract_zip_missing_archive() {
    let dir = TempDir::new().unwrap();
    let result = extract_zip(&dir.path().join("absent.zip"), &dir.path().join("out"));
    assert!(result.is_err());
}

#[test]
fn test_extract_zip_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("not-a-zip.zip");
    std::fs::write(&archive, b"plain text").unwrap();

    let err = extract_zip(&archive, &dir.path().join("out")).unwrap_err();
    assert!(err.is_fetch_error());
}

// =========================================================================
// Cache Tests
// =========================================================================

#[test]
fn test_default_cache_dir_is_namespaced() {
    let dir = HttpDownloadManager::default_cache_dir();
    assert!(dir.ends_with("jsnli"));
}

#[test]
fn test_cache_dir_builder() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("corpus-cache");
    let manager = HttpDownloadManager::new().unwrap().cache_dir(cache.clone());

    // extraction path is rooted at the overridden cache dir
    let key = HttpDownloadManager::archive_key("https://example.com/a.zip");
    let expected = cache.join(format!("extracted-{key}"));
    std::fs::create_dir_all(&expected).unwrap();
    assert_eq!(manager.download_and_extract("https://example.com/a.zip").unwrap(), expected);
}

#[test]
fn test_archive_key_is_stable() {
    let a = HttpDownloadManager::archive_key("https://example.com/a.zip");
    let b = HttpDownloadManager::archive_key("https://example.com/a.zip");
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_archive_key_distinguishes_urls() {
    let a = HttpDownloadManager::archive_key("https://example.com/a.zip");
    let b = HttpDownloadManager::archive_key("https://example.com/b.zip");
    assert_ne!(a, b);
}

#[test]
fn test_cached_extraction_skips_network() {
    let dir = TempDir::new().unwrap();
    let manager = HttpDownloadManager::new().unwrap().cache_dir(dir.path());

    // pre-populate the cache; the URL is never dereferenced
    let url = "https://nonexistent.invalid/jsnli.zip";
    let extract_dir = dir.path().join(format!("extracted-{}", HttpDownloadManager::archive_key(url)));
    std::fs::create_dir_all(extract_dir.join("jsnli_1.1")).unwrap();

    let base = manager.download_and_extract(url).unwrap();
    assert_eq!(base, extract_dir);
}

#[test]
fn test_cached_archive_is_reused_without_download() {
    let dir = TempDir::new().unwrap();
    let manager = HttpDownloadManager::new().unwrap().cache_dir(dir.path());

    // a downloaded-but-unextracted archive is extracted locally
    let url = "https://nonexistent.invalid/jsnli.zip";
    let key = HttpDownloadManager::archive_key(url);
    std::fs::write(dir.path().join(format!("{key}.zip")), fixture_zip()).unwrap();

    let base = manager.download_and_extract(url).unwrap();
    assert!(base.join("jsnli_1.1/dev.tsv").is_file());
}
