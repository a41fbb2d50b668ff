//! Integration tests for error handling and edge cases.

use mergepdfs::error::{ErrorKind, MergeError};
use mergepdfs::merge::merge_pdfs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::write_labelled_pdf;

#[tokio::test]
async fn test_error_nonexistent_input() {
    let result = merge_pdfs(&[PathBuf::from("/nonexistent/file.pdf")]).await;

    let err = result.unwrap_err();
    assert!(matches!(err, MergeError::Read { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_error_invalid_pdf_names_file() {
    let dir = TempDir::new().unwrap();
    let good = write_labelled_pdf(&dir.path().join("good.pdf"), "good", 1);
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"This is not a PDF file").unwrap();

    let err = merge_pdfs(&[good, bad.clone()]).await.unwrap_err();

    match &err {
        MergeError::Decode { path, .. } => assert_eq!(path, &bad),
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert!(err.to_string().contains("bad.pdf"));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_error_truncated_pdf() {
    let dir = TempDir::new().unwrap();
    let full = write_labelled_pdf(&dir.path().join("full.pdf"), "full", 2);
    let bytes = std::fs::read(&full).unwrap();
    let truncated = dir.path().join("truncated.pdf");
    std::fs::write(&truncated, &bytes[..8]).unwrap();

    let err = merge_pdfs(&[truncated]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_first_failure_wins() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"garbage").unwrap();

    let err = merge_pdfs(&[PathBuf::from("/nonexistent/first.pdf"), bad])
        .await
        .unwrap_err();
    assert!(matches!(err, MergeError::Read { ref path, .. } if path.ends_with("first.pdf")));
}

#[tokio::test]
async fn test_empty_list_produces_empty_document() {
    let bytes = merge_pdfs(&[]).await.unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().is_empty());
}
