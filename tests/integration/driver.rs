//! Integration tests for the full selection -> merge -> write -> notify flow.

use mergepdfs::command::{FAILURE_TITLE, MergeCommand, SUCCESS_TITLE};
use mergepdfs::error::MergeError;
use mergepdfs::notify::{Toast, ToastStyle};
use mergepdfs::selection::{ListFileSelection, StaticSelection};
use tempfile::TempDir;

use crate::common::{FixedSelection, RecordingSink, labels, page_labels, write_labelled_pdf};

#[tokio::test]
async fn test_merge_into_shared_directory() {
    let dir = TempDir::new().unwrap();
    let a = write_labelled_pdf(&dir.path().join("a.pdf"), "a", 2);
    let report_pdf = write_labelled_pdf(&dir.path().join("Report.PDF"), "r", 1);
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"not a pdf").unwrap();

    let sink = RecordingSink::default();
    let report = MergeCommand::new()
        .with_home(dir.path().join("home"))
        .run(&FixedSelection(vec![report_pdf, notes, a]), &sink)
        .await
        .unwrap();

    let output = dir.path().join("merged.pdf");
    assert_eq!(report.output_path, output);
    assert_eq!(report.files_merged, 2);
    assert_eq!(page_labels(&output), [labels("r", 1), labels("a", 2)].concat());

    assert_eq!(
        sink.toasts(),
        vec![Toast::success(SUCCESS_TITLE).with_message(format!("Saved to {}", output.display()))]
    );
}

#[tokio::test]
async fn test_scattered_selection_lands_in_downloads() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("x")).unwrap();
    std::fs::create_dir_all(dir.path().join("y")).unwrap();
    let a = write_labelled_pdf(&dir.path().join("x").join("a.pdf"), "a", 1);
    let b = write_labelled_pdf(&dir.path().join("y").join("b.pdf"), "b", 1);
    let home = dir.path().join("home");

    let report = MergeCommand::new()
        .with_home(&home)
        .run(&FixedSelection(vec![a, b]), &RecordingSink::default())
        .await
        .unwrap();

    let expected = home.join("Downloads").join("merged.pdf");
    assert_eq!(report.output_path, expected);
    assert_eq!(page_labels(&expected), vec!["a-1", "b-1"]);
}

#[tokio::test]
async fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let a = write_labelled_pdf(&dir.path().join("a.pdf"), "a", 1);
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"stale").unwrap();

    MergeCommand::new()
        .with_home(dir.path())
        .run(&FixedSelection(vec![a]), &RecordingSink::default())
        .await
        .unwrap();

    assert_eq!(page_labels(&output), vec!["a-1"]);
    assert!(!dir.path().join(".merged.pdf.part").exists());
}

#[tokio::test]
async fn test_no_pdf_selected_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"text").unwrap();

    let sink = RecordingSink::default();
    let err = MergeCommand::new()
        .with_home(dir.path())
        .run(&FixedSelection(vec![notes]), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::NoPdfSelected));
    assert_eq!(sink.toasts(), vec![Toast::failure("No PDF files selected")]);
    assert!(!dir.path().join("merged.pdf").exists());
}

#[tokio::test]
async fn test_empty_selection() {
    let dir = TempDir::new().unwrap();
    let sink = RecordingSink::default();

    let err = MergeCommand::new()
        .with_home(dir.path())
        .run(&FixedSelection(Vec::new()), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::NoPdfSelected));
    assert_eq!(sink.toasts().len(), 1);
}

#[tokio::test]
async fn test_decode_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let a = write_labelled_pdf(&dir.path().join("a.pdf"), "a", 1);
    let bad = dir.path().join("broken.pdf");
    std::fs::write(&bad, b"%PDF-1.4 but nothing else").unwrap();

    let sink = RecordingSink::default();
    let err = MergeCommand::new()
        .with_home(dir.path())
        .run(&FixedSelection(vec![a, bad]), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Decode { .. }));
    assert!(!dir.path().join("merged.pdf").exists());

    let toasts = sink.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].style, ToastStyle::Failure);
    assert_eq!(toasts[0].title, FAILURE_TITLE);
    assert_eq!(toasts[0].message.as_deref(), Some(err.to_string().as_str()));
}

#[tokio::test]
async fn test_missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.pdf");

    let sink = RecordingSink::default();
    let err = MergeCommand::new()
        .with_home(dir.path())
        .run(&FixedSelection(vec![missing]), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Read { .. }));
    assert!(sink.toasts()[0].message.as_deref().unwrap().contains("gone.pdf"));
}

#[tokio::test]
async fn test_selection_from_list_file() {
    let dir = TempDir::new().unwrap();
    let a = write_labelled_pdf(&dir.path().join("a.pdf"), "a", 1);
    let b = write_labelled_pdf(&dir.path().join("b.pdf"), "b", 2);
    let list = dir.path().join("selection.txt");
    std::fs::write(
        &list,
        format!("# merge order\n{}\n\n{}\n", b.display(), a.display()),
    )
    .unwrap();

    let report = MergeCommand::new()
        .with_home(dir.path())
        .run(&ListFileSelection::new(&list), &RecordingSink::default())
        .await
        .unwrap();

    assert_eq!(
        page_labels(&report.output_path),
        [labels("b", 2), labels("a", 1)].concat()
    );
}

#[tokio::test]
async fn test_write_failure_when_downloads_cannot_be_created() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("x")).unwrap();
    std::fs::create_dir_all(dir.path().join("y")).unwrap();
    let a = write_labelled_pdf(&dir.path().join("x").join("a.pdf"), "a", 1);
    let b = write_labelled_pdf(&dir.path().join("y").join("b.pdf"), "b", 1);
    // A regular file where the home directory should be
    let home = dir.path().join("home");
    std::fs::write(&home, b"not a directory").unwrap();

    let sink = RecordingSink::default();
    let err = MergeCommand::new()
        .with_home(&home)
        .run(&FixedSelection(vec![a, b]), &sink)
        .await
        .unwrap_err();

    let expected = home.join("Downloads").join("merged.pdf");
    assert!(matches!(err, MergeError::Write { ref path, .. } if path == &expected));

    let toasts = sink.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].style, ToastStyle::Failure);
    assert_eq!(toasts[0].title, FAILURE_TITLE);
    assert_eq!(toasts[0].message.as_deref(), Some(err.to_string().as_str()));
}

#[tokio::test]
async fn test_write_failure_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let a = write_labelled_pdf(&dir.path().join("a.pdf"), "a", 1);
    let b = write_labelled_pdf(&dir.path().join("b.pdf"), "b", 1);
    // The final rename cannot replace a directory
    let blocker = dir.path().join("merged.pdf");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep.txt"), b"keep").unwrap();

    let sink = RecordingSink::default();
    let err = MergeCommand::new()
        .with_home(dir.path().join("home"))
        .run(&FixedSelection(vec![a, b]), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Write { ref path, .. } if path == &blocker));
    assert!(!dir.path().join(".merged.pdf.part").exists());
    assert!(blocker.join("keep.txt").exists());

    let toasts = sink.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].style, ToastStyle::Failure);
    assert_eq!(toasts[0].title, FAILURE_TITLE);
}

#[tokio::test]
async fn test_bracketed_file_name_is_taken_literally() {
    let dir = TempDir::new().unwrap();
    let wanted = write_labelled_pdf(&dir.path().join("scan[1].pdf"), "wanted", 1);
    write_labelled_pdf(&dir.path().join("scan1.pdf"), "other", 1);

    let selection = StaticSelection::new([wanted.to_string_lossy().into_owned()]);
    let report = MergeCommand::new()
        .with_home(dir.path().join("home"))
        .run(&selection, &RecordingSink::default())
        .await
        .unwrap();

    assert_eq!(report.files_merged, 1);
    assert_eq!(page_labels(&report.output_path), vec!["wanted-1"]);
}

#[tokio::test]
async fn test_file_name_with_unclosed_bracket() {
    let dir = TempDir::new().unwrap();
    let odd = write_labelled_pdf(&dir.path().join("x[.pdf"), "odd", 2);

    let selection = StaticSelection::new([odd.to_string_lossy().into_owned()]);
    let report = MergeCommand::new()
        .with_home(dir.path().join("home"))
        .run(&selection, &RecordingSink::default())
        .await
        .unwrap();

    assert_eq!(page_labels(&report.output_path), labels("odd", 2));
}
