//! Helpers shared by the integration tests.
//!
//! PDFs are generated on the fly with `lopdf`. Every page carries a
//! `/Label` name such as `a-2`, so tests can check page order after a
//! merge without rendering anything.

#![allow(dead_code)]

use futures::FutureExt;
use futures::future::BoxFuture;
use lopdf::{Document, Object, Stream, dictionary};
use mergepdfs::notify::{NotificationSink, Toast};
use mergepdfs::selection::{SelectedItem, SelectionProvider};
use mergepdfs::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Write a PDF with `pages` pages labelled `{tag}-1` .. `{tag}-N`.
pub fn write_labelled_pdf(path: &Path, tag: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for n in 1..=pages {
        let text = format!("BT /F1 24 Tf 72 720 Td ({tag} page {n}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Label" => Object::Name(format!("{tag}-{n}").into_bytes()),
        });
        kids.push(Object::Reference(page_id));
    }

    // MediaBox and Resources are inherited from the page tree root.
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to write test PDF");
    path.to_path_buf()
}

/// Page labels of the PDF at `path`, in page order.
pub fn page_labels(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    labels_of(&doc)
}

/// Page labels of `doc`, in page order.
pub fn labels_of(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let page = doc.get_dictionary(page_id).expect("page dictionary");
            let label = page.get(b"Label").and_then(Object::as_name).expect("page label");
            String::from_utf8_lossy(label).into_owned()
        })
        .collect()
}

/// Expected labels for a file tagged `tag` with `pages` pages.
pub fn labels(tag: &str, pages: usize) -> Vec<String> {
    (1..=pages).map(|n| format!("{tag}-{n}")).collect()
}

/// Selection provider returning a fixed list, without glob expansion.
pub struct FixedSelection(pub Vec<PathBuf>);

impl SelectionProvider for FixedSelection {
    fn selected_items(&self) -> BoxFuture<'_, Result<Vec<SelectedItem>>> {
        let items: Vec<SelectedItem> = self.0.iter().cloned().map(SelectedItem::from).collect();
        async move { Ok(items) }.boxed()
    }
}

/// Sink that remembers every toast it is shown.
#[derive(Clone, Default)]
pub struct RecordingSink(Arc<Mutex<Vec<Toast>>>);

impl RecordingSink {
    pub fn toasts(&self) -> Vec<Toast> {
        self.0.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn show(&self, toast: &Toast) {
        self.0.lock().unwrap().push(toast.clone());
    }
}
