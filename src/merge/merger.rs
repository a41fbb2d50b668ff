//! Core PDF merging implementation.
//!
//! Pages are appended, file by file, to a single accumulator document that
//! starts out empty. Inputs are processed strictly in the order given; the
//! accumulator's page list is append-only and never shared.

use lopdf::{Document, Object, ObjectId, dictionary};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergeError, Result};
use crate::io::PdfReader;
use crate::utils::format_file_size;

/// PDF version written into the merged document header.
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// Page attributes a page may inherit from its ancestors in the page tree.
///
/// The accumulator's page tree is flat, so these are copied onto each page
/// before it is detached from its original parent.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Options controlling how the merged document is serialized.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Compress content streams before serializing.
    pub compress: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// Page count contributed by one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    /// Path of the input file.
    pub path: PathBuf,

    /// Number of pages copied from it.
    pub page_count: usize,
}

/// Statistics about a merge operation.
#[derive(Debug, Clone, Serialize)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Per-input page counts, in merge order.
    pub sources: Vec<SourceSummary>,

    /// Total size of input files.
    pub input_size: u64,

    /// Time spent reading and decoding inputs.
    pub load_time: Duration,

    /// Total time taken for the merge, serialization included.
    pub merge_time: Duration,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The serialized merged PDF.
    pub bytes: Vec<u8>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// PDF merger that concatenates the pages of several documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    options: MergeOptions,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with custom options.
    pub fn with_options(options: MergeOptions) -> Self {
        Self {
            reader: PdfReader::new(),
            options,
        }
    }

    /// Merge the PDFs at `paths`, in order, into one serialized document.
    ///
    /// Page N of the output is the page obtained by concatenating every
    /// input's pages in input order. A single input is re-encoded through
    /// the same path, and an input with zero pages contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input cannot be read ([`MergeError::Read`])
    /// - An input is not a valid PDF ([`MergeError::Decode`])
    /// - The accumulator's page tree cannot be updated
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use mergepdfs::merge::Merger;
    /// # use std::path::PathBuf;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let paths = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let result = Merger::new().merge(&paths).await?;
    /// println!("Merged {} files into {} pages",
    ///          result.statistics.files_merged,
    ///          result.statistics.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, paths: &[PathBuf]) -> Result<MergeResult> {
        let merge_start = Instant::now();
        let mut accumulator = Accumulator::new();

        let mut load_time = Duration::ZERO;
        let mut input_size = 0;
        let mut sources = Vec::with_capacity(paths.len());

        for (idx, path) in paths.iter().enumerate() {
            let loaded = self.reader.load(path).await?;
            load_time += loaded.load_time;
            input_size += loaded.file_size;

            let page_count = accumulator.append_document(&loaded.path, loaded.document)?;
            tracing::debug!(
                index = idx + 1,
                total = paths.len(),
                path = %loaded.path.display(),
                pages = page_count,
                "appended document"
            );

            sources.push(SourceSummary {
                path: loaded.path,
                page_count,
            });
        }

        let total_pages = accumulator.page_count();
        let bytes = accumulator.finish(self.options.compress)?;

        let statistics = MergeStatistics {
            files_merged: sources.len(),
            total_pages,
            sources,
            input_size,
            load_time,
            merge_time: merge_start.elapsed(),
        };

        tracing::info!(
            files = statistics.files_merged,
            pages = statistics.total_pages,
            bytes = bytes.len(),
            "merge complete"
        );

        Ok(MergeResult { bytes, statistics })
    }
}

/// The single in-memory document pages are appended to.
struct Accumulator {
    document: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl Accumulator {
    /// An empty document: a catalog pointing at a page tree with no kids.
    fn new() -> Self {
        let mut document = Document::with_version(OUTPUT_PDF_VERSION);

        let pages_id = document.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            page_count: 0,
        }
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    /// Move every page of `doc` to the end of the accumulator.
    ///
    /// Returns the number of pages appended.
    fn append_document(&mut self, path: &Path, mut doc: Document) -> Result<usize> {
        // Avoid object id collisions by renumbering the incoming document
        doc.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &page_ids {
            flatten_inherited_attributes(&mut doc, page_id).map_err(|reason| {
                MergeError::decode(path.to_path_buf(), reason)
            })?;
        }

        self.document.max_id = self.document.max_id.max(doc.max_id);
        self.document.objects.extend(doc.objects);

        self.append_pages(&page_ids)?;

        Ok(page_ids.len())
    }

    /// Re-parent the given pages and add them to the end of `Kids`.
    fn append_pages(&mut self, page_ids: &[ObjectId]) -> Result<()> {
        let pages_id = self.pages_id;

        for &page_id in page_ids {
            let page = self.document.get_dictionary_mut(page_id).map_err(|e| {
                MergeError::merge_failed(format!("Failed to get page {page_id:?}: {e}"))
            })?;
            page.set("Parent", pages_id);
        }

        let pages_dict = self
            .document
            .get_dictionary_mut(pages_id)
            .map_err(|e| MergeError::merge_failed(format!("Failed to get pages object: {e}")))?;

        let kids = pages_dict
            .get_mut(b"Kids")
            .and_then(|kids| kids.as_array_mut())
            .map_err(|_| MergeError::merge_failed("Pages dictionary missing Kids array"))?;
        kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

        self.page_count += page_ids.len();
        pages_dict.set("Count", Object::Integer(self.page_count as i64));

        Ok(())
    }

    /// Drop unreachable objects left over from the inputs (their catalogs,
    /// page trees, outlines) and serialize.
    fn finish(mut self, compress: bool) -> Result<Vec<u8>> {
        self.document.prune_objects();
        self.document.renumber_objects();

        if compress {
            self.document.compress();
        }

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes).map_err(|e| {
            MergeError::merge_failed(format!("Failed to serialize merged document: {e}"))
        })?;

        Ok(bytes)
    }
}

/// Copy inheritable attributes from the page's ancestors onto the page.
///
/// The nearest ancestor wins, and values already on the page are kept.
fn flatten_inherited_attributes(
    doc: &mut Document,
    page_id: ObjectId,
) -> std::result::Result<(), String> {
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();

    {
        let page = doc
            .get_dictionary(page_id)
            .map_err(|e| format!("page {page_id:?} is not a dictionary: {e}"))?;

        let mut missing: Vec<&[u8]> = INHERITABLE_PAGE_KEYS
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();

        let mut visited = HashSet::new();
        let mut parent = page.get(b"Parent").and_then(|p| p.as_reference()).ok();

        while let Some(parent_id) = parent {
            // Malformed trees can loop
            if missing.is_empty() || !visited.insert(parent_id) {
                break;
            }
            let Ok(node) = doc.get_dictionary(parent_id) else {
                break;
            };

            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = node.get(b"Parent").and_then(|p| p.as_reference()).ok();
        }
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = doc
        .get_dictionary_mut(page_id)
        .map_err(|e| format!("page {page_id:?} is not a dictionary: {e}"))?;
    for (key, value) in inherited {
        page.set(key.to_vec(), value);
    }

    Ok(())
}
