//! Document-info dictionary extraction using lopdf

use log::{debug, warn};
use lopdf::{Document, Object};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::error::{InspectError, Result};

/// Key/value pairs of a document-info dictionary, in dictionary order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: Vec<(String, String)>,
}

impl MetadataRecord {
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classification of one metadata read
#[derive(Debug)]
pub enum MetadataOutcome {
    Found(MetadataRecord),
    /// No `/Info` dictionary, or one without entries
    Empty,
    Failed(InspectError),
}

/// Read the metadata of one file, folding every failure into the outcome
pub fn inspect_metadata(path: &Path) -> MetadataOutcome {
    match read_document_info(path) {
        Ok(record) if record.is_empty() => MetadataOutcome::Empty,
        Ok(record) => MetadataOutcome::Found(record),
        Err(e) => {
            warn!("metadata read failed for {}: {}", path.display(), e);
            MetadataOutcome::Failed(e)
        }
    }
}

/// Open `path` read-only and return its document-info dictionary
///
/// The document is loaded into memory and dropped before returning, so no
/// handle on the file outlives this call. A panic inside lopdf is caught and
/// reported as `InspectError::ParserPanic`.
pub fn read_document_info(path: &Path) -> Result<MetadataRecord> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let doc = Document::load(path)?;
        document_info(&doc)
    }));

    match result {
        Ok(Ok(record)) => {
            debug!("{} metadata entries in {}", record.len(), path.display());
            Ok(record)
        }
        Ok(Err(source)) => Err(InspectError::MetadataParse {
            path: path.to_path_buf(),
            source,
        }),
        Err(_panic) => Err(InspectError::ParserPanic(path.to_path_buf())),
    }
}

fn document_info(doc: &Document) -> lopdf::Result<MetadataRecord> {
    let info = match doc.trailer.get(b"Info") {
        Ok(value) => resolve(doc, value)?,
        Err(_) => None,
    };
    let dict = match info {
        None | Some(Object::Null) => return Ok(MetadataRecord::default()),
        Some(info) => info.as_dict()?,
    };

    let mut entries = Vec::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let rendered = resolve(doc, value)?.map_or_else(|| "null".to_string(), render_value);
        entries.push((String::from_utf8_lossy(key).into_owned(), rendered));
    }
    Ok(MetadataRecord { entries })
}

/// Follow an indirect reference. `None` when it points at an undefined
/// object, which PDF readers must treat as null.
fn resolve<'a>(doc: &'a Document, value: &'a Object) -> lopdf::Result<Option<&'a Object>> {
    match value {
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(object) => Ok(Some(object)),
            Err(lopdf::Error::ObjectNotFound(_)) => {
                debug!("reference {:?} points at no object, reading it as null", id);
                Ok(None)
            }
            Err(e) => Err(e),
        },
        direct => Ok(Some(direct)),
    }
}

fn render_value(value: &Object) -> String {
    match value {
        Object::String(bytes, _) => decode_text_string(bytes),
        Object::Name(name) => format!("/{}", String::from_utf8_lossy(name)),
        Object::Integer(i) => i.to_string(),
        Object::Real(r) => r.to_string(),
        Object::Boolean(b) => b.to_string(),
        Object::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}

/// Decode a PDF text string: UTF-16BE or UTF-8 when a BOM is present,
/// otherwise PDFDocEncoding, read as Latin-1.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        String::from_utf8_lossy(utf8).into_owned()
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
