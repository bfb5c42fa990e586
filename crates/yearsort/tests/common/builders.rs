//! Fixture builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use lopdf::{dictionary, Document, Object, Stream};

use yearsort::{ProcessError, TextExtractor};

/// Builds a PDF with one page per entry. An empty string produces a page
/// without any content stream, i.e. no extractable text.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
        };
        if !text.is_empty() {
            let content = format!("BT /F1 12 Tf 50 700 Td ({}) Tj ET", text);
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.as_bytes().to_vec()));
            page.set("Contents", content_id);
        }
        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize PDF");
    bytes
}

/// Returns canned text keyed by file name. Files without an entry fail to
/// extract, like a corrupt PDF would.
#[derive(Default)]
pub struct ScriptedExtractor {
    texts: HashMap<String, String>,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filename: &str, text: &str) -> Self {
        self.texts.insert(filename.to_string(), text.to_string());
        self
    }
}

impl TextExtractor for ScriptedExtractor {
    fn extract(&self, path: &Path, _max_pages: usize) -> Result<String, ProcessError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.texts
            .get(&name)
            .cloned()
            .ok_or_else(|| ProcessError::PdfProcessing(format!("no text scripted for {}", name)))
    }
}
