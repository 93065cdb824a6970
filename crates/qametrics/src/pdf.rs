use std::path::Path;

use crate::document::Document;
use crate::error::LoadError;

impl Document {
    /// Decodes a PDF report into the engine's document representation: page
    /// text split into trimmed lines, with pseudo-tables detected from
    /// delimiter-separated line runs.
    ///
    /// Pages whose text extraction fails are skipped; born-digital reports
    /// normally extract cleanly and a partially readable report is still
    /// worth scanning.
    pub fn from_pdf_bytes(bytes: &[u8]) -> Result<Document, LoadError> {
        let _span = tracing::info_span!("load.pdf").entered();

        let pdf = lopdf::Document::load_mem(bytes)
            .map_err(|e| LoadError::PdfParse(format!("Failed to load PDF: {}", e)))?;

        let mut text = String::new();
        for (page_num, _) in pdf.get_pages() {
            match pdf.extract_text(&[page_num]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    tracing::warn!(page = page_num, "text extraction failed for page: {}", e);
                }
            }
        }

        Ok(Document::from_text(&text))
    }

    /// Reads a PDF report from disk and decodes it.
    pub fn from_pdf_path(path: &Path) -> Result<Document, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| LoadError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_pdf_bytes(&bytes)
    }
}
